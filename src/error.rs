use boleto_layout::{FormatError, LayoutError};
use boleto_render_core::RenderError;
use thiserror::Error;

/// Everything that can go wrong while producing a boleto document.
#[derive(Error, Debug)]
pub enum BoletoError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid number format: {0}")]
    Format(#[from] FormatError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document has already been saved")]
    Finalized,

    #[error("Document is unusable after an earlier failure")]
    Invalidated,
}
