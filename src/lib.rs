//! Febraban boleto rendering.
//!
//! ```no_run
//! use boleto::{BoletoRecord, DocumentBuilder, LayoutMode};
//! use std::fs::File;
//! use std::io::BufWriter;
//!
//! # fn main() -> Result<(), boleto::BoletoError> {
//! let records: Vec<BoletoRecord> = serde_json::from_str(&std::fs::read_to_string("boletos.json")?)?;
//! let mut doc = DocumentBuilder::new()
//!     .with_mode(LayoutMode::Carne)
//!     .with_asset_dir("logos")
//!     .build_pdf(BufWriter::new(File::create("carne.pdf")?))?;
//! doc.draw_records(&records)?;
//! doc.save()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod error;

pub use config::{DocumentBuilder, DocumentConfig, LayoutMode};
pub use document::{BoletoDocument, DocumentState};
pub use error::BoletoError;

pub use boleto_layout::{NumberFormat, PageGeometry};
pub use boleto_render_core::{DrawingSurface, RecordingSurface};
pub use boleto_render_lopdf::LopdfSurface;
pub use boleto_types::{BoletoRecord, Orientation, Size};
