//! Fixed-grid layout for Febraban boletos.
//!
//! [`RegionCompositor`] turns a record into positioned text, rules, images and
//! a barcode for one region of the slip; [`LayoutEngine`] stacks regions into
//! full-slip or carnê pages.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Barcode encoding failed: {0}")]
    Barcode(#[from] boleto_barcode::EncodeError),
    #[error("Invalid number format: {0}")]
    Format(#[from] format::FormatError),
}

pub mod assets;
pub mod compositor;
pub mod engine;
pub mod fonts;
pub mod format;
pub mod geometry;
pub mod region;
pub mod text;

pub use self::compositor::RegionCompositor;
pub use self::engine::{LayoutEngine, PageLayout};
pub use self::fonts::{StandardFontMetrics, TextMeasure};
pub use self::format::{FormatError, NumberFormat, format_date};
pub use self::geometry::PageGeometry;
pub use self::region::{
    DashPattern, ImagePlacement, ImageRef, Line, PlacedBarcode, Region, RegionKind, TextRole, TextRun,
};

pub use boleto_types::BoletoRecord;
