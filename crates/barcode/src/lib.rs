//! Interleaved 2 of 5 barcode encoding for boleto identification lines.
//!
//! The encoder produces a [`BarcodeSymbol`]: an ordered list of bar and space
//! modules whose widths are calibrated so the whole symbol spans an exact
//! physical length. Drawing the symbol is left to the caller.

pub mod error;
pub mod i2of5;
pub mod symbol;

pub use error::EncodeError;
pub use i2of5::{BOLETO_DIGITS, FEBRABAN_HEIGHT, FEBRABAN_LENGTH, Interleaved2of5, WIDE_RATIO};
pub use symbol::{BarcodeSymbol, Module, ModuleKind, ModuleWidth};
