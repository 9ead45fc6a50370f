//! Core rendering abstractions for boleto output.
//!
//! This crate provides:
//! - the `DrawingSurface` trait that output backends implement
//! - `PagePainter`, which replays a composed page layout onto a surface
//! - `RecordingSurface`, an in-memory surface for tests and dry runs
//! - error types for rendering operations

mod error;
mod painter;
mod recording;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use painter::PagePainter;
pub use recording::{DrawCommand, RecordedPage, RecordingSurface};
pub use traits::DrawingSurface;
