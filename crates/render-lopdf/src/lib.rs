//! Streaming PDF output for boletos using lopdf.
//!
//! [`LopdfSurface`] implements the drawing surface on top of
//! [`StreamingPdfWriter`], which writes page content as soon as a page is
//! closed and only keeps the small shared dictionaries until the end.

mod helpers;
mod surface;
mod writer;

pub use helpers::to_win_ansi;
pub use surface::LopdfSurface;
pub use writer::StreamingPdfWriter;
