use crate::error::RenderError;
use boleto_layout::{Line, TextRun};
use boleto_types::{DecodedImage, PageSize, Rect, TextStyle};

/// The drawing primitives a boleto needs, in PDF user space (points, y up).
///
/// Calls between `begin_page` and `end_page` target the open page. `flush`
/// completes the output; nothing may be drawn afterwards.
pub trait DrawingSurface {
    fn begin_page(&mut self, size: PageSize) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;

    fn draw_line(&mut self, line: &Line) -> Result<(), RenderError>;

    /// Draws `run` anchored at its origin according to its alignment.
    fn draw_text(&mut self, run: &TextRun) -> Result<(), RenderError>;

    fn measure_text_width(&self, style: &TextStyle, text: &str) -> f64;

    /// Draws `image` inside `frame`; with `preserve_aspect` the image keeps its
    /// proportions and sits in the frame's lower-left corner.
    fn draw_image(&mut self, image: &DecodedImage, frame: Rect, preserve_aspect: bool) -> Result<(), RenderError>;

    fn flush(&mut self) -> Result<(), RenderError>;
}
