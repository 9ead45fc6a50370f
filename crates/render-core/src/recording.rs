use crate::error::RenderError;
use crate::traits::DrawingSurface;
use crate::utils::image_frame;
use boleto_layout::{Line, StandardFontMetrics, TextMeasure, TextRun};
use boleto_types::{DecodedImage, PageSize, Rect, TextStyle};

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line(Line),
    Text(TextRun),
    /// Image drawn into `frame`, already fitted when aspect was preserved.
    Image { width: u32, height: u32, frame: Rect },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPage {
    pub size: PageSize,
    pub commands: Vec<DrawCommand>,
}

/// A surface that keeps every draw call in memory.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pages: Vec<RecordedPage>,
    current: Option<RecordedPage>,
    metrics: StandardFontMetrics,
    flushed: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed pages, in order.
    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    pub fn is_flushed(&self) -> bool {
        self.flushed
    }

    fn page_mut(&mut self) -> Result<&mut RecordedPage, RenderError> {
        if self.flushed {
            return Err(RenderError::InvalidState("surface already flushed"));
        }
        self.current
            .as_mut()
            .ok_or(RenderError::InvalidState("no page is open"))
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_page(&mut self, size: PageSize) -> Result<(), RenderError> {
        if self.flushed {
            return Err(RenderError::InvalidState("surface already flushed"));
        }
        if self.current.is_some() {
            return Err(RenderError::InvalidState("a page is already open"));
        }
        self.current = Some(RecordedPage {
            size,
            commands: Vec::new(),
        });
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let page = self
            .current
            .take()
            .ok_or(RenderError::InvalidState("no page is open"))?;
        self.pages.push(page);
        Ok(())
    }

    fn draw_line(&mut self, line: &Line) -> Result<(), RenderError> {
        self.page_mut()?.commands.push(DrawCommand::Line(*line));
        Ok(())
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<(), RenderError> {
        self.page_mut()?.commands.push(DrawCommand::Text(run.clone()));
        Ok(())
    }

    fn measure_text_width(&self, style: &TextStyle, text: &str) -> f64 {
        self.metrics.text_width(style, text)
    }

    fn draw_image(&mut self, image: &DecodedImage, frame: Rect, preserve_aspect: bool) -> Result<(), RenderError> {
        let frame = image_frame(image, frame, preserve_aspect);
        self.page_mut()?.commands.push(DrawCommand::Image {
            width: image.width,
            height: image.height,
            frame,
        });
        Ok(())
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        if self.flushed {
            return Err(RenderError::InvalidState("surface already flushed"));
        }
        if self.current.is_some() {
            self.end_page()?;
        }
        self.flushed = true;
        Ok(())
    }
}
