//! The document state machine.
//!
//! A [`BoletoDocument`] owns its drawing surface. Pages are opened lazily by
//! the first draw call on them; every draw call composes its whole layout
//! before the first draw command, so a record that fails to encode leaves the
//! page untouched. Any failure during a draw call invalidates the document.

use crate::config::LayoutMode;
use crate::error::BoletoError;
use boleto_barcode::Interleaved2of5;
use boleto_layout::{LayoutEngine, LayoutError, NumberFormat, PageGeometry, PageLayout, RegionCompositor, TextMeasure};
use boleto_render_core::{DrawingSurface, PagePainter};
use boleto_traits::ImageSource;
use boleto_types::{BoletoRecord, Orientation, PageSize, Point, Size, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    Open,
    Finalized,
    Invalidated,
}

/// Measures text with the surface that will draw it.
struct SurfaceMetrics<'s, S: ?Sized>(&'s S);

impl<S: DrawingSurface + ?Sized> TextMeasure for SurfaceMetrics<'_, S> {
    fn text_width(&self, style: &TextStyle, text: &str) -> f64 {
        self.0.measure_text_width(style, text)
    }
}

struct OpenPage {
    orientation: Orientation,
    cursor: Point,
}

pub struct BoletoDocument<S: DrawingSurface> {
    surface: S,
    images: Box<dyn ImageSource>,
    geometry: PageGeometry,
    format: NumberFormat,
    encoder: Interleaved2of5,
    mode: LayoutMode,
    state: DocumentState,
    page: Option<OpenPage>,
    pages: usize,
}

impl<S: DrawingSurface> BoletoDocument<S> {
    pub(crate) fn new(
        surface: S,
        images: Box<dyn ImageSource>,
        geometry: PageGeometry,
        format: NumberFormat,
        encoder: Interleaved2of5,
        mode: LayoutMode,
    ) -> Self {
        Self {
            surface,
            images,
            geometry,
            format,
            encoder,
            mode,
            state: DocumentState::Open,
            page: None,
            pages: 0,
        }
    }

    pub fn state(&self) -> DocumentState {
        self.state
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Pages ended so far, not counting the one being drawn.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Gives the surface back, typically after [`save`](Self::save).
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Draws a teller receipt and a payer receipt on a portrait page.
    pub fn draw_full_slip(&mut self, record: &BoletoRecord) -> Result<Size, BoletoError> {
        self.draw(|engine, cursor| engine.full_slip(record, cursor))
    }

    /// Draws one or two carnê slips (stub + teller receipt) on a landscape page.
    pub fn draw_carne_dual(
        &mut self,
        first: &BoletoRecord,
        second: Option<&BoletoRecord>,
    ) -> Result<Size, BoletoError> {
        self.draw(|engine, cursor| engine.carne_dual(first, second, cursor))
    }

    /// Draws a batch in the document's layout mode, one page per slip (full
    /// slip) or per pair of slips (carnê). Returns the number of pages drawn.
    pub fn draw_records(&mut self, records: &[BoletoRecord]) -> Result<usize, BoletoError> {
        let mut drawn = 0;
        for chunk in records.chunks(self.mode.slips_per_page()) {
            if drawn > 0 {
                self.next_page()?;
            }
            match (self.mode, chunk) {
                (LayoutMode::Carne, [first, rest @ ..]) => self.draw_carne_dual(first, rest.first())?,
                (_, [record, ..]) => self.draw_full_slip(record)?,
                (_, []) => continue,
            };
            drawn += 1;
        }
        log::debug!("Drew {} records on {} pages", records.len(), drawn);
        Ok(drawn)
    }

    /// Ends the current page. Without an open page this emits a blank one.
    pub fn next_page(&mut self) -> Result<(), BoletoError> {
        self.ensure_open()?;
        let result = self.end_or_blank_page();
        self.guard(result)
    }

    /// Ends the open page, or writes a single blank page if the document is
    /// still empty, and flushes the surface. The document is finalized.
    pub fn save(&mut self) -> Result<(), BoletoError> {
        self.ensure_open()?;
        let result = self.finish_pages();
        self.guard(result)?;

        self.state = DocumentState::Finalized;
        log::debug!("Document saved with {} pages", self.pages);
        Ok(())
    }

    fn draw<F>(&mut self, place: F) -> Result<Size, BoletoError>
    where
        F: FnOnce(&LayoutEngine<'_>, Point) -> Result<(Point, PageLayout), LayoutError>,
    {
        self.ensure_open()?;
        let cursor = self.page.as_ref().map_or(Point::ORIGIN, |p| p.cursor);

        let placed = {
            let metrics = SurfaceMetrics(&self.surface);
            let compositor = RegionCompositor::new(self.geometry, self.format, &metrics).with_encoder(self.encoder);
            place(&LayoutEngine::new(compositor), cursor)
        };
        let (cursor, layout) = self.guard(placed.map_err(BoletoError::from))?;

        let result = self.paint(&layout, cursor);
        self.guard(result)?;
        Ok(layout.bounds)
    }

    fn paint(&mut self, layout: &PageLayout, cursor: Point) -> Result<(), BoletoError> {
        match &mut self.page {
            Some(page) => {
                if page.orientation != layout.orientation {
                    log::warn!(
                        "Drawing a {:?} layout on a {:?} page",
                        layout.orientation,
                        page.orientation
                    );
                }
                page.cursor = cursor;
            }
            None => {
                self.surface
                    .begin_page(PageSize::A4.oriented(layout.orientation))?;
                self.page = Some(OpenPage {
                    orientation: layout.orientation,
                    cursor,
                });
            }
        }
        PagePainter::new(self.images.as_ref()).paint(&mut self.surface, layout)?;
        Ok(())
    }

    fn end_or_blank_page(&mut self) -> Result<(), BoletoError> {
        if self.page.take().is_none() {
            log::debug!("Emitting blank page {}", self.pages + 1);
            self.surface
                .begin_page(PageSize::A4.oriented(self.mode.orientation()))?;
        }
        self.surface.end_page()?;
        self.pages += 1;
        Ok(())
    }

    fn finish_pages(&mut self) -> Result<(), BoletoError> {
        if self.page.is_some() || self.pages == 0 {
            self.end_or_blank_page()?;
        }
        self.surface.flush()?;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), BoletoError> {
        match self.state {
            DocumentState::Open => Ok(()),
            DocumentState::Finalized => Err(BoletoError::Finalized),
            DocumentState::Invalidated => Err(BoletoError::Invalidated),
        }
    }

    /// Invalidates the document when `result` is an error.
    fn guard<T>(&mut self, result: Result<T, BoletoError>) -> Result<T, BoletoError> {
        if let Err(e) = &result {
            log::error!("Document invalidated: {}", e);
            self.state = DocumentState::Invalidated;
        }
        result
    }
}
