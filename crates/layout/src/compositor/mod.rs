//! Builds the fixed-grid regions of a boleto from a record.
//!
//! Every region is composed in local coordinates with its origin at the
//! bottom-left corner of its frame. Composition is pure: the same record and
//! configuration always yield the same region.

mod payer;
mod stub;
mod teller;

use crate::LayoutError;
use crate::fonts::TextMeasure;
use crate::format::NumberFormat;
use crate::geometry::PageGeometry;
use crate::region::{Region, RegionKind, TextRole};
use crate::text::truncate_to_width;
use boleto_barcode::Interleaved2of5;
use boleto_types::{BoletoRecord, TextAlign, TextStyle};
use std::borrow::Cow;

pub struct RegionCompositor<'a> {
    geometry: PageGeometry,
    format: NumberFormat,
    metrics: &'a dyn TextMeasure,
    encoder: Interleaved2of5,
}

impl<'a> RegionCompositor<'a> {
    pub fn new(geometry: PageGeometry, format: NumberFormat, metrics: &'a dyn TextMeasure) -> Self {
        Self {
            geometry,
            format,
            metrics,
            encoder: Interleaved2of5::default(),
        }
    }

    /// Replaces the barcode encoder, e.g. to enable guard patterns.
    pub fn with_encoder(mut self, encoder: Interleaved2of5) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn compose(&self, kind: RegionKind, record: &BoletoRecord) -> Result<Region, LayoutError> {
        let region = match kind {
            RegionKind::TellerReceipt => self.teller_receipt(record)?,
            RegionKind::PayerReceipt => self.payer_receipt(record),
            RegionKind::PayerReceiptStub => self.payer_receipt_stub(record),
        };
        log::debug!(
            "Composed {:?}: {} texts, {} lines, {} images, consumed {:.2}x{:.2}",
            kind,
            region.texts.len(),
            region.lines.len(),
            region.images.len(),
            region.consumed().width,
            region.consumed().height
        );
        Ok(region)
    }

    fn title_style(&self) -> TextStyle {
        TextStyle::helvetica(self.geometry.title_size)
    }

    fn value_style(&self) -> TextStyle {
        TextStyle::helvetica(self.geometry.value_size)
    }

    fn label(&self, region: &mut Region, x: f64, y: f64, text: &str) {
        region.push_text(TextRole::Label, self.title_style(), TextAlign::Left, x, y, text);
    }

    fn fit<'t>(&self, text: &'t str, budget: f64, style: &TextStyle) -> Cow<'t, str> {
        truncate_to_width(text, budget, style, self.metrics)
    }

    /// Places a value, shortened to fit `budget` points.
    fn value(
        &self,
        region: &mut Region,
        style: TextStyle,
        align: TextAlign,
        (x, y): (f64, f64),
        text: &str,
        budget: f64,
    ) {
        let fitted = self.fit(text, budget, &style);
        region.push_text(TextRole::Value, style, align, x, y, fitted);
    }

    fn heading(&self, region: &mut Region, style: TextStyle, align: TextAlign, x: f64, y: f64, text: &str) {
        region.push_text(TextRole::Heading, style, align, x, y, text);
    }
}
