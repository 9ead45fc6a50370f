//! Places composed regions on a page.
//!
//! The engine is a pure function of its inputs: it takes the records and a
//! cursor, composes every region it needs up front, and returns the placed
//! layout together with the cursor for whatever comes next. Nothing is drawn
//! here.

use crate::LayoutError;
use crate::compositor::RegionCompositor;
use crate::region::{DashPattern, Line, Region, RegionKind};
use boleto_types::{BoletoRecord, Orientation, Point, Size, mm};

const CUT_DASH: DashPattern = DashPattern { on: 1.0, off: 2.0 };

// Full slip, portrait.
const SLIP_LEFT: f64 = mm(9.0);
const SLIP_BOTTOM: f64 = mm(10.0);
const CUT_TO_BARCODE: f64 = mm(4.0);
const TELLER_TO_CUT: f64 = mm(12.0);
const CUT_TO_PAYER: f64 = mm(20.0);

// Carnê, landscape.
const CARNE_BOTTOM: f64 = mm(5.0);
const CARNE_LEFT: f64 = mm(15.0);
const STUB_TO_CUT: f64 = mm(8.0);
const CUT_TO_TELLER: f64 = mm(8.0);
const PAIR_GAP: f64 = mm(13.0);

/// Everything to draw for one call, in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub orientation: Orientation,
    pub regions: Vec<Region>,
    pub cut_lines: Vec<Line>,
    /// Extent consumed from the cursor.
    pub bounds: Size,
}

impl PageLayout {
    fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            regions: Vec::new(),
            cut_lines: Vec::new(),
            bounds: Size::zero(),
        }
    }

    pub fn regions_of(&self, kind: RegionKind) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(move |r| r.kind == kind)
    }
}

pub struct LayoutEngine<'a> {
    compositor: RegionCompositor<'a>,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(compositor: RegionCompositor<'a>) -> Self {
        Self { compositor }
    }

    pub fn compositor(&self) -> &RegionCompositor<'a> {
        &self.compositor
    }

    /// Height consumed by [`full_slip`](Self::full_slip); independent of content.
    pub fn full_slip_height(&self) -> f64 {
        SLIP_BOTTOM
            + CUT_TO_BARCODE
            + self.compositor.teller_height()
            + TELLER_TO_CUT
            + CUT_TO_PAYER
            + self.compositor.payer_height()
    }

    /// Teller receipt and payer receipt stacked on one portrait page, each
    /// preceded by a dashed cut line.
    pub fn full_slip(&self, record: &BoletoRecord, cursor: Point) -> Result<(Point, PageLayout), LayoutError> {
        let teller = self.compositor.compose(RegionKind::TellerReceipt, record)?;
        let payer = self.compositor.compose(RegionKind::PayerReceipt, record)?;

        let width = self.compositor.geometry().slip_width;
        let x = cursor.x + SLIP_LEFT;
        let mut y = cursor.y + SLIP_BOTTOM;
        let mut layout = PageLayout::new(Orientation::Portrait);

        layout.cut_lines.push(Line::horizontal(x, y, width, 1.0).dashed(CUT_DASH));
        y += CUT_TO_BARCODE;
        let teller_height = teller.size.height;
        layout.regions.push(teller.translated(Point::new(x, y)));
        y += teller_height + TELLER_TO_CUT;

        layout.cut_lines.push(Line::horizontal(x, y, width, 1.0).dashed(CUT_DASH));
        y += CUT_TO_PAYER;
        let payer_height = payer.size.height;
        layout.regions.push(payer.translated(Point::new(x, y)));
        y += payer_height;

        layout.bounds = Size::new(width, y - cursor.y);
        log::debug!("Full slip placed at {:?}, bounds {:?}", cursor, layout.bounds);
        Ok((Point::new(cursor.x, y), layout))
    }

    /// One or two stub + teller receipt pairs on a landscape page.
    ///
    /// Both records are composed before anything is placed, so a bad second
    /// record fails the whole call.
    pub fn carne_dual(
        &self,
        first: &BoletoRecord,
        second: Option<&BoletoRecord>,
        cursor: Point,
    ) -> Result<(Point, PageLayout), LayoutError> {
        let first = self.carne_pair(first)?;
        let second = second.map(|record| self.carne_pair(record)).transpose()?;

        let mut layout = PageLayout::new(Orientation::Landscape);
        let mut y = cursor.y + CARNE_BOTTOM;
        let mut extent = self.place_pair(&mut layout, first, Point::new(cursor.x, y));
        if let Some(pair) = second {
            y += extent.height + PAIR_GAP;
            extent = self.place_pair(&mut layout, pair, Point::new(cursor.x, y));
        } else {
            log::debug!("Carnê page with a single slip");
        }
        y += extent.height;

        layout.bounds = Size::new(extent.width, y - cursor.y);
        log::debug!("Carnê placed at {:?}, bounds {:?}", cursor, layout.bounds);
        Ok((Point::new(cursor.x, y), layout))
    }

    fn carne_pair(&self, record: &BoletoRecord) -> Result<(Region, Region), LayoutError> {
        let stub = self.compositor.compose(RegionKind::PayerReceiptStub, record)?;
        let teller = self.compositor.compose(RegionKind::TellerReceipt, record)?;
        Ok((stub, teller))
    }

    /// Places a stub, its cut line and the teller receipt left to right with
    /// their bottoms on `at.y`. Returns the width used from `at.x` and the
    /// teller receipt's height.
    fn place_pair(&self, layout: &mut PageLayout, (stub, teller): (Region, Region), at: Point) -> Size {
        let mut x = at.x + CARNE_LEFT;
        let stub_size = stub.size;
        layout.regions.push(stub.translated(Point::new(x, at.y)));

        x += stub_size.width + STUB_TO_CUT;
        layout
            .cut_lines
            .push(Line::vertical(x, at.y, stub_size.height, 1.0).dashed(CUT_DASH));

        x += CUT_TO_TELLER;
        let teller_size = teller.size;
        layout.regions.push(teller.translated(Point::new(x, at.y)));
        x += teller_size.width;

        Size::new(x - at.x, teller_size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::test_support::record;
    use crate::fonts::StandardFontMetrics;
    use crate::format::NumberFormat;
    use crate::geometry::PageGeometry;
    use boleto_barcode::EncodeError;

    const EPS: f64 = 1e-9;

    fn engine(metrics: &StandardFontMetrics) -> LayoutEngine<'_> {
        let _ = env_logger::builder().is_test(true).try_init();
        LayoutEngine::new(RegionCompositor::new(
            PageGeometry::FEBRABAN,
            NumberFormat::brazilian(),
            metrics,
        ))
    }

    fn teller_height() -> f64 {
        14.5 * mm(6.5) + 10.0
    }

    #[test]
    fn test_full_slip_height_is_sum_of_fixed_parts() {
        let metrics = StandardFontMetrics::new();
        let engine = engine(&metrics);
        let expected = mm(10.0) + mm(4.0) + teller_height() + mm(12.0) + mm(20.0) + 18.0 * mm(6.5);

        let (cursor, layout) = engine.full_slip(&record(), Point::ORIGIN).unwrap();
        assert!((layout.bounds.height - expected).abs() < EPS);
        assert!((layout.bounds.width - mm(190.0)).abs() < EPS);
        assert!((cursor.y - expected).abs() < EPS);
        assert!((engine.full_slip_height() - expected).abs() < EPS);

        // Content does not change the stack.
        let mut busy = record();
        busy.logo = Some("logo_bb.jpg".into());
        busy.memo = (0..30).map(|i| format!("Linha {i}")).collect();
        busy.payer_lines = vec!["Nome".into(); 6];
        let (_, busy_layout) = engine.full_slip(&busy, Point::ORIGIN).unwrap();
        assert_eq!(busy_layout.bounds, layout.bounds);
    }

    #[test]
    fn test_full_slip_positions() {
        let metrics = StandardFontMetrics::new();
        let (_, layout) = engine(&metrics).full_slip(&record(), Point::ORIGIN).unwrap();
        assert_eq!(layout.orientation, Orientation::Portrait);
        assert_eq!(layout.regions.len(), 2);
        assert_eq!(layout.cut_lines.len(), 2);

        let first_cut = &layout.cut_lines[0];
        assert!((first_cut.from.x - mm(9.0)).abs() < EPS);
        assert!((first_cut.from.y - mm(10.0)).abs() < EPS);
        assert_eq!(first_cut.dash, Some(CUT_DASH));

        let teller = &layout.regions[0];
        assert_eq!(teller.kind, RegionKind::TellerReceipt);
        assert!((teller.origin.y - mm(14.0)).abs() < EPS);

        let payer = &layout.regions[1];
        let payer_y = mm(14.0) + teller_height() + mm(32.0);
        assert!((payer.origin.y - payer_y).abs() < EPS);
        assert!((layout.cut_lines[1].from.y - (payer_y - mm(20.0))).abs() < EPS);
    }

    #[test]
    fn test_full_slip_is_deterministic() {
        let metrics = StandardFontMetrics::new();
        let engine = engine(&metrics);
        let a = engine.full_slip(&record(), Point::ORIGIN).unwrap();
        let b = engine.full_slip(&record(), Point::ORIGIN).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_carne_single_slip_draws_one_pair() {
        let metrics = StandardFontMetrics::new();
        let (_, layout) = engine(&metrics).carne_dual(&record(), None, Point::ORIGIN).unwrap();
        assert_eq!(layout.orientation, Orientation::Landscape);
        assert_eq!(layout.regions_of(RegionKind::PayerReceiptStub).count(), 1);
        assert_eq!(layout.regions_of(RegionKind::TellerReceipt).count(), 1);
        assert_eq!(layout.cut_lines.len(), 1);
        assert!((layout.bounds.height - (mm(5.0) + teller_height())).abs() < EPS);

        let stub = &layout.regions[0];
        assert!((stub.origin.x - mm(15.0)).abs() < EPS);
        let cut = &layout.cut_lines[0];
        assert!((cut.from.x - mm(93.0)).abs() < EPS);
        assert!((cut.to.y - cut.from.y - 14.0 * mm(6.5)).abs() < EPS);
        let teller = &layout.regions[1];
        assert!((teller.origin.x - mm(101.0)).abs() < EPS);
    }

    #[test]
    fn test_carne_pairs_are_identical_and_13mm_apart() {
        let metrics = StandardFontMetrics::new();
        let data = record();
        let (_, layout) = engine(&metrics).carne_dual(&data, Some(&data), Point::ORIGIN).unwrap();
        assert_eq!(layout.regions.len(), 4);
        assert_eq!(layout.cut_lines.len(), 2);

        let offset = teller_height() + mm(13.0);
        for (lower, upper) in layout.regions[..2].iter().zip(&layout.regions[2..]) {
            assert_eq!(lower.kind, upper.kind);
            assert!((upper.origin.x - lower.origin.x).abs() < EPS);
            assert!((upper.origin.y - lower.origin.y - offset).abs() < EPS);
            assert_eq!(lower.texts.len(), upper.texts.len());
            assert_eq!(lower.lines.len(), upper.lines.len());
            for (a, b) in lower.texts.iter().zip(&upper.texts) {
                assert_eq!(a.content, b.content);
                assert!((b.origin.y - a.origin.y - offset).abs() < 1e-6);
            }
        }
        let cut_offset = layout.cut_lines[1].from.y - layout.cut_lines[0].from.y;
        assert!((cut_offset - offset).abs() < EPS);
    }

    #[test]
    fn test_bad_second_record_fails_the_call() {
        let metrics = StandardFontMetrics::new();
        let mut bad = record();
        bad.barcode.replace_range(3..4, "X");
        let err = engine(&metrics)
            .carne_dual(&record(), Some(&bad), Point::ORIGIN)
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Barcode(EncodeError::InvalidCharacter { position: 3, character: 'X' })
        ));
    }
}
