//! Recibo de caixa / ficha de compensação: the bank's half of the slip.

use super::RegionCompositor;
use crate::LayoutError;
use crate::format::format_date;
use crate::region::{ImagePlacement, ImageRef, Line, PlacedBarcode, Region, RegionKind, TextRole};
use boleto_barcode::{FEBRABAN_HEIGHT, FEBRABAN_LENGTH};
use boleto_types::{BoletoRecord, Point, Rect, Size, TextAlign, TextStyle, mm};

/// Extra height of the payee row, which carries two value lines.
pub const PAYEE_ROW_EXTRA: f64 = 10.0;

const AMOUNT_COLUMN: f64 = mm(45.0);
const LOGO_WIDTH: f64 = mm(40.0);
const BANK_CODE_RIGHT: f64 = mm(60.0);
const BANK_CODE_CENTER: f64 = mm(50.0);
const PAYER_INDENT: f64 = mm(15.0);

// Sub-columns of the bank-use and document-date rows.
const COL_WALLET: f64 = mm(30.0);
const COL_SPECIES: f64 = mm(50.0);
const COL_QUANTITY: f64 = mm(70.0);
const COL_ACCEPTANCE: f64 = mm(90.0);
const COL_UNIT_VALUE: f64 = mm(110.0);

impl RegionCompositor<'_> {
    /// Height of the teller receipt frame.
    pub fn teller_height(&self) -> f64 {
        self.geometry.rows(14.5) + PAYEE_ROW_EXTRA
    }

    pub(super) fn teller_receipt(&self, record: &BoletoRecord) -> Result<Region, LayoutError> {
        let g = self.geometry;
        let (w, h, sp, dt) = (g.slip_width, g.row_height, g.padding, g.title_offset());
        let right = w - AMOUNT_COLUMN;
        let value = self.value_style();
        let amount_budget = AMOUNT_COLUMN - 3.0 * sp;

        // Encode first so a bad barcode leaves nothing behind.
        let symbol = self
            .encoder
            .encode(&record.barcode, FEBRABAN_LENGTH, FEBRABAN_HEIGHT)?;

        let mut region = Region::new(RegionKind::TellerReceipt, Size::new(w, self.teller_height()));
        region.barcode = Some(PlacedBarcode {
            origin: Point::new(2.0 * sp, 0.0),
            symbol,
        });

        let mut y = g.rows(1.5);
        region.push_text(
            TextRole::Label,
            self.title_style(),
            TextAlign::Right,
            w,
            y + dt - 1.0,
            "Autenticação Mecânica / Ficha de Compensação",
        );

        y += h;
        region.lines.push(Line::horizontal(0.0, y, w, 2.0));
        self.label(&mut region, right + sp, y + sp, "Código de baixa");
        self.label(&mut region, 0.0, y + sp, "Sacador / Avalista");

        y += h;
        self.label(&mut region, 0.0, y + dt, "Pagador");

        y += h;
        region.lines.push(Line::horizontal(0.0, y, w, 2.0));
        for (i, line) in record.payer_lines.iter().enumerate() {
            let baseline = (y - 10.0) - i as f64 * g.value_pitch;
            self.value(&mut region, value, TextAlign::Left, (PAYER_INDENT, baseline), line, w - PAYER_INDENT - sp);
        }

        // Right column of amount cells, bottom to top.
        region.lines.push(Line::vertical(right, y, g.rows(9.5), 1.0));
        let amount_cells = [
            ("(=) Valor cobrado", record.charged_value),
            ("(+) Outros acréscimos", record.other_additions),
            ("(+) Mora/Multa", record.penalty),
            ("(-) Outras deduções", record.other_deductions),
            ("(-) Descontos/Abatimentos", record.discount),
        ];
        for (i, (caption, amount)) in amount_cells.iter().enumerate() {
            if i > 0 {
                y += h;
                region.lines.push(Line::horizontal(right, y, AMOUNT_COLUMN, 1.0));
            }
            self.label(&mut region, right + sp, y + dt, caption);
            let text = self.format.optional_amount(*amount);
            if !text.is_empty() {
                self.value(&mut region, value, TextAlign::Right, (w - 2.0 * sp, y + sp), &text, amount_budget);
            }
        }

        self.label(&mut region, 0.0, y + dt, "Instruções");
        for (i, line) in record.instructions.iter().enumerate() {
            let baseline = y - i as f64 * g.value_pitch;
            self.value(&mut region, value, TextAlign::Left, (2.0 * sp, baseline), line, right - 3.0 * sp);
        }

        // Bank use row.
        y += h;
        region.lines.push(Line::horizontal(0.0, y, w, 1.0));
        self.label(&mut region, 0.0, y + dt, "Uso do banco");
        region.lines.push(Line::vertical(COL_WALLET, y, 2.0 * h, 1.0));
        self.label(&mut region, COL_WALLET + sp, y + dt, "Carteira");
        region.lines.push(Line::vertical(COL_SPECIES, y, h, 1.0));
        self.label(&mut region, COL_SPECIES + sp, y + dt, "Espécie");
        region.lines.push(Line::vertical(COL_QUANTITY, y, 2.0 * h, 1.0));
        self.label(&mut region, COL_QUANTITY + sp, y + dt, "Quantidade");
        region.lines.push(Line::vertical(COL_UNIT_VALUE, y, 2.0 * h, 1.0));
        self.label(&mut region, COL_UNIT_VALUE + sp, y + dt, "Valor");
        self.label(&mut region, right + sp, y + dt, "(=) Valor documento");

        let cells = [
            (COL_WALLET, COL_SPECIES, record.wallet.clone()),
            (COL_SPECIES, COL_QUANTITY, record.species.clone()),
            (COL_QUANTITY, COL_UNIT_VALUE, record.quantity.clone()),
            (COL_UNIT_VALUE, right, self.format.optional_amount(record.unit_value)),
        ];
        for (left, next, text) in &cells {
            self.value(&mut region, value, TextAlign::Left, (left + sp, y + sp), text, next - left - 2.0 * sp);
        }
        let document_value = self.format.amount(record.document_value);
        self.value(&mut region, value, TextAlign::Right, (w - 2.0 * sp, y + sp), &document_value, amount_budget);

        // Document date row.
        y += h;
        region.lines.push(Line::horizontal(0.0, y, w, 1.0));
        self.label(&mut region, 0.0, y + dt, "Data do documento");
        self.label(&mut region, COL_WALLET + sp, y + dt, "N. do documento");
        self.label(&mut region, COL_QUANTITY + sp, y + dt, "Espécie doc");
        region.lines.push(Line::vertical(COL_ACCEPTANCE, y, h, 1.0));
        self.label(&mut region, COL_ACCEPTANCE + sp, y + dt, "Aceite");
        self.label(&mut region, COL_UNIT_VALUE + sp, y + dt, "Data processamento");
        self.label(&mut region, right + sp, y + dt, "Nosso número");

        let cells = [
            (0.0, COL_WALLET, format_date(record.document_date)),
            (COL_WALLET, COL_QUANTITY, record.document_number.clone()),
            (COL_QUANTITY, COL_ACCEPTANCE, record.document_species.clone()),
            (COL_ACCEPTANCE, COL_UNIT_VALUE, record.acceptance.clone()),
            (COL_UNIT_VALUE, right, format_date(record.processing_date)),
        ];
        for (left, next, text) in &cells {
            let x = if *left == 0.0 { 0.0 } else { left + sp };
            self.value(&mut region, value, TextAlign::Left, (x, y + sp), text, next - x - sp);
        }
        self.value(&mut region, value, TextAlign::Right, (w - 2.0 * sp, y + sp), &record.our_number, amount_budget);

        // Payee row, one value line taller than the others.
        y += h;
        region.lines.push(Line::horizontal(0.0, y, w, 1.0));
        self.label(&mut region, 0.0, y + dt + PAYEE_ROW_EXTRA, "Beneficiário");
        self.value(
            &mut region,
            self.title_style(),
            TextAlign::Left,
            (right + sp, y + dt + PAYEE_ROW_EXTRA),
            &record.payee_label,
            AMOUNT_COLUMN - 2.0 * sp,
        );
        let payee = format!("{} - CPF/CNPJ: {}", record.payee_name, record.payee_tax_id);
        self.value(&mut region, value, TextAlign::Left, (0.0, y + sp + PAYEE_ROW_EXTRA), &payee, right - sp);
        self.value(&mut region, value, TextAlign::Left, (0.0, y + sp), &record.payee_address, right - sp);
        self.value(&mut region, value, TextAlign::Right, (w - 2.0 * sp, y + sp), &record.agency_account, amount_budget);

        // Payment location row.
        y += h + PAYEE_ROW_EXTRA;
        region.lines.push(Line::horizontal(0.0, y, w, 1.0));
        self.label(&mut region, 0.0, y + dt, "Local de pagamento");
        self.label(&mut region, right + sp, y + dt, "Vencimento");
        self.value(&mut region, value, TextAlign::Left, (0.0, y + sp), &record.payment_location, right - sp);
        let due = format_date(record.due_date);
        self.value(&mut region, value, TextAlign::Right, (w - 2.0 * sp, y + sp), &due, amount_budget);

        // Header row.
        y += h;
        region.lines.push(Line::horizontal(0.0, y, w, 3.0));
        region.lines.push(Line::vertical(LOGO_WIDTH, y, h, 2.0));
        region.lines.push(Line::vertical(BANK_CODE_RIGHT, y, h, 2.0));
        if let Some(logo) = &record.logo {
            region.images.push(ImagePlacement {
                source: ImageRef::Named(logo.clone()),
                frame: Rect::new(0.0, y + sp + 1.0, LOGO_WIDTH, h),
                preserve_aspect: true,
            });
        }
        self.heading(
            &mut region,
            TextStyle::helvetica_bold(18.0),
            TextAlign::Center,
            BANK_CODE_CENTER,
            y + 2.0 * sp,
            &record.bank_code,
        );
        let digitable = TextStyle::helvetica_bold(11.5);
        self.value(
            &mut region,
            digitable,
            TextAlign::Right,
            (w, y + 2.0 * sp),
            &record.digitable_line,
            w - BANK_CODE_RIGHT - 2.0 * sp,
        );

        Ok(region)
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

    fn compositor(metrics: &StandardFontMetrics) -> RegionCompositor<'_> {
        RegionCompositor::new(PageGeometry::FEBRABAN, NumberFormat::brazilian(), metrics)
    }

    #[test]
    fn test_frame_height_is_fixed() {
        let metrics = StandardFontMetrics::new();
        let region = compositor(&metrics).teller_receipt(&record()).unwrap();
        let expected = 14.5 * mm(6.5) + 10.0;
        assert!((region.size.height - expected).abs() < 1e-9);
        assert!((region.size.width - mm(190.0)).abs() < 1e-9);
        assert_eq!(region.appendix, 0.0);
    }

    #[test]
    fn test_barcode_is_calibrated_and_placed() {
        let metrics = StandardFontMetrics::new();
        let region = compositor(&metrics).teller_receipt(&record()).unwrap();
        let barcode = region.barcode.as_ref().unwrap();
        assert_eq!(barcode.origin, Point::new(4.0, 0.0));
        assert!((barcode.symbol.total_width() - mm(103.0)).abs() < 1e-6);
        assert!((barcode.symbol.height() - mm(13.0)).abs() < 1e-9);
    }

    #[test]
    fn test_document_value_and_due_date_are_right_aligned() {
        let metrics = StandardFontMetrics::new();
        let region = compositor(&metrics).teller_receipt(&record()).unwrap();

        let value = region.text("150,00").unwrap();
        assert_eq!(value.align, TextAlign::Right);
        assert!((value.origin.x - (mm(190.0) - 4.0)).abs() < 1e-9);
        assert!((value.origin.y - (9.5 * mm(6.5) + 2.0)).abs() < 1e-9);

        let due = region.text("10/03/2024").unwrap();
        assert_eq!(due.align, TextAlign::Right);
        assert!((due.origin.y - (12.5 * mm(6.5) + 10.0 + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_optional_amounts_are_blank() {
        let metrics = StandardFontMetrics::new();
        let mut data = record();
        data.unit_value = Some(0.0);
        let region = compositor(&metrics).teller_receipt(&data).unwrap();
        let unit = region
            .texts
            .iter()
            .find(|t| {
                t.role == TextRole::Value
                    && (t.origin.x - (mm(110.0) + 2.0)).abs() < 1e-9
                    && (t.origin.y - (9.5 * mm(6.5) + 2.0)).abs() < 1e-9
            })
            .unwrap();
        assert_eq!(unit.content, "");
        assert!(region.text("(-) Descontos/Abatimentos").is_some());
    }

    #[test]
    fn test_discount_is_printed_when_present() {
        let metrics = StandardFontMetrics::new();
        let mut data = record();
        data.discount = Some(1234.5);
        let region = compositor(&metrics).teller_receipt(&data).unwrap();
        let discount = region.text("1.234,50").unwrap();
        assert!((discount.origin.y - (8.5 * mm(6.5) + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_payer_lines_step_down_from_the_thick_rule() {
        let metrics = StandardFontMetrics::new();
        let region = compositor(&metrics).teller_receipt(&record()).unwrap();
        let top = 4.5 * mm(6.5);
        let first = region.text("Maria da Silva").unwrap();
        let third = region.text("01310-100 - São Paulo/SP").unwrap();
        assert!((first.origin.y - (top - 10.0)).abs() < 1e-9);
        assert!((third.origin.y - (top - 10.0 - 18.0)).abs() < 1e-9);
        assert!((first.origin.x - mm(15.0)).abs() < 1e-9);
    }

    #[test]
    fn test_logo_box_only_when_logo_named() {
        let metrics = StandardFontMetrics::new();
        let c = compositor(&metrics);
        assert!(c.teller_receipt(&record()).unwrap().images.is_empty());

        let mut data = record();
        data.logo = Some("logo_bb.jpg".into());
        let region = c.teller_receipt(&data).unwrap();
        assert_eq!(region.images.len(), 1);
        assert_eq!(region.images[0].source, ImageRef::Named("logo_bb.jpg".into()));
        assert!((region.images[0].frame.width - mm(40.0)).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_barcode_fails_without_region() {
        let metrics = StandardFontMetrics::new();
        let mut data = record();
        data.barcode.pop();
        let err = compositor(&metrics).teller_receipt(&data).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Barcode(EncodeError::InvalidLength { expected: 44, found: 43 })
        ));
    }

    #[test]
    fn test_long_payment_location_is_truncated() {
        let metrics = StandardFontMetrics::new();
        let mut data = record();
        data.payment_location = "Pagável preferencialmente ".repeat(20);
        let region = compositor(&metrics).teller_receipt(&data).unwrap();
        let location = region
            .texts
            .iter()
            .find(|t| t.content.starts_with("Pagável preferencialmente"))
            .unwrap();
        assert!(location.content.ends_with("..."));
    }
}
