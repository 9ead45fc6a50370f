//! Canhoto: the narrow payer stub printed beside each carnê slip.

use super::RegionCompositor;
use crate::format::format_date;
use crate::region::{Line, Region, RegionKind};
use boleto_types::{BoletoRecord, Size, TextAlign, TextStyle, mm};

const FIRST_ROW: f64 = 12.0;
const MAX_MEMO_LINES: usize = 12;
/// Width of the right-hand cells, measured from the stub's right edge.
const RIGHT_CELL: f64 = mm(35.0);

impl RegionCompositor<'_> {
    pub fn stub_height(&self) -> f64 {
        self.geometry.rows(FIRST_ROW + 2.0)
    }

    pub(super) fn payer_receipt_stub(&self, record: &BoletoRecord) -> Region {
        let g = self.geometry;
        let (w, h, sp, dt) = (g.stub_width, g.row_height, g.padding, g.title_offset());
        let split = w - RIGHT_CELL;
        let lower = g.rows(FIRST_ROW);
        let upper = g.rows(FIRST_ROW + 1.0);
        let value = TextStyle::helvetica(9.0);

        let mut region = Region::new(RegionKind::PayerReceiptStub, Size::new(w, self.stub_height()));

        region.lines.push(Line::horizontal(0.0, 0.0, w, 2.0));
        region.lines.push(Line::horizontal(0.0, lower, w, 1.0));
        region.lines.push(Line::horizontal(0.0, upper, w, 1.0));
        region.lines.push(Line::horizontal(0.0, self.stub_height(), w, 2.0));
        region.lines.push(Line::vertical(split, lower, h, 1.0));
        region.lines.push(Line::vertical(split, upper, h, 1.0));

        self.heading(
            &mut region,
            TextStyle::helvetica_bold(6.0),
            TextAlign::Right,
            w,
            3.0,
            "Recibo do Pagador",
        );

        self.label(&mut region, sp, lower + dt, "Nosso Número");
        self.label(&mut region, split + sp, lower + dt, "Vencimento");
        self.label(&mut region, sp, upper + dt, "Agência/Código Beneficiário");
        self.label(&mut region, split + sp, upper + dt, "Valor Documento");

        let left_budget = split - 2.0 * sp;
        let right_budget = RIGHT_CELL - 2.0 * sp;
        let due = format_date(record.due_date);
        let amount = self.format.amount(record.document_value);
        self.value(&mut region, value, TextAlign::Left, (sp, lower + sp), &record.our_number, left_budget);
        self.value(&mut region, value, TextAlign::Left, (split + sp, lower + sp), &due, right_budget);
        self.value(&mut region, value, TextAlign::Left, (sp, upper + sp), &record.agency_account, left_budget);
        self.value(&mut region, value, TextAlign::Left, (split + sp, upper + sp), &amount, right_budget);

        let memo_top = g.rows(FIRST_ROW - 1.0);
        for (i, line) in record.memo.iter().take(MAX_MEMO_LINES).enumerate() {
            let baseline = memo_top - i as f64 * g.memo_pitch;
            self.value(&mut region, value, TextAlign::Left, (2.0 * sp, baseline), line, w - 3.0 * sp);
        }

        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::test_support::record;
    use crate::fonts::StandardFontMetrics;
    use crate::format::NumberFormat;
    use crate::geometry::PageGeometry;
    use crate::region::TextRole;

    fn compositor(metrics: &StandardFontMetrics) -> RegionCompositor<'_> {
        RegionCompositor::new(PageGeometry::FEBRABAN, NumberFormat::brazilian(), metrics)
    }

    #[test]
    fn test_stub_frame() {
        let metrics = StandardFontMetrics::new();
        let region = compositor(&metrics).payer_receipt_stub(&record());
        assert_eq!(region.kind, RegionKind::PayerReceiptStub);
        assert!((region.size.width - mm(70.0)).abs() < 1e-9);
        assert!((region.size.height - 14.0 * mm(6.5)).abs() < 1e-9);
        assert!(region.barcode.is_none());
        assert!(region.images.is_empty());
    }

    #[test]
    fn test_values_split_at_35mm_from_the_right() {
        let metrics = StandardFontMetrics::new();
        let region = compositor(&metrics).payer_receipt_stub(&record());
        let due = region.text("10/03/2024").unwrap();
        assert!((due.origin.x - (mm(35.0) + 2.0)).abs() < 1e-9);
        assert_eq!(due.style, TextStyle::helvetica(9.0));
        let value = region.text("150,00").unwrap();
        assert!((value.origin.y - (13.0 * mm(6.5) + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_memo_capped_and_fitted() {
        let metrics = StandardFontMetrics::new();
        let mut data = record();
        data.memo = (0..20)
            .map(|i| format!("Parcela {i} referente ao contrato de prestação de serviços educacionais"))
            .collect();
        let region = compositor(&metrics).payer_receipt_stub(&data);
        let memo: Vec<_> = region
            .texts
            .iter()
            .filter(|t| t.role == TextRole::Value && t.content.starts_with("Parcela"))
            .collect();
        assert_eq!(memo.len(), 12);
        assert!(memo.iter().all(|t| t.content.ends_with("...")));
        assert!((memo[0].origin.y - 11.0 * mm(6.5)).abs() < 1e-9);
    }
}
