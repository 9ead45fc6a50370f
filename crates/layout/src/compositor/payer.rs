//! Recibo do pagador: the half of a full slip the payer keeps.

use super::RegionCompositor;
use crate::assets::PIX_QR_CODE;
use crate::format::format_date;
use crate::region::{ImagePlacement, ImageRef, Line, Region, RegionKind, TextRole};
use crate::text::truncate_chars;
use boleto_types::{BoletoRecord, Rect, Size, TextAlign, TextStyle, cm, mm};

/// First grid row above the memo area.
const FIRST_ROW: f64 = 15.0;
const MAX_MEMO_LINES: usize = 25;
const MAX_PAYEE_CHARS: usize = 44;
const PAYER_NAME_BUDGET: f64 = cm(8.4);
const MEMO_DROP: f64 = cm(3.0);

const COL_DUE: f64 = mm(30.0);
const COL_TAX_ID: f64 = mm(65.0);
const COL_AGENCY: f64 = mm(105.0);
const LOGO_WIDTH: f64 = mm(40.0);
const BANK_CODE_RIGHT: f64 = mm(60.0);
const BANK_CODE_CENTER: f64 = mm(50.0);
const QR_CODE_SIZE: f64 = mm(36.0);

const PIX_INSTRUCTIONS: [&str; 2] = [
    "Para realizar o pagamento a qualquer instante, leia o QR Code",
    "no celular e pague por Pix.",
];

impl RegionCompositor<'_> {
    /// Height of the payer receipt frame, excluding any appendix.
    pub fn payer_height(&self) -> f64 {
        self.geometry.rows(FIRST_ROW + 3.0)
    }

    /// Height added below the memo when the record carries a logo.
    pub fn payer_appendix_height(&self) -> f64 {
        PIX_INSTRUCTIONS.len() as f64 * self.geometry.memo_pitch + QR_CODE_SIZE
    }

    pub(super) fn payer_receipt(&self, record: &BoletoRecord) -> Region {
        let g = self.geometry;
        let (w, h, sp, dt) = (g.slip_width, g.row_height, g.padding, g.title_offset());
        let value = self.value_style();
        let col_due = w - COL_DUE;
        let col_tax_id = w - COL_TAX_ID;
        let col_agency = w - COL_AGENCY;
        let rows = [g.rows(FIRST_ROW), g.rows(FIRST_ROW + 1.0), g.rows(FIRST_ROW + 2.0)];
        let top = g.rows(FIRST_ROW + 3.0);

        let mut region = Region::new(RegionKind::PayerReceipt, Size::new(w, self.payer_height()));

        for y in rows {
            region.lines.push(Line::horizontal(0.0, y, w, 1.0));
        }
        region.lines.push(Line::horizontal(0.0, top, w, 2.0));
        region.lines.push(Line::vertical(col_due, rows[0], 3.0 * h, 1.0));
        region.lines.push(Line::vertical(col_tax_id, rows[1], 2.0 * h, 1.0));
        region.lines.push(Line::vertical(col_agency, rows[1], 2.0 * h, 1.0));
        region.lines.push(Line::vertical(LOGO_WIDTH, top, h, 2.0));
        region.lines.push(Line::vertical(BANK_CODE_RIGHT, top, h, 2.0));

        if let Some(logo) = &record.logo {
            region.images.push(ImagePlacement {
                source: ImageRef::Named(logo.clone()),
                frame: Rect::new(0.0, top + 3.0, LOGO_WIDTH, h),
                preserve_aspect: true,
            });
        }
        self.heading(
            &mut region,
            TextStyle::helvetica_bold(18.0),
            TextAlign::Center,
            BANK_CODE_CENTER,
            top + 3.0,
            &record.bank_code,
        );
        self.heading(
            &mut region,
            TextStyle::helvetica_bold(11.5),
            TextAlign::Right,
            w,
            top + 3.0,
            "Recibo do Pagador",
        );

        region.push_text(
            TextRole::Label,
            self.title_style(),
            TextAlign::Right,
            w,
            h,
            "Autenticação Mecânica",
        );

        let labels = [
            (rows[2], 0.0, "Beneficiário"),
            (rows[2], col_agency + sp, "Agência/Código Beneficiário"),
            (rows[2], col_tax_id + sp, "CPF/CNPJ Beneficiário"),
            (rows[2], col_due + sp, "Vencimento"),
            (rows[1], 0.0, "Pagador"),
            (rows[1], col_agency + sp, "Nosso Número"),
            (rows[1], col_tax_id + sp, "N. do documento"),
            (rows[1], col_due + sp, "Data Documento"),
            (rows[0], 0.0, "Endereço Beneficiário"),
            (rows[0], col_due + sp, "Valor Documento"),
        ];
        for (y, x, text) in labels {
            self.label(&mut region, x, y + dt, text);
        }
        let memo_top = rows[0] - MEMO_DROP;
        self.label(&mut region, 0.0, memo_top + dt, "Demonstrativo");

        let payee = truncate_chars(&record.payee_name, MAX_PAYEE_CHARS);
        let payer = self.fit(record.payer_name(), PAYER_NAME_BUDGET, &value);
        let due = format_date(record.due_date);
        let document_date = format_date(record.document_date);
        let document_value = self.format.amount(record.document_value);
        let cells = [
            (rows[2], 0.0, col_agency, &*payee),
            (rows[2], col_agency, col_tax_id, record.agency_account.as_str()),
            (rows[2], col_tax_id, col_due, record.payee_tax_id.as_str()),
            (rows[2], col_due, w, due.as_str()),
            (rows[1], col_agency, col_tax_id, record.our_number.as_str()),
            (rows[1], col_tax_id, col_due, record.document_number.as_str()),
            (rows[1], col_due, w, document_date.as_str()),
            (rows[0], 0.0, col_due, record.payee_address.as_str()),
            (rows[0], col_due, w, document_value.as_str()),
        ];
        for (y, left, right, text) in cells {
            self.value(&mut region, value, TextAlign::Left, (left + sp, y + sp), text, right - left - 2.0 * sp);
        }
        // Already fitted to its own budget.
        region.push_text(TextRole::Value, value, TextAlign::Left, sp, rows[1] + sp, payer);

        let memo_style = TextStyle::courier(9.0);
        let memo_budget = w - 3.0 * sp;
        let memo = &record.memo[..record.memo.len().min(MAX_MEMO_LINES)];
        for (i, line) in memo.iter().enumerate() {
            let baseline = memo_top - i as f64 * g.memo_pitch;
            self.value(&mut region, memo_style, TextAlign::Left, (2.0 * sp, baseline), line, memo_budget);
        }

        if record.logo.is_some() {
            // Pix appendix continues the memo flow and then the QR code below it.
            let appendix_top = memo_top - memo.len() as f64 * g.memo_pitch;
            for (k, line) in PIX_INSTRUCTIONS.iter().enumerate() {
                let baseline = appendix_top - k as f64 * g.memo_pitch;
                self.value(&mut region, memo_style, TextAlign::Left, (2.0 * sp, baseline), line, memo_budget);
            }
            let qr_top = appendix_top - (PIX_INSTRUCTIONS.len() - 1) as f64 * g.memo_pitch;
            region.images.push(ImagePlacement {
                source: ImageRef::Embedded(PIX_QR_CODE),
                frame: Rect::new(0.0, qr_top - QR_CODE_SIZE, QR_CODE_SIZE, QR_CODE_SIZE),
                preserve_aspect: true,
            });
            region.appendix = self.payer_appendix_height();
        }

        region
    }
}
