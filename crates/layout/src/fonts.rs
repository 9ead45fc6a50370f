//! Glyph metrics for the standard PDF Type 1 faces used on a boleto.
//!
//! The widths are the Adobe AFM advance widths (units per 1000 em) for the
//! WinAnsi-encoded printable ASCII range. Accented Latin-1 letters share the
//! advance of their base letter in these faces, which covers Portuguese text.

use boleto_types::{FontFamily, FontWeight, TextStyle};

/// Measures rendered text width for a given style.
pub trait TextMeasure {
    fn text_width(&self, style: &TextStyle, text: &str) -> f64;
}

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

const COURIER_ADVANCE: u16 = 600;
const FALLBACK_ADVANCE: u16 = 556;

/// Maps accented Latin-1 letters to the letter whose advance they share.
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        '\u{a0}' => ' ',
        _ => return None,
    };
    Some(base)
}

/// AFM-backed metrics for Helvetica, Helvetica-Bold and Courier.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFontMetrics;

impl StandardFontMetrics {
    pub fn new() -> Self {
        Self
    }

    /// Advance width of `c` in thousandths of the font size.
    pub fn advance(&self, family: FontFamily, weight: FontWeight, c: char) -> u16 {
        if family == FontFamily::Courier {
            return COURIER_ADVANCE;
        }
        let table = match weight {
            FontWeight::Regular => &HELVETICA,
            FontWeight::Bold => &HELVETICA_BOLD,
        };
        let c = base_letter(c).unwrap_or(c);
        match c {
            ' '..='~' => table[c as usize - 0x20],
            'ª' => 370,
            'º' => 365,
            '°' => 400,
            '…' => 1000,
            _ => FALLBACK_ADVANCE,
        }
    }
}

impl TextMeasure for StandardFontMetrics {
    fn text_width(&self, style: &TextStyle, text: &str) -> f64 {
        let units: u32 = text
            .chars()
            .map(|c| u32::from(self.advance(style.family, style.weight, c)))
            .sum();
        f64::from(units) * style.size / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helvetica_widths() {
        let metrics = StandardFontMetrics::new();
        let style = TextStyle::helvetica(10.0);
        // H=722 e=556 l=222 l=222 o=556
        assert!((metrics.text_width(&style, "Hello") - 22.78).abs() < 1e-9);
        assert_eq!(metrics.text_width(&style, ""), 0.0);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let metrics = StandardFontMetrics::new();
        let text = "Recibo do Pagador";
        assert!(
            metrics.text_width(&TextStyle::helvetica_bold(6.0), text)
                > metrics.text_width(&TextStyle::helvetica(6.0), text)
        );
    }

    #[test]
    fn test_courier_is_monospaced() {
        let metrics = StandardFontMetrics::new();
        let style = TextStyle::courier(9.0);
        assert!((metrics.text_width(&style, "iiii") - metrics.text_width(&style, "WWWW")).abs() < 1e-12);
        assert!((metrics.text_width(&style, "abc") - 16.2).abs() < 1e-9);
    }

    #[test]
    fn test_accented_letters_share_base_advance() {
        let metrics = StandardFontMetrics::new();
        let style = TextStyle::helvetica(8.0);
        assert_eq!(
            metrics.text_width(&style, "Autenticação Mecânica"),
            metrics.text_width(&style, "Autenticacao Mecanica")
        );
    }
}
