use boleto_layout::DashPattern;
use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

/// Encodes `text` for a WinAnsiEncoding Type 1 font.
///
/// Latin-1 code points map to themselves; anything else that the encoding
/// lacks becomes `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '–' => 0x96,
            '—' => 0x97,
            '\u{a0}'..='\u{ff}' | ' '..='~' => c as u8,
            _ => b'?',
        })
        .collect()
}

pub(crate) fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

pub(crate) fn name(value: &str) -> Object {
    Object::Name(value.as_bytes().to_vec())
}

pub(crate) fn line_width(width: f64) -> Operation {
    Operation::new("w", vec![real(width)])
}

pub(crate) fn dash(pattern: Option<DashPattern>) -> Operation {
    let array = match pattern {
        Some(DashPattern { on, off }) => vec![real(on), real(off)],
        None => Vec::new(),
    };
    Operation::new("d", vec![Object::Array(array), Object::Integer(0)])
}

pub(crate) fn show_text(text: &str) -> Operation {
    Operation::new("Tj", vec![Object::String(to_win_ansi(text), StringFormat::Literal)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_text_encodes_to_latin1() {
        assert_eq!(to_win_ansi("Ação"), vec![b'A', 0xE7, 0xE3, b'o']);
        assert_eq!(to_win_ansi("Nº"), vec![b'N', 0xBA]);
    }

    #[test]
    fn test_unmappable_characters_become_question_marks() {
        assert_eq!(to_win_ansi("a\u{2192}b"), b"a?b".to_vec());
        assert_eq!(to_win_ansi("\u{7}"), b"?".to_vec());
    }
}
