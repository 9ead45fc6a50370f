use crate::fonts::TextMeasure;
use boleto_types::TextStyle;
use std::borrow::Cow;

/// Marker appended to shortened values.
pub const ELLIPSIS: &str = "...";

/// Characters dropped from the tail on each shortening step.
const STEP: usize = 4;

/// Shortens `text` until it renders within `budget` points.
///
/// Each step drops four characters from the tail (including a marker added
/// by the previous step) and appends `...`. Text already within budget is
/// returned untouched.
pub fn truncate_to_width<'a>(
    text: &'a str,
    budget: f64,
    style: &TextStyle,
    metrics: &dyn TextMeasure,
) -> Cow<'a, str> {
    if metrics.text_width(style, text) <= budget {
        return Cow::Borrowed(text);
    }

    let mut current: Vec<char> = text.chars().collect();
    if current.len() <= ELLIPSIS.len() {
        // The marker alone would not be shorter.
        return Cow::Owned(String::new());
    }
    loop {
        let keep = current.len().saturating_sub(STEP);
        let mut next: Vec<char> = current[..keep].to_vec();
        next.extend(ELLIPSIS.chars());
        if next == current {
            // Nothing left but the marker.
            break;
        }
        current = next;
        let candidate: String = current.iter().collect();
        if metrics.text_width(style, &candidate) <= budget {
            log::trace!("Truncated '{}' to '{}' (budget {:.2})", text, candidate, budget);
            return Cow::Owned(candidate);
        }
    }
    Cow::Owned(current.into_iter().collect())
}

/// Cuts `text` to `max_chars` characters, appending `...` when anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => Cow::Owned(format!("{}{}", &text[..byte_index], ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}
