use std::borrow::Cow;

use crate::constants::TRUNCATION_MARKER;

/// Truncate `text` to at most `max_chars` characters, appending `…` when
/// anything was cut. Operates on characters so multibyte input is never
/// split mid-code-point. Returns the input unchanged (borrowed) when it
/// already fits.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((byte_idx, _)) => {
            let mut cut = String::with_capacity(byte_idx + TRUNCATION_MARKER.len_utf8());
            cut.push_str(&text[..byte_idx]);
            cut.push(TRUNCATION_MARKER);
            Cow::Owned(cut)
        }
    }
}
