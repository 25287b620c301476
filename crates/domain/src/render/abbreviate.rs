//! Ellipsis truncation measured in chars, never splitting a code point.

use std::borrow::Cow;

const MARKER: &str = "...";
const MARKER_LEN: usize = MARKER.len();

/// Keeps the start of `text`: `abbreviate("abcdefg", 6) == "abc..."`.
///
/// Below four columns there is no room for the marker and the text is cut.
pub fn abbreviate(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width <= MARKER_LEN {
        return Cow::Owned(text.chars().take(max_width).collect());
    }
    let mut out: String = text.chars().take(max_width - MARKER_LEN).collect();
    out.push_str(MARKER);
    Cow::Owned(out)
}

/// Abbreviates around `offset`, keeping the tail of `text` visible.
///
/// The result starts with `...` when anything before `offset` was dropped and
/// also ends with `...` when the text from `offset` still does not fit.
/// With `offset == max_width`, paths shorter than about twice the width keep
/// their last `max_width - 3` chars.
pub fn abbreviate_full(text: &str, offset: usize, max_width: usize) -> Cow<'_, str> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    if len <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width <= MARKER_LEN {
        return abbreviate(text, max_width);
    }

    let room = max_width - MARKER_LEN;
    let mut offset = offset.min(len);
    if len - offset < room {
        offset = len - room;
    }
    if offset <= MARKER_LEN + 1 || max_width < 2 * MARKER_LEN + 1 {
        return abbreviate(text, max_width);
    }

    let mut out = String::from(MARKER);
    if offset + room < len {
        let rest: String = chars[offset..].iter().collect();
        out.push_str(&abbreviate(&rest, room));
    } else {
        out.extend(&chars[len - room..]);
    }
    Cow::Owned(out)
}
