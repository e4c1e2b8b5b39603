//! Display-width helpers for terminal text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal cells `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Cuts `text` to at most `max_width` cells, ending with `suffix` when
/// anything was cut. Text that already fits is returned unchanged.
#[must_use]
pub fn truncate(text: &str, max_width: usize, suffix: &str) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let suffix_width = suffix.width();
    if suffix_width >= max_width {
        return take_width(suffix, max_width);
    }

    let mut out = take_width(text, max_width.saturating_sub(suffix_width));
    out.push_str(suffix);
    out
}

/// Repeats `pad` until it covers exactly `width` cells. A pad without
/// display width falls back to a space; a wide pad that overshoots is cut.
#[must_use]
pub fn repeat_to_width(pad: &str, width: usize) -> String {
    let pad = if pad.width() == 0 { " " } else { pad };
    let pad_width = pad.width();

    let mut out = String::new();
    let mut filled = 0usize;
    while filled < width {
        out.push_str(pad);
        filled = filled.saturating_add(pad_width);
    }

    if filled > width {
        take_width(&out, width)
    } else {
        out
    }
}

fn take_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used.saturating_add(w) > max_width {
            break;
        }
        out.push(c);
        used = used.saturating_add(w);
    }
    out
}
