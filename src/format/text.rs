//! Display-width helpers.
//!
//! Widths are terminal cells as reported by `unicode-width`, never byte counts,
//! so multi-byte and double-width characters are measured and cut correctly.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to text that had to be shortened.
pub const ELLIPSIS: char = '…';

/// Number of terminal cells `s` occupies.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Shorten `s` so it fits in `width` cells, replacing the tail with [`ELLIPSIS`].
///
/// Text that already fits is returned unchanged. Characters are never split; a
/// double-width character that would straddle the limit is dropped entirely, so
/// the result can be one cell narrower than `width`.
pub fn ellipsize(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    // One cell is reserved for the ellipsis itself.
    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Fit `s` into exactly `width` cells: ellipsize when too long, pad with
/// spaces on the opposite side of `align` when too short.
pub fn align(s: &str, align: Align, width: usize) -> String {
    let fitted = ellipsize(s, width);
    let pad = " ".repeat(width.saturating_sub(display_width(&fitted)));
    match align {
        Align::Left => format!("{fitted}{pad}"),
        Align::Right => format!("{pad}{fitted}"),
    }
}

/// Format whole seconds as `m:ss`.
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
