//! Text width and truncation utilities.
//!
//! Provides unicode-aware text width calculation and safe truncation.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get the visual width of a string in terminal cells.
///
/// Accounts for wide characters (CJK, emoji) that take 2 cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within a maximum visual width.
///
/// Appends "..." when truncation occurred and there is room for it. The
/// result never exceeds `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }

    let (target_width, suffix) = if max_width > 3 {
        (max_width - 3, "...")
    } else {
        (max_width, "")
    };

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(suffix);
    result
}
