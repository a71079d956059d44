//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` display columns (unicode-aware, unlike format!'s
/// byte-counted padding).
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(s);
    let mut out = s.to_string();
    for _ in visible..width {
        out.push(' ');
    }
    out
}
