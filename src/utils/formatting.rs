//! Formatting utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

use super::colors::strip_ansi;

/// Render a minute count as `HHh MMm`, or `HH:MM` in short form.
pub fn mins2readable(mins: i64, short: bool) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs = mins.abs();
    let hours = abs / 60;
    let minutes = abs % 60;

    if short {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}h {minutes:02}m")
    }
}

/// Display width of a cell, ignoring ANSI escapes and counting wide glyphs.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad with spaces up to `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}
