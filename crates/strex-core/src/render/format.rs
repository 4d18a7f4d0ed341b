//! Small text formatting helpers shared by the section renderers.

use time::OffsetDateTime;
use time::macros::format_description;

use crate::error::RenderResult;

/// Pad `s` with spaces to at least `min_width` display columns.
///
/// Width is measured without ANSI escapes. Longer strings are returned unchanged.
pub fn pad_right(s: &str, min_width: usize) -> String {
    let width = console::measure_text_width(s);
    if width < min_width {
        format!("{s}{}", " ".repeat(min_width - width))
    } else {
        s.to_string()
    }
}

/// Format an elapsed duration in seconds as `MM:SS`.
pub fn format_runtime(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Format a run timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_start_date(date: OffsetDateTime) -> RenderResult<String> {
    Ok(date.format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ))?)
}

/// Number of lowercase hex digits needed to print `value`.
pub fn hex_width(value: u64) -> usize {
    format!("{value:x}").len()
}

/// `0x`-prefixed, zero-padded lowercase hex offset.
pub fn hex_offset(value: u64, width: usize) -> String {
    format!("0x{value:0width$x}")
}

/// `0x`-prefixed uppercase hex, used for emulation addresses.
pub fn hex_upper(value: u64) -> String {
    format!("0x{value:X}")
}

/// Greedy word wrap on whitespace; lines are joined with `\n`.
///
/// Words longer than `width` are placed on a line of their own.
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
