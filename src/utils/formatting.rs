//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

/// Hours with at most two decimals and no trailing zeros: 3, 2.5, 0.33.
pub fn format_hours(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    let s = format!("{:.2}", rounded);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// "1 hour" / "3.5 hours".
pub fn hours_phrase(hours: f64) -> String {
    if hours > 1.0 {
        format!("{} hours", format_hours(hours))
    } else {
        format!("{} hour", format_hours(hours))
    }
}
