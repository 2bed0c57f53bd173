//! Formatting helpers shared by the terminal views

use crate::analysis::UsageLevel;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Wrap text in the ANSI color for a usage tier
pub fn colored_for_usage(text: &str, usage: UsageLevel) -> String {
    let color = match usage {
        UsageLevel::Normal => GREEN,
        UsageLevel::Warning => YELLOW,
        UsageLevel::Critical | UsageLevel::Exceeded => RED,
    };
    format!("{}{}{}", color, text, RESET)
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
///
/// The bar is clamped to `width` when `value` exceeds `max_value`.
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 || value.is_nan() {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.chars().count()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
    }

    #[test]
    fn test_format_bar_is_capped() {
        let bar = format_bar(150.0, 100.0, 10);
        assert_eq!(bar, "█".repeat(10));
    }

    #[test]
    fn test_format_bar_empty() {
        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
        assert_eq!(format_bar(10.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("₹₹₹₹₹₹", 5), "₹₹...");
    }

    #[test]
    fn test_usage_colors() {
        assert!(colored_for_usage("x", UsageLevel::Normal).starts_with(GREEN));
        assert!(colored_for_usage("x", UsageLevel::Warning).starts_with(YELLOW));
        assert!(colored_for_usage("x", UsageLevel::Exceeded).starts_with(RED));
    }
}
