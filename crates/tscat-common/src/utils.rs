//! Text helpers for presenting catalog strings on a terminal.

use unicode_segmentation::UnicodeSegmentation;

/// Collapses every run of whitespace (newlines included) into one space.
///
/// Source strings exported from `.ui` files often carry whole HTML
/// documents; this keeps them on one line in listings.
pub fn single_line(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates a string to at most `max_graphemes` user-perceived characters,
/// ending with `...` when something was cut.
pub fn truncate_string(input: &str, max_graphemes: usize) -> String {
    let graphemes: Vec<&str> = input.graphemes(true).collect();
    if graphemes.len() <= max_graphemes {
        input.to_string()
    } else {
        let keep = max_graphemes.saturating_sub(3);
        format!("{}...", graphemes[..keep].concat())
    }
}

/// Formats a ratio in `0.0..=1.0` as a percentage with one decimal.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio.clamp(0.0, 1.0) * 100.0)
}
