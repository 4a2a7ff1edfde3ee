#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use unicode_width::UnicodeWidthStr;

/// Truncate a string to a display width, appending an ellipsis when
/// anything was cut. Width accounting is unicode-aware.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let limit = max_width.saturating_sub(1);
    for c in text.chars() {
        let next = format!("{out}{c}");
        if next.width() > limit {
            break;
        }
        out = next;
    }
    out.push('…');
    out
}
