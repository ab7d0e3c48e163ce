//! Small shared helpers for timestamps and display-width handling.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Format a Unix timestamp for log lines.
///
/// Inputs:
/// - `secs`: Seconds since the Unix epoch (UTC)
///
/// Output:
/// - `YYYY-MM-DD-T HH:MM:SS`, or the raw number when out of range.
#[must_use]
pub fn log_timestamp(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0).map_or_else(
        || secs.to_string(),
        |dt| dt.format("%Y-%m-%d-T %H:%M:%S").to_string(),
    )
}

/// What: Truncate `s` to at most `max` display columns.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max`: Available columns
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix ending in `…` that fits.
///
/// Details:
/// - Uses Unicode display width, so wide characters count as two columns.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Timestamp formatting
    ///
    /// - Input: Epoch and a known instant
    /// - Output: Fixed `YYYY-MM-DD-T HH:MM:SS` strings
    fn log_timestamp_formats() {
        assert_eq!(log_timestamp(0), "1970-01-01-T 00:00:00");
        assert_eq!(log_timestamp(1_700_000_000), "2023-11-14-T 22:13:20");
    }

    #[test]
    /// What: Width-aware truncation
    ///
    /// - Input: Short and long ASCII strings, wide characters
    /// - Output: Fitting strings unchanged; long ones end with an ellipsis within budget
    fn truncate_to_width_respects_columns() {
        assert_eq!(truncate_to_width("CS101", 10), "CS101");
        assert_eq!(truncate_to_width("Calculus I", 6), "Calcu…");
        let wide = truncate_to_width("日本語の講義", 5);
        assert!(wide.width() <= 5);
        assert!(wide.ends_with('…'));
    }
}
