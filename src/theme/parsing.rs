/// Strip a trailing inline comment (`//` or `#`) from a config value.
///
/// A leading `#` is kept so values like `#abc` survive; the next `#` starts the comment.
/// `//` only counts at the start or after whitespace, so URLs stay intact.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if s.starts_with("//") {
        return "";
    }
    if let Some(i) = s.find(" //").or_else(|| s.find("\t//")) {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` for empty lines and lines starting with `#`, `//`, or `;`
pub(crate) fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// Interpret `true`/`1`/`yes`/`on` (any case) as `true`, anything else as `false`.
pub(crate) fn parse_bool(val: &str) -> bool {
    let lv = val.trim().to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Inline comment stripping and boolean parsing
    ///
    /// - Input: Values with `#` and `//` comments; boolean spellings
    /// - Output: Trimmed values; truthy spellings map to `true`
    fn parsing_helpers() {
        assert_eq!(strip_inline_comment("rit.json # main"), "rit.json");
        assert_eq!(strip_inline_comment("100,200 // short"), "100,200");
        assert_eq!(
            strip_inline_comment("https://example.org/c.json // remote"),
            "https://example.org/c.json"
        );
        assert!(skip_comment_or_empty("  ; note"));
        assert!(!skip_comment_or_empty("a = b"));
        assert!(parse_bool("Yes"));
        assert!(parse_bool("on"));
        assert!(!parse_bool("off"));
    }
}
