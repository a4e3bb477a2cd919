//! Affix trimming.

/// Removes `prefix` from the start of `input`, if it matches.
///
/// Only a single occurrence is removed; no match returns the input
/// unchanged.
///
/// # Example
///
/// ```
/// use sniffrs::string::trim_prefix;
///
/// assert_eq!(trim_prefix("www.example.com", "www."), "example.com");
/// assert_eq!(trim_prefix("example.com", "www."), "example.com");
/// ```
pub fn trim_prefix<'a>(input: &'a str, prefix: &str) -> &'a str {
    input.strip_prefix(prefix).unwrap_or(input)
}

/// Removes `suffix` from the end of `input`, if it matches.
///
/// Only a single occurrence is removed; no match returns the input
/// unchanged.
///
/// # Example
///
/// ```
/// use sniffrs::string::trim_suffix;
///
/// assert_eq!(trim_suffix("report.csv", ".csv"), "report");
/// ```
pub fn trim_suffix<'a>(input: &'a str, suffix: &str) -> &'a str {
    input.strip_suffix(suffix).unwrap_or(input)
}

/// Removes `affix` from both ends of `input`, one occurrence each.
///
/// The start is trimmed first, then the end of what remains.
pub fn trim_ends<'a>(input: &'a str, affix: &str) -> &'a str {
    trim_suffix(trim_prefix(input, affix), affix)
}

/// [`trim_prefix`], matching ASCII-case-insensitively.
pub fn trim_prefix_ignore_ascii_case<'a>(input: &'a str, prefix: &str) -> &'a str {
    if starts_with_ignore_ascii_case(input, prefix) {
        // ASCII case flips never move UTF-8 boundaries, so the slice
        // stays on a char boundary.
        &input[prefix.len()..]
    } else {
        input
    }
}

/// [`trim_suffix`], matching ASCII-case-insensitively.
pub fn trim_suffix_ignore_ascii_case<'a>(input: &'a str, suffix: &str) -> &'a str {
    if ends_with_ignore_ascii_case(input, suffix) {
        &input[..input.len() - suffix.len()]
    } else {
        input
    }
}

/// [`trim_ends`], matching ASCII-case-insensitively.
pub fn trim_ends_ignore_ascii_case<'a>(input: &'a str, affix: &str) -> &'a str {
    trim_suffix_ignore_ascii_case(trim_prefix_ignore_ascii_case(input, affix), affix)
}

fn starts_with_ignore_ascii_case(input: &str, prefix: &str) -> bool {
    input
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

fn ends_with_ignore_ascii_case(input: &str, suffix: &str) -> bool {
    input.len() >= suffix.len()
        && input.as_bytes()[input.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_prefix() {
        assert_eq!(trim_prefix("www.example.com", "www."), "example.com");
        assert_eq!(trim_prefix("example.com", "www."), "example.com");
        assert_eq!(trim_prefix("www.www.x", "www."), "www.x");
    }

    #[test]
    fn test_trim_prefix_empty() {
        assert_eq!(trim_prefix("abc", ""), "abc");
        assert_eq!(trim_prefix("", "abc"), "");
    }

    #[test]
    fn test_trim_suffix() {
        assert_eq!(trim_suffix("report.csv", ".csv"), "report");
        assert_eq!(trim_suffix("report.txt", ".csv"), "report.txt");
    }

    #[test]
    fn test_trim_ends() {
        assert_eq!(trim_ends("--flag--", "--"), "flag");
        assert_eq!(trim_ends("---", "--"), "-");
        assert_eq!(trim_ends("aba", "aba"), "");
    }

    #[test]
    fn test_trim_prefix_ignore_ascii_case() {
        assert_eq!(
            trim_prefix_ignore_ascii_case("WWW.example.com", "www."),
            "example.com"
        );
        assert_eq!(trim_prefix_ignore_ascii_case("example", "www."), "example");
    }

    #[test]
    fn test_trim_suffix_ignore_ascii_case() {
        assert_eq!(trim_suffix_ignore_ascii_case("report.CSV", ".csv"), "report");
        assert_eq!(
            trim_suffix_ignore_ascii_case("report.txt", ".csv"),
            "report.txt"
        );
    }

    #[test]
    fn test_trim_ends_ignore_ascii_case() {
        assert_eq!(trim_ends_ignore_ascii_case("XXfooxx", "xx"), "foo");
    }

    #[test]
    fn test_case_insensitive_with_multibyte() {
        // Non-ASCII bytes must match exactly.
        assert_eq!(trim_prefix_ignore_ascii_case("Ärger", "ä"), "Ärger");
        assert_eq!(trim_prefix_ignore_ascii_case("ärger", "ä"), "rger");
    }

    #[test]
    fn test_case_sensitive_by_default() {
        assert_eq!(trim_prefix("WWW.example.com", "www."), "WWW.example.com");
    }
}
