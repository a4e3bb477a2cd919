//! Content classification.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Returns true if `input` is a well-formed standard-alphabet base64
/// string with canonical padding.
///
/// The empty string qualifies. Validation decodes the input, so
/// misplaced padding and stray symbols are rejected, not just
/// characters outside the alphabet.
///
/// # Example
///
/// ```
/// use sniffrs::string::is_base64;
///
/// assert!(is_base64("aGVsbG8="));
/// assert!(!is_base64("aGVsbG8"));
/// assert!(!is_base64("not base64!"));
/// ```
pub fn is_base64(input: &str) -> bool {
    input.len() % 4 == 0 && STANDARD.decode(input).is_ok()
}

/// Returns true if `input` is non-empty and consists entirely of ASCII
/// digits (`0`-`9`).
///
/// # Example
///
/// ```
/// use sniffrs::string::is_ascii_digits;
///
/// assert!(is_ascii_digits("0123456789"));
/// assert!(!is_ascii_digits("12.5"));
/// assert!(!is_ascii_digits(""));
/// ```
pub fn is_ascii_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}
