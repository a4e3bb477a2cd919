//! Comparisons.

use std::hint::black_box;

/// Compares two strings in time independent of where they differ.
///
/// Every byte is visited whether or not a mismatch has been found, so
/// the comparison does not leak the position of the first difference.
/// Unequal lengths return early; the length itself is not protected.
///
/// # Example
///
/// ```
/// use sniffrs::string::constant_time_eq;
///
/// assert!(constant_time_eq("secret-token", "secret-token"));
/// assert!(!constant_time_eq("secret-token", "secret-tokem"));
/// ```
#[inline(never)]
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut acc = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        acc |= x ^ y;
    }

    black_box(acc) == 0
}

/// Returns true if `haystack` contains `needle`, ignoring ASCII case.
///
/// The empty needle is contained in everything.
///
/// # Example
///
/// ```
/// use sniffrs::string::contains_ignore_ascii_case;
///
/// assert!(contains_ignore_ascii_case("Content-Type: TEXT/HTML", "text/html"));
/// ```
pub fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }

    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
