//! Chunked re-joining.

use crate::error::SniffError;

/// Re-joins `input` with `separator` inserted every `size` characters.
///
/// The separator counts characters, not bytes, and is never appended
/// after the final piece.
///
/// # Errors
///
/// Returns [`SniffError::InvalidChunkSize`] if `size` is zero.
///
/// # Example
///
/// ```
/// use sniffrs::string::chunk;
///
/// let key = chunk("AAAABBBBCCCC", "-", 4).unwrap();
/// assert_eq!(key, "AAAA-BBBB-CCCC");
/// ```
pub fn chunk(input: &str, separator: &str, size: usize) -> Result<String, SniffError> {
    if size == 0 {
        return Err(SniffError::InvalidChunkSize);
    }

    let pieces = input.len() / size + 1;
    let mut out = String::with_capacity(input.len() + pieces * separator.len());

    let mut in_piece = 0;
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        in_piece += 1;
        if in_piece == size && chars.peek().is_some() {
            out.push_str(separator);
            in_piece = 0;
        }
    }

    Ok(out)
}
