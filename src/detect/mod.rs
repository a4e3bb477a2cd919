//! Heuristic text-encoding detection.

use std::fmt;

use crate::encoding::TextEncoding;
use crate::error::SniffError;
use crate::taste;

/// A successful detection: the encoding and the decoded text.
///
/// # Example
///
/// ```
/// use sniffrs::{Detection, TextEncoding, detect};
///
/// let detection: Detection = detect(b"\xEF\xBB\xBFhello", 0).unwrap();
/// assert_eq!(detection.encoding, TextEncoding::Utf8);
/// assert_eq!(detection.text, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The detected encoding.
    pub encoding: TextEncoding,

    /// The buffer decoded with that encoding, signature bytes excluded.
    pub text: String,
}

impl Detection {
    /// Creates a detection result.
    pub fn new(encoding: TextEncoding, text: impl Into<String>) -> Self {
        Self {
            encoding,
            text: text.into(),
        }
    }

    /// Returns the detected encoding.
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Returns the decoded text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the detection and returns the decoded text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Splits the detection into (encoding, text).
    pub fn into_parts(self) -> (TextEncoding, String) {
        (self.encoding, self.text)
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Detection({}, {} chars)",
            self.encoding,
            self.text.chars().count()
        )
    }
}

/// Detects the text encoding of `bytes` and decodes it.
///
/// Heuristics run in a fixed priority order:
///
/// 1. BOM / signature match (the signature bytes are stripped).
/// 2. UTF-8 structural scan over the taste window.
/// 3. UTF-16 zero-byte statistics, big-endian lane first.
/// 4. Embedded `charset=` / `encoding=` marker.
/// 5. A taste window of plain 7-bit ASCII decodes as UTF-8.
///
/// `taste_depth` bounds how many leading bytes the heuristics examine;
/// `0` (or anything past the end) means the whole buffer. If UTF-8 text
/// is expected, taste deep: the first byte above the ASCII range may
/// occur late. The decoded text always covers the whole buffer
/// regardless of the taste depth, and decoding is lossy, so ill-formed
/// input becomes U+FFFD rather than a second error case.
///
/// # Errors
///
/// Returns [`SniffError::EncodingUndetectable`] when no heuristic
/// matches.
///
/// # Example
///
/// ```
/// use sniffrs::{TextEncoding, detect};
///
/// // A UTF-16LE byte-order mark.
/// let detection = detect(b"\xFF\xFEh\x00i\x00", 0).unwrap();
/// assert_eq!(detection.encoding, TextEncoding::Utf16Le);
/// assert_eq!(detection.text, "hi");
///
/// assert!(detect(&[0x81, 0xFE, 0x92, 0xFD], 0).is_err());
/// ```
pub fn detect(bytes: &[u8], taste_depth: usize) -> Result<Detection, SniffError> {
    if let Some((encoding, sig_len)) = taste::bom::sniff(bytes) {
        let text = encoding.decode(&bytes[sig_len..]);
        return Ok(Detection::new(encoding, text));
    }

    // The taste depth cannot be deeper than the buffer; zero means all.
    let taste_depth = if taste_depth == 0 || taste_depth > bytes.len() {
        bytes.len()
    } else {
        taste_depth
    };

    if taste::utf8::confirms_utf8(bytes, taste_depth) {
        return Ok(decode_all(TextEncoding::Utf8, bytes));
    }

    if let Some(encoding) = taste::utf16::sniff(bytes, taste_depth) {
        return Ok(decode_all(encoding, bytes));
    }

    if let Some(encoding) = taste::marker::sniff(bytes, taste_depth) {
        return Ok(decode_all(encoding, bytes));
    }

    if bytes[..taste_depth].is_ascii() {
        return Ok(decode_all(TextEncoding::Utf8, bytes));
    }

    Err(SniffError::EncodingUndetectable)
}

fn decode_all(encoding: TextEncoding, bytes: &[u8]) -> Detection {
    Detection::new(encoding, encoding.decode(bytes))
}
