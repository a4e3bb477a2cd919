//! Encoding identifiers and decoding.
//!
//! - [`TextEncoding`] - The encodings the detector can report
//!
//! Decoding for UTF-8, UTF-16, and label-resolved encodings goes through
//! `encoding_rs`. UTF-32 and UTF-7 are decoded by small internal decoders
//! because the WHATWG encoding standard (and therefore `encoding_rs`)
//! dropped both.

mod utf32;
mod utf7;

use std::fmt;

use utf32::Endian;

/// A detected text encoding.
///
/// The dedicated variants cover the encodings the detector's own
/// heuristics can produce. Encodings found via an embedded
/// `charset=`/`encoding=` marker resolve to [`TextEncoding::Labeled`]
/// unless the label names one of the dedicated variants.
///
/// # Example
///
/// ```
/// use sniffrs::TextEncoding;
///
/// let enc = TextEncoding::for_label(b"latin1").unwrap();
/// assert_eq!(enc.decode(b"caf\xe9"), "caf\u{e9}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-32, big-endian.
    Utf32Be,
    /// UTF-32, little-endian.
    Utf32Le,
    /// UTF-16, big-endian.
    Utf16Be,
    /// UTF-16, little-endian.
    Utf16Le,
    /// UTF-8.
    Utf8,
    /// UTF-7.
    Utf7,
    /// An encoding resolved from a label, e.g. `windows-1252`.
    Labeled(&'static encoding_rs::Encoding),
}

/// Labels that resolve to UTF-7, which `encoding_rs` no longer carries.
const UTF7_LABELS: &[&str] = &[
    "utf-7",
    "utf7",
    "unicode-1-1-utf-7",
    "csunicode11utf7",
    "x-unicode-2-0-utf-7",
];

/// Labels that resolve to UTF-32, also absent from the WHATWG registry.
const UTF32_LE_LABELS: &[&str] = &["utf-32", "utf32", "utf-32le"];
const UTF32_BE_LABELS: &[&str] = &["utf-32be", "utf32be"];

impl TextEncoding {
    /// Resolves an encoding label, e.g. from a `charset=` marker.
    ///
    /// Labels are matched case-insensitively with surrounding ASCII
    /// whitespace ignored. UTF-7 and UTF-32 labels are handled here;
    /// everything else defers to [`encoding_rs::Encoding::for_label`],
    /// so the usual aliases (`latin1`, `l1`, `ascii`, ...) all work.
    ///
    /// Returns `None` for labels the registry does not know.
    ///
    /// # Example
    ///
    /// ```
    /// use sniffrs::TextEncoding;
    ///
    /// assert_eq!(TextEncoding::for_label(b"UTF-8"), Some(TextEncoding::Utf8));
    /// assert_eq!(TextEncoding::for_label(b"utf-7"), Some(TextEncoding::Utf7));
    /// assert_eq!(TextEncoding::for_label(b"no-such-charset"), None);
    /// ```
    pub fn for_label(label: &[u8]) -> Option<TextEncoding> {
        let trimmed = label.trim_ascii();

        if matches_any(trimmed, UTF7_LABELS) {
            return Some(TextEncoding::Utf7);
        }
        if matches_any(trimmed, UTF32_LE_LABELS) {
            return Some(TextEncoding::Utf32Le);
        }
        if matches_any(trimmed, UTF32_BE_LABELS) {
            return Some(TextEncoding::Utf32Be);
        }

        let enc = encoding_rs::Encoding::for_label(trimmed)?;
        Some(if enc == encoding_rs::UTF_8 {
            TextEncoding::Utf8
        } else if enc == encoding_rs::UTF_16LE {
            TextEncoding::Utf16Le
        } else if enc == encoding_rs::UTF_16BE {
            TextEncoding::Utf16Be
        } else {
            TextEncoding::Labeled(enc)
        })
    }

    /// Returns the canonical name of this encoding.
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf32Be => "UTF-32BE",
            TextEncoding::Utf32Le => "UTF-32LE",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf7 => "UTF-7",
            TextEncoding::Labeled(enc) => enc.name(),
        }
    }

    /// Decodes `bytes` with this encoding, lossily.
    ///
    /// Malformed input never fails; every ill-formed unit becomes
    /// U+FFFD. No BOM handling happens here; callers strip any
    /// signature bytes before decoding.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf32Be => utf32::decode(bytes, Endian::Big),
            TextEncoding::Utf32Le => utf32::decode(bytes, Endian::Little),
            TextEncoding::Utf16Be => decode_with(encoding_rs::UTF_16BE, bytes),
            TextEncoding::Utf16Le => decode_with(encoding_rs::UTF_16LE, bytes),
            TextEncoding::Utf8 => decode_with(encoding_rs::UTF_8, bytes),
            TextEncoding::Utf7 => utf7::decode(bytes),
            TextEncoding::Labeled(enc) => decode_with(enc, bytes),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn decode_with(enc: &'static encoding_rs::Encoding, bytes: &[u8]) -> String {
    let (text, _had_errors) = enc.decode_without_bom_handling(bytes);
    text.into_owned()
}

fn matches_any(label: &[u8], candidates: &[&str]) -> bool {
    candidates.iter().any(|c| label.eq_ignore_ascii_case(c.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_label_utf8() {
        assert_eq!(TextEncoding::for_label(b"utf-8"), Some(TextEncoding::Utf8));
        assert_eq!(TextEncoding::for_label(b"UTF8"), Some(TextEncoding::Utf8));
        assert_eq!(
            TextEncoding::for_label(b"  utf-8  "),
            Some(TextEncoding::Utf8)
        );
    }

    #[test]
    fn test_for_label_utf16_variants() {
        assert_eq!(
            TextEncoding::for_label(b"utf-16be"),
            Some(TextEncoding::Utf16Be)
        );
        assert_eq!(
            TextEncoding::for_label(b"utf-16le"),
            Some(TextEncoding::Utf16Le)
        );
        // Bare "utf-16" is little-endian in the registry.
        assert_eq!(
            TextEncoding::for_label(b"utf-16"),
            Some(TextEncoding::Utf16Le)
        );
    }

    #[test]
    fn test_for_label_utf7_aliases() {
        for label in ["utf-7", "UTF-7", "utf7", "unicode-1-1-utf-7", " utf-7\t"] {
            assert_eq!(
                TextEncoding::for_label(label.as_bytes()),
                Some(TextEncoding::Utf7),
                "label {:?}",
                label
            );
        }
    }

    #[test]
    fn test_for_label_utf32() {
        assert_eq!(
            TextEncoding::for_label(b"utf-32"),
            Some(TextEncoding::Utf32Le)
        );
        assert_eq!(
            TextEncoding::for_label(b"UTF-32BE"),
            Some(TextEncoding::Utf32Be)
        );
    }

    #[test]
    fn test_for_label_legacy() {
        let enc = TextEncoding::for_label(b"iso-8859-1").unwrap();
        match enc {
            TextEncoding::Labeled(e) => assert_eq!(e, encoding_rs::WINDOWS_1252),
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn test_for_label_unknown() {
        assert_eq!(TextEncoding::for_label(b"klingon"), None);
        assert_eq!(TextEncoding::for_label(b""), None);
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(TextEncoding::Utf8.decode(b"hello"), "hello");
        assert_eq!(TextEncoding::Utf8.decode(b"\xc2\xa9"), "\u{a9}");
    }

    #[test]
    fn test_decode_utf8_lossy() {
        assert_eq!(TextEncoding::Utf8.decode(b"\xff"), "\u{fffd}");
    }

    #[test]
    fn test_decode_utf16be() {
        let bytes = [0x00, 0x68, 0x00, 0x69];
        assert_eq!(TextEncoding::Utf16Be.decode(&bytes), "hi");
    }

    #[test]
    fn test_decode_utf16le() {
        let bytes = [0x68, 0x00, 0x69, 0x00];
        assert_eq!(TextEncoding::Utf16Le.decode(&bytes), "hi");
    }

    #[test]
    fn test_decode_labeled() {
        let enc = TextEncoding::for_label(b"windows-1252").unwrap();
        assert_eq!(enc.decode(b"caf\xe9"), "caf\u{e9}");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TextEncoding::Utf32Be.to_string(), "UTF-32BE");
        assert_eq!(TextEncoding::Utf8.to_string(), "UTF-8");
        assert_eq!(
            TextEncoding::Labeled(encoding_rs::WINDOWS_1252).to_string(),
            "windows-1252"
        );
    }
}
