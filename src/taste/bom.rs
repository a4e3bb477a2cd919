//! Byte-order-mark and signature matching.

use crate::encoding::TextEncoding;

/// Known signatures, 4-byte marks first so `FF FE 00 00` is read as
/// UTF-32LE rather than a UTF-16LE mark with trailing NULs.
const SIGNATURES: &[(&[u8], TextEncoding)] = &[
    (&[0x00, 0x00, 0xFE, 0xFF], TextEncoding::Utf32Be),
    (&[0xFF, 0xFE, 0x00, 0x00], TextEncoding::Utf32Le),
    (&[0xFE, 0xFF], TextEncoding::Utf16Be),
    (&[0xFF, 0xFE], TextEncoding::Utf16Le),
    (&[0xEF, 0xBB, 0xBF], TextEncoding::Utf8),
    (&[0x2B, 0x2F, 0x76], TextEncoding::Utf7),
];

/// Matches a signature at the start of `bytes`.
///
/// Returns the encoding and the number of signature bytes to strip
/// before decoding.
pub(crate) fn sniff(bytes: &[u8]) -> Option<(TextEncoding, usize)> {
    SIGNATURES
        .iter()
        .find(|(sig, _)| bytes.starts_with(sig))
        .map(|(sig, enc)| (*enc, sig.len()))
}
