//! Embedded charset-marker scan.

use crate::encoding::TextEncoding;

/// Markers that may spell out the encoding inside the text itself, as
/// in `<meta charset="utf-8">` or `<?xml encoding='utf-8'?>`.
const MARKERS: &[&[u8]] = &[b"charset=", b"encoding="];

/// Looks for a `charset=`/`encoding=` marker in `bytes[..taste_depth - 9]`.
///
/// Markers match ASCII-case-insensitively. One optional quote after the
/// `=` is skipped, then the label runs over `[A-Za-z0-9_-]` bounded by
/// the taste depth. The first marker found decides the outcome: when
/// its label does not resolve, the scan stops without trying later
/// markers.
pub(crate) fn sniff(bytes: &[u8], taste_depth: usize) -> Option<TextEncoding> {
    let limit = taste_depth.saturating_sub(9);

    for n in 0..limit {
        let Some(marker) = MARKERS.iter().find(|m| matches_at(bytes, n, m)) else {
            continue;
        };

        let mut pos = n + marker.len();
        if bytes[pos] == b'"' || bytes[pos] == b'\'' {
            pos += 1;
        }

        let start = pos;
        while pos < taste_depth && is_label_byte(bytes[pos]) {
            pos += 1;
        }

        return TextEncoding::for_label(&bytes[start..pos]);
    }

    None
}

fn matches_at(bytes: &[u8], n: usize, marker: &[u8]) -> bool {
    bytes
        .get(n..n + marker.len())
        .is_some_and(|window| window.eq_ignore_ascii_case(marker))
}

fn is_label_byte(b: u8) -> bool {
    b == b'_' || b == b'-' || b.is_ascii_alphanumeric()
}
