//! UTF-8 structural scan.

/// Scans `bytes[..taste_depth - 4]` for UTF-8 multi-byte structure.
///
/// ASCII advances the scan without proving anything, so an all-ASCII
/// window returns false. A well-formed 2-, 3-, or 4-byte sequence
/// confirms UTF-8; any pattern that fits none of the branches stops the
/// scan and withdraws the confirmation. The window stops 4 bytes short
/// of the taste depth so every branch can look ahead without running
/// off the end.
pub(crate) fn confirms_utf8(bytes: &[u8], taste_depth: usize) -> bool {
    let limit = taste_depth.saturating_sub(4);
    let mut confirmed = false;
    let mut i = 0;

    while i < limit {
        let b = bytes[i];
        if b <= 0x7F {
            i += 1;
        } else if (0xC2..=0xDF).contains(&b) && continuations(bytes, i + 1, 1) {
            confirmed = true;
            i += 2;
        } else if (0xE0..=0xF0).contains(&b) && continuations(bytes, i + 1, 2) {
            confirmed = true;
            i += 3;
        } else if (0xF0..=0xF4).contains(&b) && continuations(bytes, i + 1, 3) {
            confirmed = true;
            i += 4;
        } else {
            return false;
        }
    }

    confirmed
}

/// True if the `count` bytes starting at `start` are all continuation
/// bytes (0x80-0xBF).
fn continuations(bytes: &[u8], start: usize, count: usize) -> bool {
    bytes
        .get(start..start + count)
        .is_some_and(|window| window.iter().all(|&b| (0x80..0xC0).contains(&b)))
}
