//! UTF-16 zero-byte statistics.

use crate::encoding::TextEncoding;

/// Minimum proportion of zero bytes, measured against the whole taste
/// window, for a byte lane to look like UTF-16 high bytes.
const ZERO_PROPORTION_THRESHOLD: f64 = 0.1;

/// Guesses BOM-less UTF-16 from where the zero bytes sit.
///
/// Text that is mostly ASCII has a zero high byte in every UTF-16 code
/// unit, so zeros concentrated at even offsets suggest big-endian and
/// zeros at odd offsets little-endian. The even lane is tried first.
pub(crate) fn sniff(bytes: &[u8], taste_depth: usize) -> Option<TextEncoding> {
    if taste_depth == 0 {
        return None;
    }

    if lane_proportion(bytes, 0, taste_depth) > ZERO_PROPORTION_THRESHOLD {
        return Some(TextEncoding::Utf16Be);
    }
    if lane_proportion(bytes, 1, taste_depth) > ZERO_PROPORTION_THRESHOLD {
        return Some(TextEncoding::Utf16Le);
    }

    None
}

/// Proportion of zero bytes at every second offset starting at `start`,
/// relative to the whole taste depth rather than the lane length.
fn lane_proportion(bytes: &[u8], start: usize, taste_depth: usize) -> f64 {
    let zeros = bytes[..taste_depth]
        .iter()
        .skip(start)
        .step_by(2)
        .filter(|&&b| b == 0)
        .count();
    zeros as f64 / taste_depth as f64
}
