//! Internal UTF-7 decoder.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// Base64 engine for shifted runs: unpadded, trailing bits tolerated.
const RUN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodes UTF-7 bytes lossily.
///
/// Direct ASCII passes through. `+...-` shifted runs are base64-decoded
/// into big-endian UTF-16 code units. Every ill-formed piece (a bad run,
/// a truncated code unit, an unpaired surrogate, a byte above 0x7F)
/// becomes a single U+FFFD.
pub(crate) fn decode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'+' {
            let run_start = i + 1;
            let mut run_end = run_start;
            while run_end < bytes.len() && is_run_byte(bytes[run_end]) {
                run_end += 1;
            }

            if run_end == run_start {
                // "+-" encodes a literal plus sign.
                if run_end < bytes.len() && bytes[run_end] == b'-' {
                    out.push('+');
                    i = run_end + 1;
                } else {
                    out.push(char::REPLACEMENT_CHARACTER);
                    i = run_end;
                }
            } else {
                decode_run(&bytes[run_start..run_end], &mut out);
                i = run_end;
                // A trailing '-' closes the run and is absorbed.
                if i < bytes.len() && bytes[i] == b'-' {
                    i += 1;
                }
            }
        } else if b < 0x80 {
            out.push(b as char);
            i += 1;
        } else {
            out.push(char::REPLACEMENT_CHARACTER);
            i += 1;
        }
    }

    out
}

fn is_run_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'+' || b == b'/'
}

fn decode_run(run: &[u8], out: &mut String) {
    let decoded = match RUN_ENGINE.decode(run) {
        Ok(decoded) => decoded,
        Err(_) => {
            out.push(char::REPLACEMENT_CHARACTER);
            return;
        }
    };

    let mut units = decoded.chunks_exact(2);
    let code_units = (&mut units).map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    out.extend(char::decode_utf16(code_units).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)));

    if !units.remainder().is_empty() {
        out.push(char::REPLACEMENT_CHARACTER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_ascii() {
        assert_eq!(decode(b"Hello, World!"), "Hello, World!");
    }

    #[test]
    fn test_literal_plus() {
        assert_eq!(decode(b"1 +- 1 = 2"), "1 + 1 = 2");
    }

    #[test]
    fn test_shifted_run() {
        // "+ACE-" is '!' (U+0021).
        assert_eq!(decode(b"+ACE-"), "!");
        // "+AKk-" is the copyright sign (U+00A9).
        assert_eq!(decode(b"(c) is +AKk-"), "(c) is \u{a9}");
    }

    #[test]
    fn test_run_without_terminator() {
        assert_eq!(decode(b"+AKk"), "\u{a9}");
    }

    #[test]
    fn test_run_ended_by_other_byte() {
        assert_eq!(decode(b"+AKk."), "\u{a9}.");
    }

    #[test]
    fn test_surrogate_pair() {
        // U+1F600 as the pair D83D DE00.
        assert_eq!(decode(b"+2D3eAA-"), "\u{1f600}");
    }

    #[test]
    fn test_unpaired_surrogate() {
        assert_eq!(decode(b"+2D0-"), "\u{fffd}");
    }

    #[test]
    fn test_invalid_run_length() {
        assert_eq!(decode(b"+A-"), "\u{fffd}");
    }

    #[test]
    fn test_truncated_code_unit() {
        assert_eq!(decode(b"+AA-"), "\u{fffd}");
    }

    #[test]
    fn test_dangling_plus() {
        assert_eq!(decode(b"a+"), "a\u{fffd}");
        assert_eq!(decode(b"a+ b"), "a\u{fffd} b");
    }

    #[test]
    fn test_high_byte() {
        assert_eq!(decode(b"caf\xe9"), "caf\u{fffd}");
    }

    #[test]
    fn test_empty() {
        assert_eq!(decode(b""), "");
    }
}
