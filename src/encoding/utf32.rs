//! Internal UTF-32 decoder.

/// Byte order of a UTF-32 stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endian {
    Big,
    Little,
}

/// Decodes UTF-32 bytes lossily.
///
/// Each 4-byte unit outside the scalar-value range (or inside the
/// surrogate range) becomes U+FFFD, as does a truncated trailing unit.
pub(crate) fn decode(bytes: &[u8], endian: Endian) -> String {
    let mut out = String::with_capacity(bytes.len() / 4);
    let mut units = bytes.chunks_exact(4);

    for unit in &mut units {
        let raw = match endian {
            Endian::Big => u32::from_be_bytes([unit[0], unit[1], unit[2], unit[3]]),
            Endian::Little => u32::from_le_bytes([unit[0], unit[1], unit[2], unit[3]]),
        };
        out.push(char::from_u32(raw).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    if !units.remainder().is_empty() {
        out.push(char::REPLACEMENT_CHARACTER);
    }

    out
}
