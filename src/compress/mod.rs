//! Gzip and Deflate one-shot helpers.
//!
//! - [`compress_gzip`] / [`decompress_gzip`] - Gzip framing
//! - [`compress_deflate`] / [`decompress_deflate`] - raw Deflate
//!
//! All four take a byte slice and return a fresh `Vec<u8>` at the
//! default compression level. For streaming over async readers, see the
//! `async-io` feature.

use std::io::Read;

use flate2::Compression;
use flate2::read::{DeflateDecoder, DeflateEncoder, GzDecoder, GzEncoder};

use crate::error::SniffError;

/// Compresses bytes with Gzip framing.
///
/// # Example
///
/// ```
/// use sniffrs::compress::{compress_gzip, decompress_gzip};
///
/// let packed = compress_gzip(b"hello hello hello").unwrap();
/// assert_eq!(decompress_gzip(&packed).unwrap(), b"hello hello hello");
/// ```
pub fn compress_gzip(bytes: &[u8]) -> Result<Vec<u8>, SniffError> {
    let mut encoder = GzEncoder::new(bytes, Compression::default());
    let mut out = Vec::with_capacity(bytes.len());
    encoder.read_to_end(&mut out)?;
    Ok(out)
}

/// Decompresses Gzip-framed bytes.
///
/// # Errors
///
/// Returns [`SniffError::Io`] when the input is not valid Gzip data.
pub fn decompress_gzip(bytes: &[u8]) -> Result<Vec<u8>, SniffError> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::with_capacity(bytes.len().saturating_mul(2));
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

/// Compresses bytes with raw Deflate (no Gzip or zlib framing).
pub fn compress_deflate(bytes: &[u8]) -> Result<Vec<u8>, SniffError> {
    let mut encoder = DeflateEncoder::new(bytes, Compression::default());
    let mut out = Vec::with_capacity(bytes.len());
    encoder.read_to_end(&mut out)?;
    Ok(out)
}

/// Decompresses raw Deflate bytes.
///
/// # Errors
///
/// Returns [`SniffError::Io`] when the input is not a valid Deflate
/// stream.
pub fn decompress_deflate(bytes: &[u8]) -> Result<Vec<u8>, SniffError> {
    let mut decoder = DeflateDecoder::new(bytes);
    let mut out = Vec::with_capacity(bytes.len().saturating_mul(2));
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gzip_round_trip() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let packed = compress_gzip(data).unwrap();
        assert_eq!(decompress_gzip(&packed).unwrap(), data);
    }

    #[test]
    fn test_gzip_shrinks_repetitive_input() {
        let data = vec![b'z'; 4096];
        let packed = compress_gzip(&data).unwrap();
        assert!(packed.len() < data.len());
    }

    #[test]
    fn test_deflate_round_trip() {
        let data = b"pack my box with five dozen liquor jugs";
        let packed = compress_deflate(data).unwrap();
        assert_eq!(decompress_deflate(&packed).unwrap(), data);
    }

    #[test]
    fn test_deflate_smaller_than_gzip() {
        // Raw Deflate skips the Gzip header and trailer.
        let data = b"some moderately compressible text, repeated a bit";
        let gzipped = compress_gzip(data).unwrap();
        let deflated = compress_deflate(data).unwrap();
        assert!(deflated.len() < gzipped.len());
    }

    #[test]
    fn test_empty_round_trips() {
        let packed = compress_gzip(b"").unwrap();
        assert_eq!(decompress_gzip(&packed).unwrap(), b"");

        let packed = compress_deflate(b"").unwrap();
        assert_eq!(decompress_deflate(&packed).unwrap(), b"");
    }

    #[test]
    fn test_corrupt_gzip_is_io_error() {
        let err = decompress_gzip(b"definitely not gzip").unwrap_err();
        assert!(matches!(err, SniffError::Io(_)));
    }

    #[test]
    fn test_gzip_framing_is_not_raw_deflate() {
        let packed = compress_gzip(b"framing matters").unwrap();
        assert!(decompress_deflate(&packed).is_err());
    }
}
