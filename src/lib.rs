//! sniffrs
//!
//! Heuristic text-encoding detection for Rust.
//!
//! `sniffrs` inspects a byte buffer and decodes it into a `String` along
//! with the encoding it found. Detection runs a fixed priority pipeline:
//!
//! - BOM / signature match (UTF-32, UTF-16, UTF-8, UTF-7)
//! - UTF-8 structural scan
//! - UTF-16 zero-byte statistics
//! - embedded `charset=` / `encoding=` markers
//!
//! The crate intentionally:
//! - does NOT manage files or paths
//! - does NOT transcode between arbitrary encodings
//! - does NOT guess from language models or frequency tables
//!
//! It only does one thing: **taste bytes → yield encoding and text**
//!
//! Alongside the detector ride a few small, self-contained helpers:
//! [`string`] (affix trimming, chunking, constant-time comparison),
//! [`collections`] (order-insensitive equality and hashing),
//! [`compress`] (Gzip/Deflate one-shots), [`num`] (multiple-of
//! rounding), and [`random`] (a thread-safe RNG wrapper, feature `rng`).
//!
//! # Detecting
//!
//! ```
//! use sniffrs::{SniffError, TextEncoding, detect};
//!
//! fn main() -> Result<(), SniffError> {
//!     let detection = detect(b"\xEF\xBB\xBFcaf\xC3\xA9", 0)?;
//!     assert_eq!(detection.encoding, TextEncoding::Utf8);
//!     assert_eq!(detection.text, "café");
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use sniffrs::deflate_stream;
//!
//! async fn demo<R: futures_io::AsyncRead>(reader: R) -> Result<(), sniffrs::SniffError> {
//!     let mut stream = std::pin::pin!(deflate_stream(reader));
//!
//!     while let Some(frame) = stream.next().await {
//!         let frame = frame?;
//!         println!("frame {} bytes", frame.len());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod detect;
mod encoding;
mod error;

mod taste; // internal detection heuristics

pub mod collections;
pub mod compress;
pub mod num;
pub mod string;

#[cfg(feature = "rng")]
pub mod random;

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use detect::{Detection, detect};
pub use encoding::TextEncoding;
pub use error::SniffError;

#[cfg(feature = "async-io")]
pub use async_stream::{DeflateStream, InflateStream, deflate_stream, inflate_stream};
