//! Async streaming compression.
//!
//! This module provides asynchronous Deflate streaming using the
//! `futures-io::AsyncRead` trait, making it runtime-agnostic and
//! compatible with tokio, async-std, smol, and other async runtimes.
//!
//! - [`deflate_stream`] - Compresses an async reader into Deflate frames
//! - [`inflate_stream`] - Decompresses an async reader of Deflate data
//!
//! This module requires the `async-io` feature to be enabled.

mod deflate;

pub use deflate::{DeflateStream, InflateStream, deflate_stream, inflate_stream};
