//! Async Deflate stream adapters.
//!
//! Both adapters pull bytes from a `futures_io::AsyncRead` and yield
//! [`Bytes`] frames, driving a flate2 codec incrementally so memory use
//! stays bounded by the frame size rather than the input size.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use sniffrs::{SniffError, deflate_stream};
//!
//! async fn demo<R: futures_io::AsyncRead>(reader: R) -> Result<(), SniffError> {
//!     let mut stream = std::pin::pin!(deflate_stream(reader));
//!
//!     while let Some(frame) = stream.next().await {
//!         let frame = frame?;
//!         println!("frame: {} bytes", frame.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};
use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::error::SniffError;

const READ_BUF_LEN: usize = 8 * 1024;
const FRAME_CAPACITY: usize = 8 * 1024;

pin_project! {
    /// A stream that yields Deflate-compressed frames from an async reader.
    ///
    /// The final frame is emitted when the reader reaches end of input,
    /// closing the Deflate stream; collecting every frame gives the same
    /// bytes as [`crate::compress::compress_deflate`] over the whole
    /// input.
    pub struct DeflateStream<R> {
        #[pin]
        reader: R,
        codec: Compress,
        read_buf: Vec<u8>,
        pending: Vec<u8>,
        finished: bool,
    }
}

impl<R> DeflateStream<R> {
    /// Creates a compressing stream over an async reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            codec: Compress::new(Compression::default(), false),
            read_buf: vec![0u8; READ_BUF_LEN],
            pending: Vec::new(),
            finished: false,
        }
    }
}

impl<R: AsyncRead> Stream for DeflateStream<R> {
    type Item = Result<Bytes, SniffError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if *this.finished {
                return Poll::Ready(None);
            }

            // Push pending input through the codec before reading more.
            if !this.pending.is_empty() {
                let mut out = Vec::with_capacity(FRAME_CAPACITY);
                let before = this.codec.total_in();
                if let Err(e) = this.codec.compress_vec(this.pending, &mut out, FlushCompress::None)
                {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(invalid_data(e))));
                }
                let consumed = (this.codec.total_in() - before) as usize;
                this.pending.drain(..consumed);

                if !out.is_empty() {
                    return Poll::Ready(Some(Ok(Bytes::from(out))));
                }
                if consumed > 0 {
                    continue;
                }
            }

            let buf = &mut this.read_buf[..];
            match this.reader.as_mut().poll_read(cx, buf) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(SniffError::Io(e))));
                }
                Poll::Ready(Ok(0)) => {
                    // End of input: close the Deflate stream.
                    let mut out = Vec::with_capacity(FRAME_CAPACITY);
                    loop {
                        match this.codec.compress_vec(&[], &mut out, FlushCompress::Finish) {
                            Ok(Status::StreamEnd) => break,
                            Ok(_) => out.reserve(FRAME_CAPACITY),
                            Err(e) => {
                                *this.finished = true;
                                return Poll::Ready(Some(Err(invalid_data(e))));
                            }
                        }
                    }
                    *this.finished = true;
                    if out.is_empty() {
                        return Poll::Ready(None);
                    }
                    return Poll::Ready(Some(Ok(Bytes::from(out))));
                }
                Poll::Ready(Ok(n)) => {
                    this.pending.extend_from_slice(&this.read_buf[..n]);
                }
            }
        }
    }
}

pin_project! {
    /// A stream that decompresses Deflate data from an async reader.
    ///
    /// Frames of decompressed bytes are yielded as they become
    /// available. Corrupt input surfaces as an [`SniffError::Io`] item
    /// and ends the stream, as does input that stops before the Deflate
    /// stream is complete.
    pub struct InflateStream<R> {
        #[pin]
        reader: R,
        codec: Decompress,
        read_buf: Vec<u8>,
        pending: Vec<u8>,
        finished: bool,
    }
}

impl<R> InflateStream<R> {
    /// Creates a decompressing stream over an async reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            codec: Decompress::new(false),
            read_buf: vec![0u8; READ_BUF_LEN],
            pending: Vec::new(),
            finished: false,
        }
    }
}

impl<R: AsyncRead> Stream for InflateStream<R> {
    type Item = Result<Bytes, SniffError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if *this.finished {
                return Poll::Ready(None);
            }

            if !this.pending.is_empty() {
                let mut out = Vec::with_capacity(FRAME_CAPACITY);
                let before = this.codec.total_in();
                let status = match this.codec.decompress_vec(
                    this.pending,
                    &mut out,
                    FlushDecompress::None,
                ) {
                    Ok(status) => status,
                    Err(e) => {
                        *this.finished = true;
                        return Poll::Ready(Some(Err(invalid_data(e))));
                    }
                };
                let consumed = (this.codec.total_in() - before) as usize;
                this.pending.drain(..consumed);

                if status == Status::StreamEnd {
                    // Anything after the stream end is ignored.
                    *this.finished = true;
                }
                if !out.is_empty() {
                    return Poll::Ready(Some(Ok(Bytes::from(out))));
                }
                if *this.finished {
                    return Poll::Ready(None);
                }
                if consumed > 0 {
                    continue;
                }
            }

            let buf = &mut this.read_buf[..];
            match this.reader.as_mut().poll_read(cx, buf) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(SniffError::Io(e))));
                }
                Poll::Ready(Ok(0)) => {
                    // An empty reader inflates to nothing.
                    if this.codec.total_in() == 0 {
                        *this.finished = true;
                        return Poll::Ready(None);
                    }
                    // End of input: the codec can hold output it has
                    // consumed but not yet delivered, so drain it before
                    // judging the stream complete.
                    let mut out = Vec::with_capacity(FRAME_CAPACITY);
                    loop {
                        let before = this.codec.total_out();
                        match this
                            .codec
                            .decompress_vec(&[], &mut out, FlushDecompress::Finish)
                        {
                            Ok(Status::StreamEnd) => break,
                            Ok(_) if this.codec.total_out() > before => {
                                out.reserve(FRAME_CAPACITY);
                            }
                            Ok(_) => {
                                // No more output and no stream end: the
                                // input stopped short.
                                *this.finished = true;
                                return Poll::Ready(Some(Err(SniffError::Io(io::Error::new(
                                    io::ErrorKind::UnexpectedEof,
                                    "deflate stream ended before completion",
                                )))));
                            }
                            Err(e) => {
                                *this.finished = true;
                                return Poll::Ready(Some(Err(invalid_data(e))));
                            }
                        }
                    }
                    *this.finished = true;
                    if out.is_empty() {
                        return Poll::Ready(None);
                    }
                    return Poll::Ready(Some(Ok(Bytes::from(out))));
                }
                Poll::Ready(Ok(n)) => {
                    this.pending.extend_from_slice(&this.read_buf[..n]);
                }
            }
        }
    }
}

fn invalid_data(e: impl std::error::Error + Send + Sync + 'static) -> SniffError {
    SniffError::Io(io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Creates a stream of Deflate-compressed frames from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, `tokio_util::compat` converts `tokio::io::AsyncRead`
/// to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use sniffrs::deflate_stream;
///
/// let file = tokio::fs::File::open("data.txt").await?;
/// let stream = deflate_stream(file.compat());
/// ```
pub fn deflate_stream<R: AsyncRead>(reader: R) -> DeflateStream<R> {
    DeflateStream::new(reader)
}

/// Creates a stream that decompresses Deflate data from an async reader.
///
/// The inverse of [`deflate_stream`]; see there for runtime notes.
pub fn inflate_stream<R: AsyncRead>(reader: R) -> InflateStream<R> {
    InflateStream::new(reader)
}
