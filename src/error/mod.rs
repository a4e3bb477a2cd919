//! Error types for sniffrs.

use std::fmt;

/// Errors that can occur during detection and utility operations.
#[derive(Debug)]
pub enum SniffError {
    /// No heuristic managed to identify the buffer's encoding.
    EncodingUndetectable,

    /// An I/O error occurred while compressing or decompressing data.
    Io(std::io::Error),

    /// `string::chunk` was called with a piece size of zero.
    InvalidChunkSize,
}

impl fmt::Display for SniffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SniffError::EncodingUndetectable => {
                write!(f, "encoding undetectable: no heuristic matched")
            }
            SniffError::Io(e) => write!(f, "io error: {}", e),
            SniffError::InvalidChunkSize => {
                write!(f, "invalid chunk size: must be at least 1")
            }
        }
    }
}

impl std::error::Error for SniffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SniffError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SniffError {
    fn from(e: std::io::Error) -> Self {
        SniffError::Io(e)
    }
}
