//! Error types for oxitune operations.
//!
//! This module provides a single error type covering all failure modes of
//! the library: I/O errors, YM3 container validation errors, and malformed
//! compressed streams detected during decoding.

use std::io;
use thiserror::Error;

/// The main error type for oxitune operations.
#[derive(Debug, Error)]
pub enum OxituneError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid magic number in file header.
    #[error("Invalid magic number: expected {expected:02x?}, found {found:02x?}")]
    InvalidMagic {
        /// Expected magic bytes.
        expected: Vec<u8>,
        /// Actual magic bytes found.
        found: Vec<u8>,
    },

    /// Invalid header or container structure.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// Corrupted data in a compressed stream.
    #[error("Corrupted data at offset {offset}: {message}")]
    CorruptedData {
        /// Byte offset where corruption was detected.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// Invalid distance in an LZ77 back-reference.
    #[error("Invalid back-reference distance: {distance} exceeds history size {history_size}")]
    InvalidDistance {
        /// The invalid distance value.
        distance: usize,
        /// Current history buffer size.
        history_size: usize,
    },

    /// Buffer length or parameter not aligned to the unit granularity.
    #[error("Invalid granularity: {multiple} does not divide length {len}")]
    InvalidMultiple {
        /// The granularity in raw bytes per unit.
        multiple: usize,
        /// The misaligned length.
        len: usize,
    },

    /// Match offset beyond what the selected pack format can represent.
    #[error("Match offset {offset} exceeds format limit {limit}")]
    OffsetTooFar {
        /// The unrepresentable offset, in raw bytes.
        offset: usize,
        /// Largest offset the format can encode, in raw bytes.
        limit: usize,
    },

    /// Verified round trip produced output differing from the input.
    #[error("Verification failed: decoded output differs at byte {offset}")]
    VerifyFailed {
        /// Position of the first differing byte.
        offset: usize,
    },
}

/// Result type alias for oxitune operations.
pub type Result<T> = std::result::Result<T, OxituneError>;

impl OxituneError {
    /// Create an invalid magic error.
    pub fn invalid_magic(expected: impl Into<Vec<u8>>, found: impl Into<Vec<u8>>) -> Self {
        Self::InvalidMagic {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a corrupted data error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            offset,
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create an invalid distance error.
    pub fn invalid_distance(distance: usize, history_size: usize) -> Self {
        Self::InvalidDistance {
            distance,
            history_size,
        }
    }

    /// Create an invalid granularity error.
    pub fn invalid_multiple(multiple: usize, len: usize) -> Self {
        Self::InvalidMultiple { multiple, len }
    }

    /// Create an offset-too-far error.
    pub fn offset_too_far(offset: usize, limit: usize) -> Self {
        Self::OffsetTooFar { offset, limit }
    }

    /// Create a verification failure error.
    pub fn verify_failed(offset: usize) -> Self {
        Self::VerifyFailed { offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxituneError::invalid_magic(b"YM3!".to_vec(), b"YM2!".to_vec());
        assert!(err.to_string().contains("Invalid magic"));

        let err = OxituneError::invalid_distance(500, 100);
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("100"));

        let err = OxituneError::invalid_multiple(2, 7);
        assert!(err.to_string().contains("does not divide"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxituneError = io_err.into();
        assert!(matches!(err, OxituneError::Io(_)));
    }
}
