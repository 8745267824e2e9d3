//! Error types for byte buffer operations.

use std::fmt;

/// Result type for byte buffer operations.
pub type ByteResult<T> = Result<T, ByteError>;

/// Errors that can occur while reading a byte buffer.
///
/// Writes cannot fail: the writer owns a growable buffer and every value a
/// caller can construct is encodable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteError {
    /// A read ran past the end of the buffer.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A varint had a continuation bit set past the maximum width.
    InvalidVarint,

    /// A length-prefixed string body was not valid UTF-8.
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence within the string body.
        valid_up_to: usize,
    },
}

impl fmt::Display for ByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::InvalidVarint => write!(f, "varint exceeds maximum encoded length"),
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "string body is not valid UTF-8 past byte {valid_up_to}")
            }
        }
    }
}

impl std::error::Error for ByteError {}
