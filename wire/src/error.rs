//! Error types for the transport envelope.

use std::fmt;

/// Result type for transport envelope operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur while packing or unpacking a share token.
///
/// All decode-side variants carry the same meaning to the caller: the token
/// is corrupt or unrecognized, and no build may be applied from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The token contains characters outside the base64 alphabets, or has an
    /// impossible length.
    InvalidBase64 {
        /// Decoder-reported reason.
        reason: String,
    },

    /// The compressed stream is corrupt or truncated.
    CorruptStream {
        /// Decompressor-reported reason.
        reason: String,
    },

    /// The inflated payload exceeds the configured limit.
    ///
    /// Build payloads are small; a stream that inflates past the limit is a
    /// decompression bomb, not a build.
    InflatedTooLarge {
        /// Maximum inflated size in bytes.
        limit: usize,
    },

    /// The compressor failed while packing.
    Deflate {
        /// Compressor-reported reason.
        reason: String,
    },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase64 { reason } => write!(f, "invalid base64 token: {reason}"),
            Self::CorruptStream { reason } => {
                write!(f, "corrupt or truncated compressed stream: {reason}")
            }
            Self::InflatedTooLarge { limit } => {
                write!(f, "inflated payload exceeds {limit} bytes")
            }
            Self::Deflate { reason } => write!(f, "compression failed: {reason}"),
        }
    }
}

impl std::error::Error for TransportError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_base64() {
        let err = TransportError::InvalidBase64 {
            reason: "invalid symbol".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("base64"));
        assert!(msg.contains("invalid symbol"));
    }

    #[test]
    fn error_display_corrupt_stream() {
        let err = TransportError::CorruptStream {
            reason: "unexpected end".to_owned(),
        };
        assert!(err.to_string().contains("unexpected end"));
    }

    #[test]
    fn error_display_inflated_too_large() {
        let err = TransportError::InflatedTooLarge { limit: 1024 };
        assert!(err.to_string().contains("1024"));
    }

    #[test]
    fn error_equality_and_clone() {
        let err = TransportError::InflatedTooLarge { limit: 64 };
        assert_eq!(err.clone(), err);
        assert_ne!(err, TransportError::InflatedTooLarge { limit: 65 });
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<TransportError>();
    }
}
