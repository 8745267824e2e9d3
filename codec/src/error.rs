//! Error types for codec operations.

use std::fmt;

use bytestream::ByteError;
use model::{EquipmentSlot, UnknownName};
use wire::TransportError;

/// Result type for encode operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while encoding a build descriptor.
///
/// The UI cannot produce an invalid descriptor in normal operation, so an
/// encode failure indicates a programming error upstream, not a user-facing
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The descriptor has more equipment pieces than the one-byte count
    /// field can carry. A known ceiling of the format.
    TooManyPieces {
        /// Number of pieces in the descriptor.
        count: usize,
    },

    /// An equipment slot appears more than once.
    DuplicateSlot {
        /// The repeated slot.
        slot: EquipmentSlot,
    },

    /// The transport envelope failed while packing.
    Transport(TransportError),

    /// The gear blob could not be serialized.
    Json {
        /// Serializer-reported reason.
        reason: String,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPieces { count } => {
                write!(f, "{count} equipment pieces exceed the format ceiling of 255")
            }
            Self::DuplicateSlot { slot } => {
                write!(f, "equipment slot {slot} appears more than once")
            }
            Self::Transport(err) => write!(f, "{err}"),
            Self::Json { reason } => write!(f, "failed to serialize gear blob: {reason}"),
        }
    }
}

impl std::error::Error for EncodeError {}

impl From<TransportError> for EncodeError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

/// Errors that can occur while decoding a share payload.
///
/// Every variant has the same contract for the caller: refuse the link and
/// leave the application in its default state. A corrupt or unrecognized
/// payload never yields a partially applied build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A read ran past the end of the payload, or a varint/string was
    /// malformed at the byte level.
    Bytes(ByteError),

    /// The base64 or inflate step failed.
    Transport(TransportError),

    /// The leading marker byte (or payload shape) matches no known format
    /// generation.
    UnknownVersion {
        /// The first payload byte.
        found: u8,
    },

    /// An enumerated field carried an index or name outside its closed set.
    UnknownName(UnknownName),

    /// An equipment slot appears more than once.
    DuplicateSlot {
        /// The repeated slot.
        slot: EquipmentSlot,
    },

    /// Bytes were left over after the final field of a binary payload.
    TrailingBytes {
        /// Number of unread bytes.
        remaining: usize,
    },

    /// A legacy JSON payload did not match its generation's schema.
    MalformedJson {
        /// Parser-reported reason.
        reason: String,
    },

    /// A readable-format query parameter could not be parsed.
    MalformedQuery {
        /// The parameter name.
        param: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A required readable-format query parameter is absent.
    MissingParam {
        /// The parameter name.
        param: &'static str,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(err) => write!(f, "{err}"),
            Self::Transport(err) => write!(f, "{err}"),
            Self::UnknownVersion { found } => {
                write!(f, "unrecognized format version marker 0x{found:02X}")
            }
            Self::UnknownName(err) => write!(f, "{err}"),
            Self::DuplicateSlot { slot } => {
                write!(f, "equipment slot {slot} appears more than once")
            }
            Self::TrailingBytes { remaining } => {
                write!(f, "{remaining} trailing bytes after the final build field")
            }
            Self::MalformedJson { reason } => write!(f, "malformed JSON payload: {reason}"),
            Self::MalformedQuery { param, reason } => {
                write!(f, "malformed query parameter {param:?}: {reason}")
            }
            Self::MissingParam { param } => write!(f, "missing query parameter {param:?}"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<ByteError> for DecodeError {
    fn from(err: ByteError) -> Self {
        Self::Bytes(err)
    }
}

impl From<TransportError> for DecodeError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

impl From<UnknownName> for DecodeError {
    fn from(err: UnknownName) -> Self {
        Self::UnknownName(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_error_display() {
        let err = EncodeError::TooManyPieces { count: 300 };
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("255"));

        let err = EncodeError::DuplicateSlot {
            slot: EquipmentSlot::Helm,
        };
        assert!(err.to_string().contains("Helm"));
    }

    #[test]
    fn decode_error_display_unknown_version() {
        let err = DecodeError::UnknownVersion { found: 0x7B };
        assert!(err.to_string().contains("0x7B"));
    }

    #[test]
    fn decode_error_wraps_byte_error() {
        let err: DecodeError = ByteError::InvalidVarint.into();
        assert_eq!(err, DecodeError::Bytes(ByteError::InvalidVarint));
        assert!(err.to_string().contains("varint"));
    }

    #[test]
    fn decode_error_wraps_transport_error() {
        let inner = TransportError::InflatedTooLarge { limit: 16 };
        let err: DecodeError = inner.clone().into();
        assert_eq!(err, DecodeError::Transport(inner));
    }

    #[test]
    fn decode_error_display_trailing_bytes() {
        let err = DecodeError::TrailingBytes { remaining: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<EncodeError>();
        assert_error::<DecodeError>();
    }
}
