//! Error types for decoding, encoding, and the conversion pipeline.

use crate::format::Format;
use std::fmt;

/// Errors that can occur while decoding input text to a byte sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input does not satisfy the requested format's grammar
    GrammarMismatch { format: Format },
    /// Auto-detection exhausted every known grammar
    Unrecognized,
    /// A decimal token is outside the single-byte range 0-255
    OutOfRange { format: Format, value: u16 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::GrammarMismatch { format } => {
                write!(f, "input is not a valid {} encoding", format)
            }
            DecodeError::Unrecognized => {
                write!(f, "input does not match any known encoding")
            }
            DecodeError::OutOfRange { format, value } => {
                write!(f, "{} value {} does not fit in a byte", format, value)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors that can occur while encoding a byte sequence to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The C format packs 4 bytes per `uint32_t` literal
    InvalidLength { len: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidLength { len } => {
                write!(
                    f,
                    "C encoding requires a multiple of 4 bytes, got {}",
                    len
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Either side of the conversion pipeline failing.
///
/// Decode errors always surface before encode errors: the pipeline never
/// reaches the encoder when decoding fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    Decode(DecodeError),
    Encode(EncodeError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Decode(err) => write!(f, "{}", err),
            ConvertError::Encode(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Decode(err) => Some(err),
            ConvertError::Encode(err) => Some(err),
        }
    }
}

impl From<DecodeError> for ConvertError {
    fn from(err: DecodeError) -> Self {
        ConvertError::Decode(err)
    }
}

impl From<EncodeError> for ConvertError {
    fn from(err: EncodeError) -> Self {
        ConvertError::Encode(err)
    }
}
