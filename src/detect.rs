//! Format auto-detection.
//!
//! Grammars are tried in a fixed priority order for correct disambiguation
//! (see [`Format::DETECTION_ORDER`]): the separator-bearing formats first,
//! the bare hex string last because its grammar is the most permissive.

use crate::codecs::codec_for;
use crate::error::DecodeError;
use crate::format::Format;

/// Identify the first format whose grammar matches the normalized text.
pub fn detect(cleaned: &str) -> Option<Format> {
    Format::DETECTION_ORDER
        .into_iter()
        .find(|&format| codec_for(format).recognize(cleaned))
}

/// Decode with the first matching grammar.
///
/// Fails with [`DecodeError::Unrecognized`] when no grammar matches.
pub fn decode_auto(cleaned: &str) -> Result<Vec<u8>, DecodeError> {
    match detect(cleaned) {
        Some(format) => codec_for(format).decode(cleaned),
        None => Err(DecodeError::Unrecognized),
    }
}
