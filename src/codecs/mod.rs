//! The five format handlers.
//!
//! Each handler is a unit struct implementing [`Codec`] and owning its
//! grammar as a lazily compiled anchored regex. Handlers operate on
//! normalized text only (see [`crate::grammar::normalize`]); `recognize` is
//! always a full-string match, never a prefix match.

mod c;
mod coq;
mod json;
mod rust;
mod string;

pub use c::CCodec;
pub use coq::CoqCodec;
pub use json::JsonCodec;
pub use rust::RustCodec;
pub use string::StringCodec;

use crate::error::{DecodeError, EncodeError};
use crate::format::Format;

/// A handler for one textual byte-sequence representation.
pub trait Codec: Sync {
    /// The format this handler implements.
    fn format(&self) -> Format;

    /// Full-string grammar match against normalized text.
    fn recognize(&self, cleaned: &str) -> bool;

    /// Map normalized text to bytes.
    ///
    /// Fails with [`DecodeError::GrammarMismatch`] when `recognize` is false,
    /// so callers may pass unchecked text.
    fn decode(&self, cleaned: &str) -> Result<Vec<u8>, DecodeError>;

    /// Map bytes to this format's canonical text.
    fn encode(&self, bytes: &[u8]) -> Result<String, EncodeError>;
}

/// Look up the handler for a format.
pub fn codec_for(format: Format) -> &'static dyn Codec {
    match format {
        Format::String => &StringCodec,
        Format::C => &CCodec,
        Format::Coq => &CoqCodec,
        Format::Rust => &RustCodec,
        Format::Json => &JsonCodec,
    }
}

/// Parse a two-hex-digit chunk that the grammar has already vetted.
fn parse_hex_pair(pair: &str, format: Format) -> Result<u8, DecodeError> {
    u8::from_str_radix(pair, 16).map_err(|_| DecodeError::GrammarMismatch { format })
}

/// Parse a 1-3 digit decimal token into a byte.
///
/// The Coq and JSON grammars admit three-digit tokens up to 999; values above
/// 255 are rejected here rather than at the grammar level so the error can
/// name the offending value.
fn parse_decimal(token: &str, format: Format) -> Result<u8, DecodeError> {
    let value: u16 = token
        .parse()
        .map_err(|_| DecodeError::GrammarMismatch { format })?;
    u8::try_from(value).map_err(|_| DecodeError::OutOfRange { format, value })
}
