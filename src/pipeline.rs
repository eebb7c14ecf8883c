//! The conversion pipeline: normalize, decode, optional reverse, encode.

use crate::codecs::codec_for;
use crate::detect::decode_auto;
use crate::error::ConvertError;
use crate::format::Format;
use crate::grammar::normalize;

/// Convert raw input text from one representation to another.
///
/// With no `source`, the input grammar is auto-detected; an explicit `source`
/// never falls back to detection. With no `target`, output is the bare hex
/// string. `reverse` flips the decoded byte order before encoding.
pub fn convert(
    raw: &str,
    source: Option<Format>,
    target: Option<Format>,
    reverse: bool,
) -> Result<String, ConvertError> {
    let cleaned = normalize(raw);
    let mut bytes = match source {
        Some(format) => codec_for(format).decode(&cleaned)?,
        None => decode_auto(&cleaned)?,
    };
    if reverse {
        bytes.reverse();
    }
    let target = target.unwrap_or(Format::String);
    let encoded = codec_for(target).encode(&bytes)?;
    Ok(encoded)
}
