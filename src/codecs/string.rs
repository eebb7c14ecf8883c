//! Bare hex string handler: `209577bd`, optionally `0x209577bd`.
//!
//! The most permissive grammar of the five (any run of hex-digit pairs,
//! including none), which is why auto-detection tries it last. The empty
//! string is valid and decodes to zero bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write;

use super::{parse_hex_pair, Codec};
use crate::error::{DecodeError, EncodeError};
use crate::format::Format;
use crate::grammar::HEX_PAIR;

static GRAMMAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(?:0x)?(?:{HEX_PAIR})*$")).unwrap());

pub struct StringCodec;

impl Codec for StringCodec {
    fn format(&self) -> Format {
        Format::String
    }

    fn recognize(&self, cleaned: &str) -> bool {
        GRAMMAR.is_match(cleaned)
    }

    fn decode(&self, cleaned: &str) -> Result<Vec<u8>, DecodeError> {
        if !self.recognize(cleaned) {
            return Err(DecodeError::GrammarMismatch {
                format: Format::String,
            });
        }
        let digits = cleaned.strip_prefix("0x").unwrap_or(cleaned);
        digits
            .as_bytes()
            .chunks(2)
            .map(|pair| {
                let pair = std::str::from_utf8(pair).map_err(|_| {
                    DecodeError::GrammarMismatch {
                        format: Format::String,
                    }
                })?;
                parse_hex_pair(pair, Format::String)
            })
            .collect()
    }

    fn encode(&self, bytes: &[u8]) -> Result<String, EncodeError> {
        let mut out = String::with_capacity(bytes.len() * 2);
        for byte in bytes {
            let _ = write!(&mut out, "{:02x}", byte);
        }
        Ok(out)
    }
}
