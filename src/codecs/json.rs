//! JSON-style decimal array handler: `32, 149, 119, 189`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{parse_decimal, Codec};
use crate::error::{DecodeError, EncodeError};
use crate::format::Format;
use crate::grammar::token_list;

static GRAMMAR: Lazy<Regex> = Lazy::new(|| Regex::new(&token_list("[0-9]{1,3}", ',')).unwrap());

pub struct JsonCodec;

impl Codec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn recognize(&self, cleaned: &str) -> bool {
        GRAMMAR.is_match(cleaned)
    }

    fn decode(&self, cleaned: &str) -> Result<Vec<u8>, DecodeError> {
        if !self.recognize(cleaned) {
            return Err(DecodeError::GrammarMismatch {
                format: Format::Json,
            });
        }
        cleaned
            .split(',')
            .map(|token| parse_decimal(token, Format::Json))
            .collect()
    }

    fn encode(&self, bytes: &[u8]) -> Result<String, EncodeError> {
        let tokens: Vec<String> = bytes.iter().map(|byte| byte.to_string()).collect();
        Ok(tokens.join(", "))
    }
}
