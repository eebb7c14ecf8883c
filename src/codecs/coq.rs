//! Coq `%Z` list handler: `32%Z; 149%Z; 119%Z; 189%Z`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{parse_decimal, Codec};
use crate::error::{DecodeError, EncodeError};
use crate::format::Format;
use crate::grammar::token_list;

static GRAMMAR: Lazy<Regex> = Lazy::new(|| Regex::new(&token_list("[0-9]{1,3}%Z", ';')).unwrap());

pub struct CoqCodec;

impl Codec for CoqCodec {
    fn format(&self) -> Format {
        Format::Coq
    }

    fn recognize(&self, cleaned: &str) -> bool {
        GRAMMAR.is_match(cleaned)
    }

    fn decode(&self, cleaned: &str) -> Result<Vec<u8>, DecodeError> {
        if !self.recognize(cleaned) {
            return Err(DecodeError::GrammarMismatch { format: Format::Coq });
        }
        cleaned
            .split(';')
            .map(|token| {
                let digits = token.strip_suffix("%Z").unwrap_or(token);
                parse_decimal(digits, Format::Coq)
            })
            .collect()
    }

    fn encode(&self, bytes: &[u8]) -> Result<String, EncodeError> {
        let tokens: Vec<String> = bytes.iter().map(|byte| format!("{}%Z", byte)).collect();
        Ok(tokens.join("; "))
    }
}
