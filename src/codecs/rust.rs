//! Rust `u8` hex array handler: `0x20, 0x95, 0x77, 0xbd`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{parse_hex_pair, Codec};
use crate::error::{DecodeError, EncodeError};
use crate::format::Format;
use crate::grammar::{token_list, HEX_PAIR};

static GRAMMAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(&token_list(&format!("0x{HEX_PAIR}"), ',')).unwrap());

pub struct RustCodec;

impl Codec for RustCodec {
    fn format(&self) -> Format {
        Format::Rust
    }

    fn recognize(&self, cleaned: &str) -> bool {
        GRAMMAR.is_match(cleaned)
    }

    fn decode(&self, cleaned: &str) -> Result<Vec<u8>, DecodeError> {
        if !self.recognize(cleaned) {
            return Err(DecodeError::GrammarMismatch {
                format: Format::Rust,
            });
        }
        cleaned
            .split(',')
            .map(|token| {
                let digits = token.strip_prefix("0x").unwrap_or(token);
                parse_hex_pair(digits, Format::Rust)
            })
            .collect()
    }

    fn encode(&self, bytes: &[u8]) -> Result<String, EncodeError> {
        let tokens: Vec<String> = bytes.iter().map(|byte| format!("0x{:02x}", byte)).collect();
        Ok(tokens.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_token_list() {
        assert_eq!(
            RustCodec.decode("0x20,0x95,0x77,0xbd"),
            Ok(vec![0x20, 0x95, 0x77, 0xbd])
        );
    }

    #[test]
    fn accepts_uppercase_digits() {
        assert_eq!(RustCodec.decode("0xAB,0xcd"), Ok(vec![0xab, 0xcd]));
    }

    #[test]
    fn encodes_with_separator_spacing() {
        assert_eq!(
            RustCodec.encode(&[0x20, 0x95]),
            Ok("0x20, 0x95".to_string())
        );
        assert_eq!(RustCodec.encode(&[]), Ok(String::new()));
    }

    #[test]
    fn rejects_bare_hex_and_wide_tokens() {
        assert!(!RustCodec.recognize("20,95"));
        assert!(!RustCodec.recognize("0x2095"));
        assert!(!RustCodec.recognize(""));
        assert_eq!(
            RustCodec.decode("20,95"),
            Err(DecodeError::GrammarMismatch {
                format: Format::Rust
            })
        );
    }
}
