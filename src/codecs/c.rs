//! C `uint32_t` literal array handler: `0x209577bdu, 0xa6bf4b58u`.
//!
//! Each token carries four bytes, most significant pair first, so the byte
//! sequence length must be a multiple of 4 on the encode side.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{parse_hex_pair, Codec};
use crate::error::{DecodeError, EncodeError};
use crate::format::Format;
use crate::grammar::token_list;

static GRAMMAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(&token_list("0x[0-9a-fA-F]{8}u", ',')).unwrap());

pub struct CCodec;

impl Codec for CCodec {
    fn format(&self) -> Format {
        Format::C
    }

    fn recognize(&self, cleaned: &str) -> bool {
        GRAMMAR.is_match(cleaned)
    }

    fn decode(&self, cleaned: &str) -> Result<Vec<u8>, DecodeError> {
        if !self.recognize(cleaned) {
            return Err(DecodeError::GrammarMismatch { format: Format::C });
        }
        let mut bytes = Vec::with_capacity(cleaned.len() / 11 * 4 + 4);
        for token in cleaned.split(',') {
            // token shape is 0xDDDDDDDDu; take the eight digits between the markers
            let digits = &token[2..token.len() - 1];
            for index in 0..4 {
                bytes.push(parse_hex_pair(&digits[index * 2..index * 2 + 2], Format::C)?);
            }
        }
        Ok(bytes)
    }

    fn encode(&self, bytes: &[u8]) -> Result<String, EncodeError> {
        if bytes.len() % 4 != 0 {
            return Err(EncodeError::InvalidLength { len: bytes.len() });
        }
        let words: Vec<String> = bytes
            .chunks_exact(4)
            .map(|word| {
                format!(
                    "0x{:02x}{:02x}{:02x}{:02x}u",
                    word[0], word[1], word[2], word[3]
                )
            })
            .collect();
        Ok(words.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_word() {
        assert_eq!(
            CCodec.decode("0x209577bdu"),
            Ok(vec![0x20, 0x95, 0x77, 0xbd])
        );
    }

    #[test]
    fn decodes_word_list_in_order() {
        assert_eq!(
            CCodec.decode("0x209577bdu,0xa6bf4b58u"),
            Ok(vec![0x20, 0x95, 0x77, 0xbd, 0xa6, 0xbf, 0x4b, 0x58])
        );
    }

    #[test]
    fn encodes_with_separator_spacing() {
        let bytes = [0x20, 0x95, 0x77, 0xbd, 0xa6, 0xbf, 0x4b, 0x58];
        assert_eq!(
            CCodec.encode(&bytes),
            Ok("0x209577bdu, 0xa6bf4b58u".to_string())
        );
    }

    #[test]
    fn encode_requires_multiple_of_four() {
        assert_eq!(
            CCodec.encode(&[0x20, 0x95, 0x77]),
            Err(EncodeError::InvalidLength { len: 3 })
        );
        assert_eq!(CCodec.encode(&[]), Ok(String::new()));
    }

    #[test]
    fn rejects_short_words_and_missing_suffix() {
        assert!(!CCodec.recognize("0x2095u"));
        assert!(!CCodec.recognize("0x209577bd"));
        assert!(!CCodec.recognize(""));
        assert_eq!(
            CCodec.decode("0x209577bd"),
            Err(DecodeError::GrammarMismatch { format: Format::C })
        );
    }
}
