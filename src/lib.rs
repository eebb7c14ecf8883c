//! # convex
//!
//! Converts a byte sequence between five textual representations: a bare hex
//! string, a C `uint32_t` literal array, a Coq `%Z` list, a Rust `u8` hex
//! array, and a JSON-style decimal array.
//!
//! Every representation decodes to the same canonical `Vec<u8>` and encodes
//! back byte-for-byte, so any pair of formats round-trips through
//! [`convert`]. When no source format is given, the input grammar is
//! auto-detected (see [`detect`](detect::detect)).

pub mod codecs;
pub mod detect;
pub mod error;
pub mod format;
pub mod grammar;
pub mod pipeline;

pub use codecs::{codec_for, Codec};
pub use detect::{decode_auto, detect};
pub use error::{ConvertError, DecodeError, EncodeError};
pub use format::Format;
pub use grammar::normalize;
pub use pipeline::convert;
