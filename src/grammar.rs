//! Input normalization and shared grammar-building helpers.
//!
//! Each codec owns its grammar as a lazily compiled, fully anchored regex;
//! this module provides the raw material: the normalizer applied before any
//! grammar match, and the `^(token)(sep token)*$` pattern builder shared by
//! every separator-delimited format.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters ignored before grammar matching: all whitespace (including
/// newlines) and the bracket characters `()[]{}`.
static IGNORED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s()\[\]{}]+").unwrap());

/// Strip ignored characters from raw input text.
///
/// Pure function; grammar matching and decoding always operate on its output.
pub fn normalize(raw: &str) -> String {
    IGNORED.replace_all(raw, "").into_owned()
}

/// Anchored pattern for a non-empty, separator-delimited token list.
pub(crate) fn token_list(token: &str, separator: char) -> String {
    format!("^(?:{token})(?:{separator}(?:{token}))*$")
}

/// Hex-digit pair, upper- or lowercase.
pub(crate) const HEX_PAIR: &str = "[0-9a-fA-F]{2}";
