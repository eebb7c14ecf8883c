//! The format tag identifying one of the five supported grammars.

use std::fmt;

/// One of the five textual representations of a byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Bare hex string, e.g. `209577bd` (optionally `0x`-prefixed)
    String,
    /// C `uint32_t` literal array, e.g. `0x209577bdu, 0xa6bf4b58u`
    C,
    /// Coq `%Z` list, e.g. `32%Z; 149%Z`
    Coq,
    /// Rust `u8` hex array, e.g. `0x20, 0x95`
    Rust,
    /// JSON-style decimal array, e.g. `32, 149`
    Json,
}

impl Format {
    /// Auto-detection priority order.
    ///
    /// Tried first to last; `String` comes last because its grammar is the
    /// most permissive (any run of hex-digit pairs, including the empty
    /// string).
    pub const DETECTION_ORDER: [Format; 5] = [
        Format::C,
        Format::Coq,
        Format::Rust,
        Format::Json,
        Format::String,
    ];

    /// Human-readable name, used in error messages and help text.
    pub fn name(&self) -> &'static str {
        match self {
            Format::String => "string",
            Format::C => "C",
            Format::Coq => "Coq",
            Format::Rust => "Rust",
            Format::Json => "JSON",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
