//! Cache Key Module
//!
//! Deterministic construction of cache keys from primitive parts, plus
//! compression of long keys into a short fixed-width digest.

use std::fmt;

/// Delimiter between key parts.
const KEY_DELIMITER: &str = ":";

/// Number of hex characters kept from the digest.
const HASH_KEY_LEN: usize = 16;

// == Key Part ==
/// A primitive value usable as one segment of a cache key.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyPart {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Str(s) => write!(f, "{}", s),
            KeyPart::Int(n) => write!(f, "{}", n),
            KeyPart::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for KeyPart {
    fn from(value: &str) -> Self {
        KeyPart::Str(value.to_string())
    }
}

impl From<String> for KeyPart {
    fn from(value: String) -> Self {
        KeyPart::Str(value)
    }
}

impl From<i64> for KeyPart {
    fn from(value: i64) -> Self {
        KeyPart::Int(value)
    }
}

impl From<i32> for KeyPart {
    fn from(value: i32) -> Self {
        KeyPart::Int(value as i64)
    }
}

impl From<u32> for KeyPart {
    fn from(value: u32) -> Self {
        KeyPart::Int(value as i64)
    }
}

impl From<bool> for KeyPart {
    fn from(value: bool) -> Self {
        KeyPart::Bool(value)
    }
}

// == Build Key ==
/// Joins the canonical string form of each part with `:`, in the given
/// order.
///
/// Order matters: different orderings of the same parts produce different
/// keys. Callers wanting order-independence must canonicalize first, e.g.
/// sort a list of URLs before passing them in.
pub fn build_key(parts: &[KeyPart]) -> String {
    parts
        .iter()
        .map(|part| part.to_string())
        .collect::<Vec<_>>()
        .join(KEY_DELIMITER)
}

// == Hash Key ==
/// Compresses an arbitrary-length string into a short fixed-width digest.
///
/// Useful for shortening long keys like concatenated URLs or tokens. The
/// output is deterministic across processes and restricted to lowercase
/// hex.
pub fn hash_key(input: &str) -> String {
    let digest = blake3::hash(input.as_bytes());
    let hex = digest.to_hex();
    hex.as_str()[..HASH_KEY_LEN].to_string()
}
