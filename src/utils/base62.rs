//! Base62 encoding of row identifiers into slugs.
//!
//! Slugs are derived from the auto-incrementing primary key, so they are unique
//! and collision-free without any lookup. Only encoding is needed; links are
//! always looked up by their slug string.

/// Symbol table: digits, then lowercase, then uppercase.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes a non-negative integer as a base62 string.
///
/// `0` encodes to `"0"`. Any other value produces the standard positional
/// representation with no leading zeros.
///
/// # Examples
///
/// ```
/// use tinylink::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    // 62^11 > u64::MAX
    let mut symbols = Vec::with_capacity(11);
    while n > 0 {
        symbols.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }
    symbols.reverse();

    symbols.into_iter().map(char::from).collect()
}

/// Returns true if `s` is non-empty and uses only base62 symbols.
pub fn is_base62(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}
