//! Base-62 encoding of numeric record identifiers.
//!
//! Short codes are derived deterministically from the store-assigned id, so
//! uniqueness follows from the id sequence and no collision handling is needed.

/// Fixed 62-symbol alphabet: digits, then lowercase, then uppercase.
///
/// The ordering is part of the encoding contract and must not change once
/// codes have been issued.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encodes an id as a base-62 string, most-significant symbol first.
///
/// `encode(0)` yields `"0"`; no other output carries a leading zero symbol.
pub fn encode(id: u64) -> String {
    if id == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut digits = Vec::new();
    let mut num = id;
    while num > 0 {
        digits.push(ALPHABET[(num % 62) as usize]);
        num /= 62;
    }
    digits.reverse();

    // ALPHABET is ASCII, so the bytes always form valid UTF-8.
    String::from_utf8(digits).expect("base62 alphabet is ASCII")
}
