//! Case-preserving rotation cipher over ASCII text, ROT13 by default.
//!
//! Letters are rotated within their own case; every other character is left
//! unchanged. With ROT13:
//!
//! ```text
//! from: ABCDE FGHIJ KLMNO PQRST UVWXY Z
//! to:   NOPQR STUVW XYZAB CDEFG HIJKL M
//! ```
//!
//! The law of interest is the round trip: decoding an encoded message with the
//! same rotation gives back the message. [`encode_broken`] and
//! [`encode_broken_upper_z_only`] each break that law on purpose, so property
//! tests have something to falsify.

use thiserror::Error;

use crate::log::debug;

pub const ALPHABET_SIZE: i64 = 26;
pub const ROT13: i64 = 13;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("non-ASCII character {ch:?} at byte {index}")]
    NonAscii { ch: char, index: usize },
}

/// Rotates every letter of `message` forward by `rotate_by` places.
///
/// `rotate_by` may be any integer; it is reduced modulo 26.
pub fn encode(message: &str, rotate_by: i64) -> Result<String, CipherError> {
    check_ascii(message)?;
    Ok(rotate(message, rotate_by))
}

/// Inverse of [`encode`] for the same `rotate_by`.
pub fn decode(message: &str, rotate_by: i64) -> Result<String, CipherError> {
    check_ascii(message)?;
    Ok(rotate(message, decode_shift(rotate_by)))
}

/// ROT13 is its own inverse.
pub fn rot13(message: &str) -> Result<String, CipherError> {
    encode(message, ROT13)
}

/// Like [`encode`], but appends a stray space.
pub fn encode_broken(message: &str, rotate_by: i64) -> Result<String, CipherError> {
    let mut out = encode(message, rotate_by)?;
    out.push(' ');
    Ok(out)
}

/// Like [`encode`], but doubles every `Z` of the output.
pub fn encode_broken_upper_z_only(message: &str, rotate_by: i64) -> Result<String, CipherError> {
    Ok(encode(message, rotate_by)?.replace('Z', "ZZ"))
}

fn decode_shift(rotate_by: i64) -> i64 {
    (ALPHABET_SIZE - rotate_by.rem_euclid(ALPHABET_SIZE)) % ALPHABET_SIZE
}

// requires: message is ASCII
fn rotate(message: &str, rotate_by: i64) -> String {
    // in 0..26, so it fits a u8
    let n = rotate_by.rem_euclid(ALPHABET_SIZE) as u8;
    message.bytes().map(|c| char::from(shift_letter(c, n))).collect()
}

fn shift_letter(c: u8, n: u8) -> u8 {
    match c {
        b'A'..=b'Z' => shift_from(c, n, b'A'),
        b'a'..=b'z' => shift_from(c, n, b'a'),
        _ => c,
    }
}

fn shift_from(c: u8, n: u8, first: u8) -> u8 {
    (c - first + n) % ALPHABET_SIZE as u8 + first
}

fn check_ascii(message: &str) -> Result<(), CipherError> {
    match message.char_indices().find(|(_, ch)| !ch.is_ascii()) {
        Some((index, ch)) => {
            debug!("rejecting message: non-ASCII {:?} at byte {}", ch, index);
            Err(CipherError::NonAscii { ch, index })
        }
        None => Ok(()),
    }
}
