//! Short code generation and validation utilities.
//!
//! Codes are drawn from a 62-character alphabet (`0-9`, `a-z`, `A-Z`).
//! The first attempt for a URL is derived from its SHA-256 digest so that it
//! is reproducible across calls and restarts; random codes are only used as
//! a fallback once that attempt is taken.

use crate::domain::errors::ShortenError;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Alphabet used for every short code; value 0 maps to the first character.
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Minimum length of a caller-supplied custom code.
pub const MIN_CUSTOM_CODE_LENGTH: usize = 3;

/// Maximum length of any short code.
pub const MAX_CODE_LENGTH: usize = 20;

const BASE: u64 = BASE62_ALPHABET.len() as u64;

/// Encodes an integer in base 62, most-significant digit first.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(encode_base62(0), "0");
/// assert_eq!(encode_base62(10), "a");
/// assert_eq!(encode_base62(62), "10");
/// ```
pub fn encode_base62(mut num: u64) -> String {
    if num == 0 {
        return char::from(BASE62_ALPHABET[0]).to_string();
    }

    let mut digits = Vec::new();
    while num > 0 {
        digits.push(BASE62_ALPHABET[(num % BASE) as usize]);
        num /= BASE;
    }

    digits.iter().rev().map(|&b| char::from(b)).collect()
}

/// Derives a short code from the URL's SHA-256 digest.
///
/// The first 4 bytes of the digest are read as a big-endian `u32` and
/// base62-encoded. The result is right-padded with `'0'` up to `length`, or
/// cut to its leftmost `length` characters.
///
/// Pure: the same `url` and `length` always yield the same code.
pub fn deterministic_code(url: &str, length: usize) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);

    let mut code = encode_base62(u64::from(prefix));
    if code.len() < length {
        let padding = length - code.len();
        code.extend(std::iter::repeat_n(char::from(BASE62_ALPHABET[0]), padding));
    } else {
        code.truncate(length);
    }

    code
}

/// Generates `length` characters drawn uniformly, with replacement, from
/// [`BASE62_ALPHABET`].
///
/// Uses the thread-local RNG; not meant for secrets.
pub fn random_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| char::from(BASE62_ALPHABET[rng.random_range(0..BASE62_ALPHABET.len())]))
        .collect()
}

/// Validates a caller-supplied custom short code.
///
/// # Rules
///
/// - Length: 3-20 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`ShortenError::InvalidCode`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), ShortenError> {
    let length = code.chars().count();

    if !(MIN_CUSTOM_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
        return Err(ShortenError::InvalidCode {
            code: code.to_string(),
            reason: format!(
                "length must be {MIN_CUSTOM_CODE_LENGTH}-{MAX_CODE_LENGTH} characters, got {length}"
            ),
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ShortenError::InvalidCode {
            code: code.to_string(),
            reason: "only letters and digits are allowed".to_string(),
        });
    }

    Ok(())
}

/// Returns true if every character of `code` belongs to [`BASE62_ALPHABET`].
pub fn is_base62(code: &str) -> bool {
    code.bytes().all(|b| BASE62_ALPHABET.contains(&b))
}
