//! Reversible short code encoding.
//!
//! An alias's public short code is derived from its database identifier by
//! an affine permutation over `[0, 2^63)` followed by base62 rendering.
//! The permutation hides creation order: sequential identifiers map to
//! unrelated-looking codes, so `/1`, `/2`, ... cannot be enumerated. It is
//! not a cryptographic scheme; codes remain guessable by brute force.
//!
//! The constants are fixed for the lifetime of a deployed code set.
//! Changing them invalidates every previously issued code.

use thiserror::Error;

/// 62-symbol alphabet: digits, lowercase, uppercase. Most significant
/// symbol first, no padding.
const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Multiplier of the affine permutation. Odd, hence coprime to 2^63,
/// hence the map is a bijection on `[0, 2^63)`.
const MULTIPLIER: u64 = 6364136223846793005;

/// Increment of the affine permutation.
const INCREMENT: u64 = 1442695040888963407;

/// Modular inverse of [`MULTIPLIER`]: `MULTIPLIER * MULTIPLIER_INVERSE ≡ 1 (mod 2^63)`.
const MULTIPLIER_INVERSE: u64 = 4654452103859546277;

/// Masking with this value reduces modulo 2^63. Exact after wrapping u64
/// arithmetic because 2^63 divides 2^64.
const SCRAMBLE_MASK: u64 = (1 << 63) - 1;

/// Errors produced by the code transform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("identifier must be non-negative, got {0}")]
    NegativeId(i64),
    #[error("invalid character {0:?} in short code")]
    InvalidCharacter(char),
}

/// Renders a value in base62, most significant symbol first.
///
/// Zero renders as `"0"`.
pub fn encode_base62(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE62_ALPHABET[(value % 62) as usize]);
        value /= 62;
    }
    digits.reverse();

    String::from_utf8(digits).expect("base62 alphabet is ASCII")
}

/// Parses a base62 string back to its numeric value.
///
/// The empty string decodes to `0`. This is deliberate, not a gap: `0` is
/// also what `encode_base62(0)` renders, and the pair defines the code for
/// identifier zero.
///
/// # Errors
///
/// Returns [`CodeError::InvalidCharacter`] for any symbol outside the
/// alphabet.
pub fn decode_base62(code: &str) -> Result<u64, CodeError> {
    let mut value: u64 = 0;

    for ch in code.chars() {
        let digit = base62_digit(ch).ok_or(CodeError::InvalidCharacter(ch))?;
        // Wrapping keeps the arithmetic modular; codes produced by
        // encode_base62 from a 63-bit value never overflow.
        value = value.wrapping_mul(62).wrapping_add(digit);
    }

    Ok(value)
}

fn base62_digit(ch: char) -> Option<u64> {
    match ch {
        '0'..='9' => Some(ch as u64 - '0' as u64),
        'a'..='z' => Some(10 + ch as u64 - 'a' as u64),
        'A'..='Z' => Some(36 + ch as u64 - 'A' as u64),
        _ => None,
    }
}

/// Derives the public short code for an alias identifier.
///
/// Applies `scrambled = (A * id + C) mod 2^63` and renders the result in
/// base62. Injective over `[0, 2^63)`.
///
/// # Errors
///
/// Returns [`CodeError::NegativeId`] for negative identifiers.
pub fn code_for_id(id: i64) -> Result<String, CodeError> {
    if id < 0 {
        return Err(CodeError::NegativeId(id));
    }

    let scrambled = MULTIPLIER
        .wrapping_mul(id as u64)
        .wrapping_add(INCREMENT)
        & SCRAMBLE_MASK;

    Ok(encode_base62(scrambled))
}

/// Recovers the alias identifier from a short code.
///
/// Inverse of [`code_for_id`]: `id = A⁻¹ * (scrambled - C) mod 2^63`.
///
/// # Errors
///
/// Returns [`CodeError::InvalidCharacter`] for symbols outside the base62
/// alphabet.
pub fn id_for_code(code: &str) -> Result<i64, CodeError> {
    let scrambled = decode_base62(code)?;

    let id = MULTIPLIER_INVERSE
        .wrapping_mul(scrambled.wrapping_sub(INCREMENT))
        & SCRAMBLE_MASK;

    // The mask keeps the value below 2^63, so the cast cannot wrap.
    Ok(id as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_62_unique_symbols() {
        let unique: std::collections::HashSet<_> = BASE62_ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_multiplier_inverse_is_correct() {
        let product = MULTIPLIER.wrapping_mul(MULTIPLIER_INVERSE) & SCRAMBLE_MASK;
        assert_eq!(product, 1);
    }

    #[test]
    fn test_encode_base62_zero() {
        assert_eq!(encode_base62(0), "0");
    }

    #[test]
    fn test_encode_base62_known_values() {
        assert_eq!(encode_base62(61), "Z");
        assert_eq!(encode_base62(62), "10");
        assert_eq!(encode_base62(3843), "ZZ");
    }

    #[test]
    fn test_decode_base62_empty_string_is_zero() {
        assert_eq!(decode_base62(""), Ok(0));
    }

    #[test]
    fn test_decode_base62_rejects_invalid_characters() {
        assert_eq!(decode_base62("abc!"), Err(CodeError::InvalidCharacter('!')));
        assert_eq!(decode_base62("-"), Err(CodeError::InvalidCharacter('-')));
        assert_eq!(decode_base62("a b"), Err(CodeError::InvalidCharacter(' ')));
    }

    #[test]
    fn test_base62_round_trip() {
        for value in [0u64, 1, 61, 62, 12345, u64::MAX >> 1] {
            assert_eq!(decode_base62(&encode_base62(value)), Ok(value));
        }
    }

    #[test]
    fn test_code_for_id_rejects_negative() {
        assert_eq!(code_for_id(-1), Err(CodeError::NegativeId(-1)));
        assert_eq!(code_for_id(i64::MIN), Err(CodeError::NegativeId(i64::MIN)));
    }

    #[test]
    fn test_code_for_id_known_fixtures() {
        // Pinned to the deployed constants; a change here invalidates
        // every issued code.
        assert_eq!(code_for_id(0).unwrap(), "1IzyDeodHmT");
        assert_eq!(code_for_id(1).unwrap(), "9iHmWlpjj5y");
        assert_eq!(code_for_id(42).unwrap(), "1uYwEJbC96V");
    }

    #[test]
    fn test_codes_do_not_reveal_creation_order() {
        let codes: Vec<String> = (0..5).map(|id| code_for_id(id).unwrap()).collect();
        for pair in codes.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        // Sequential ids must not produce lexicographically sequential codes.
        let mut sorted = codes.clone();
        sorted.sort();
        assert_ne!(codes, sorted);
    }

    #[test]
    fn test_transform_round_trip() {
        let ids = [
            0i64,
            1,
            2,
            61,
            62,
            1_000,
            1_000_000_000_000,
            i64::MAX - 1,
            i64::MAX,
        ];
        for id in ids {
            let code = code_for_id(id).unwrap();
            assert_eq!(id_for_code(&code).unwrap(), id, "round trip for id {id}");
        }
    }

    #[test]
    fn test_transform_injective_on_sample() {
        let mut seen = std::collections::HashSet::new();
        for id in 0..10_000i64 {
            assert!(seen.insert(code_for_id(id).unwrap()), "collision at id {id}");
        }
    }
}
