//! Letter shift (classic Caesar) cipher
//!
//! Every ASCII letter is moved `key` places within its own case range:
//!
//! 1. E_k(x) = (x - base + k) mod 26 + base
//! 2. D_k(x) = (x - base + 26 - k) mod 26 + base
//!
//! with `base = 'A'` for uppercase and `base = 'a'` for lowercase letters.
//! Anything that is not an ASCII letter is passed through unchanged.

use crate::{cipher::SubstitutionCipher, error::Result};

const ALPHABET_LEN: u8 = 26;

/// Caesar cipher over the 26 letter alphabet, case preserving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCipher {
    key: u8,
}

impl ShiftCipher {
    /// Create a cipher for `key`; the key is reduced mod 26
    pub fn new(key: u64) -> Self {
        Self {
            key: (key % u64::from(ALPHABET_LEN)) as u8,
        }
    }

    /// Effective shift in `0..26`
    pub fn key(&self) -> u8 {
        self.key
    }

    /// Encrypt a text, keeping non-letters as they are
    pub fn encrypt_str(&self, text: &str) -> String {
        text.chars().map(|c| shift_char(c, self.key)).collect()
    }

    /// Decrypt a text produced by [`ShiftCipher::encrypt_str`]
    pub fn decrypt_str(&self, text: &str) -> String {
        let inverse = (ALPHABET_LEN - self.key) % ALPHABET_LEN;
        text.chars().map(|c| shift_char(c, inverse)).collect()
    }
}

impl SubstitutionCipher for ShiftCipher {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        Ok(plaintext.iter().map(|&b| shift_byte(b, self.key)).collect())
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let inverse = (ALPHABET_LEN - self.key) % ALPHABET_LEN;
        Ok(ciphertext.iter().map(|&b| shift_byte(b, inverse)).collect())
    }

    fn name(&self) -> &'static str {
        "Caesar"
    }
}

/// Shift a single byte by `shift` (already reduced mod 26)
fn shift_byte(byte: u8, shift: u8) -> u8 {
    if !byte.is_ascii_alphabetic() {
        return byte;
    }
    let base = if byte.is_ascii_uppercase() { b'A' } else { b'a' };
    (byte - base + shift) % ALPHABET_LEN + base
}

fn shift_char(c: char, shift: u8) -> char {
    if c.is_ascii() {
        shift_byte(c as u8, shift) as char
    } else {
        c
    }
}

/// Encrypt `text` with the letter shift cipher
///
/// # Example
///
/// ```rust
/// use modular_cipher::shift;
///
/// assert_eq!(shift::encrypt("CRYptograpHY", 3), "FUBswrjudsKB");
/// ```
pub fn encrypt(text: &str, key: u64) -> String {
    ShiftCipher::new(key).encrypt_str(text)
}

/// Decrypt `text` with the letter shift cipher
pub fn decrypt(text: &str, key: u64) -> String {
    ShiftCipher::new(key).decrypt_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_known_vector() {
        assert_eq!(encrypt("CRYptograpHY", 3), "FUBswrjudsKB");
        assert_eq!(decrypt("FUBswrjudsKB", 3), "CRYptograpHY");
    }

    #[test]
    fn test_shift_wraps_around() {
        assert_eq!(encrypt("xyzXYZ", 3), "abcABC");
        assert_eq!(decrypt("abcABC", 3), "xyzXYZ");
    }

    #[test]
    fn test_shift_keeps_non_letters() {
        let text = "Hello, World! 123 ä";
        let encrypted = encrypt(text, 5);
        assert_eq!(encrypted, "Mjqqt, Btwqi! 123 ä");
        assert_eq!(decrypt(&encrypted, 5), text);
    }

    #[test]
    fn test_shift_large_keys() {
        // 29 = 3 mod 26
        assert_eq!(encrypt("CRYptograpHY", 29), "FUBswrjudsKB");
        assert_eq!(encrypt("abc", 26), "abc");

        let text = "TheQuickBrownFox";
        for key in [0, 1, 25, 26, 27, 1000, u64::MAX] {
            assert_eq!(decrypt(&encrypt(text, key), key), text, "key={}", key);
        }
    }

    #[test]
    fn test_shift_preserves_case() {
        let upper: String = ('A'..='Z').collect();
        let lower: String = ('a'..='z').collect();
        for key in 0..26 {
            assert!(encrypt(&upper, key).chars().all(|c| c.is_ascii_uppercase()));
            assert!(encrypt(&lower, key).chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_shift_bytes_match_str() {
        let cipher = ShiftCipher::new(7);
        let text = "Attack at dawn!";
        let encrypted = cipher.encrypt(text.as_bytes()).unwrap();
        assert_eq!(encrypted, cipher.encrypt_str(text).into_bytes());
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), text.as_bytes());
        assert_eq!(cipher.name(), "Caesar");
    }

    #[test]
    fn test_shift_empty() {
        assert_eq!(encrypt("", 3), "");
        assert_eq!(ShiftCipher::new(3).encrypt(b"").unwrap(), Vec::<u8>::new());
    }
}
