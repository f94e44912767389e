//! Generic substitution cipher trait

use crate::error::Result;

/// Trait for a keyed, length preserving substitution cipher
pub trait SubstitutionCipher {
    /// Encrypts a whole message
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a whole message
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Human readable cipher name
    fn name(&self) -> &'static str;
}
