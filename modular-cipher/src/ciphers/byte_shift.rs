//! Byte shift cipher over `Z_n`
//!
//! 1. E_k(x) = (x + k) mod n
//! 2. D_k(x) = (x + n - k) mod n
//!
//! No alphabet awareness: every symbol is moved uniformly.

use crate::{cipher::SubstitutionCipher, error::Result, modulus::Modulus, utils};

/// Additive cipher over the symbol range `0..n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteShiftCipher {
    key: u64,
    modulus: Modulus,
}

impl ByteShiftCipher {
    /// Create a cipher; `key` is normalized to `key mod n`
    pub fn new(key: u64, modulus: Modulus) -> Self {
        Self {
            key: modulus.reduce(key),
            modulus,
        }
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    fn shift(&self, data: &[u8], by: u64) -> Result<Vec<u8>> {
        self.modulus.check_byte_data(data)?;
        let n = self.modulus.value();
        Ok(data
            .iter()
            .map(|&b| utils::add_mod(u64::from(b), by, n) as u8)
            .collect())
    }
}

impl SubstitutionCipher for ByteShiftCipher {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.shift(plaintext, self.key)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let inverse = utils::neg_mod(self.key, self.modulus.value());
        self.shift(ciphertext, inverse)
    }

    fn name(&self) -> &'static str {
        "Byte Caesar"
    }
}

/// Encrypt bytes with the byte shift cipher
///
/// # Example
///
/// ```rust
/// use modular_cipher::byte_shift;
///
/// assert_eq!(byte_shift::encrypt(b"cryptography", 3, 256)?, b"fu|swrjudsk|");
/// # Ok::<(), modular_cipher::CipherError>(())
/// ```
pub fn encrypt(data: &[u8], key: u64, n: u64) -> Result<Vec<u8>> {
    ByteShiftCipher::new(key, Modulus::new(n)?).encrypt(data)
}

/// Decrypt bytes with the byte shift cipher
pub fn decrypt(data: &[u8], key: u64, n: u64) -> Result<Vec<u8>> {
    ByteShiftCipher::new(key, Modulus::new(n)?).decrypt(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CipherError;

    #[test]
    fn test_byte_shift_known_vector() {
        let encrypted = encrypt(b"cryptography", 3, 256).unwrap();
        assert_eq!(encrypted, b"fu|swrjudsk|");
        assert_eq!(decrypt(&encrypted, 3, 256).unwrap(), b"cryptography");
    }

    #[test]
    fn test_byte_shift_wraps_at_modulus() {
        assert_eq!(encrypt(&[254, 255, 0], 3, 256).unwrap(), vec![1, 2, 3]);
        assert_eq!(decrypt(&[1, 2, 3], 3, 256).unwrap(), vec![254, 255, 0]);
        assert_eq!(encrypt(&[25], 1, 26).unwrap(), vec![0]);
    }

    #[test]
    fn test_byte_shift_key_normalized() {
        let data = b"normalize me";
        assert_eq!(
            encrypt(data, 259, 256).unwrap(),
            encrypt(data, 3, 256).unwrap()
        );
        let big = u64::MAX;
        assert_eq!(decrypt(&encrypt(data, big, 256).unwrap(), big, 256).unwrap(), data);
    }

    #[test]
    fn test_byte_shift_modulus_rejected() {
        assert_eq!(encrypt(b"abc", 3, 0), Err(CipherError::InvalidModulus(0)));
        assert_eq!(decrypt(b"abc", 3, 0), Err(CipherError::InvalidModulus(0)));
        assert_eq!(encrypt(b"abc", 3, 300), Err(CipherError::ByteRangeExceeded(300)));
    }

    #[test]
    fn test_byte_shift_symbol_out_of_range() {
        assert_eq!(
            encrypt(b"abc", 3, 26),
            Err(CipherError::SymbolOutOfRange { symbol: b'a', modulus: 26 })
        );
    }

    #[test]
    fn test_byte_shift_modulus_one() {
        // Z_1 only holds 0
        assert_eq!(encrypt(&[0, 0], 7, 1).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_byte_shift_accessors() {
        let cipher = ByteShiftCipher::new(300, Modulus::BYTE);
        assert_eq!(cipher.key(), 44);
        assert_eq!(cipher.modulus(), Modulus::BYTE);
        assert_eq!(cipher.name(), "Byte Caesar");
    }
}
