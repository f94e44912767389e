//! Multiplicative ("improved Caesar") cipher with modular inverse key pairs
//!
//! 1. E_ke(x) = (x * ke) mod n
//! 2. D_kd(x) = (x * kd) mod n
//!
//! Constraints on the key pair:
//!
//! 1. ke and n are coprime
//! 2. kd and n are coprime
//! 3. (ke * kd) mod n = 1
//!
//! Decryption only undoes encryption when all three hold, so the ciphers
//! here take an [`AffineKeyPair`], which can only be built by the key
//! search or by the validating constructor.

use std::fmt;

use log::{debug, trace};

use crate::{
    cipher::SubstitutionCipher,
    error::{CipherError, Result},
    modulus::Modulus,
    utils,
};

/// A verified pair `(ke, kd)` with `ke * kd = 1 mod n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineKeyPair {
    encrypt: u64,
    decrypt: u64,
    modulus: Modulus,
}

impl AffineKeyPair {
    /// Search the first valid key pair for `modulus`
    ///
    /// The outer loop runs `ke` over `1..n`, the inner loop `kd` over
    /// `2..n`; the first match in that order wins. `kd = 1` is never tried,
    /// so the trivial pair `(1, 1)` is never returned.
    ///
    /// Any positive modulus is searched; only the byte transforms restrict
    /// `n` to at most 256.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modular_cipher::{AffineKeyPair, Modulus};
    ///
    /// let keys = AffineKeyPair::generate(Modulus::BYTE)?;
    /// assert_eq!((keys.encrypt_key(), keys.decrypt_key()), (3, 171));
    /// # Ok::<(), modular_cipher::CipherError>(())
    /// ```
    pub fn generate(modulus: Modulus) -> Result<Self> {
        let keys = Self::candidates(modulus)
            .next()
            .ok_or(CipherError::KeyPairNotFound(modulus.value()))?;
        debug!("Generated key pair {}", keys);
        Ok(keys)
    }

    /// All valid key pairs for `modulus`, in search order
    pub fn candidates(modulus: Modulus) -> impl Iterator<Item = AffineKeyPair> {
        let n = u64::from(modulus);
        (1..n).flat_map(move |i| {
            (2..n).filter_map(move |j| {
                if utils::mul_mod(i, j, n) == 1 && utils::is_coprime(i, n) && utils::is_coprime(j, n) {
                    trace!("Candidate key pair ({}, {}) mod {}", i, j, n);
                    Some(AffineKeyPair {
                        encrypt: i,
                        decrypt: j,
                        modulus,
                    })
                } else {
                    None
                }
            })
        })
    }

    /// Validate a caller supplied key pair
    ///
    /// Both keys must lie in `1..n` and be inverse to each other mod `n`.
    pub fn new(encrypt: u64, decrypt: u64, modulus: Modulus) -> Result<Self> {
        let n = u64::from(modulus);
        let in_range = |k: u64| (1..n).contains(&k);

        if !in_range(encrypt) || !in_range(decrypt) || utils::mul_mod(encrypt, decrypt, n) != 1 {
            return Err(CipherError::InvalidKeyPair {
                encrypt,
                decrypt,
                modulus: modulus.value(),
            });
        }

        Ok(Self {
            encrypt,
            decrypt,
            modulus,
        })
    }

    pub fn encrypt_key(&self) -> u64 {
        self.encrypt
    }

    pub fn decrypt_key(&self) -> u64 {
        self.decrypt
    }

    pub fn modulus(&self) -> Modulus {
        self.modulus
    }
}

impl fmt::Display for AffineKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ke={}, kd={}) mod {}", self.encrypt, self.decrypt, self.modulus)
    }
}

/// Multiplicative cipher driven by a verified key pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineCipher {
    keys: AffineKeyPair,
}

impl AffineCipher {
    pub fn new(keys: AffineKeyPair) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> AffineKeyPair {
        self.keys
    }

    fn multiply(&self, data: &[u8], factor: u64) -> Result<Vec<u8>> {
        let modulus = self.keys.modulus;
        modulus.check_byte_data(data)?;
        let n = modulus.value();
        Ok(data
            .iter()
            .map(|&b| utils::mul_mod(u64::from(b), factor, n) as u8)
            .collect())
    }
}

impl SubstitutionCipher for AffineCipher {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.multiply(plaintext, self.keys.encrypt)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.multiply(ciphertext, self.keys.decrypt)
    }

    fn name(&self) -> &'static str {
        "Improved Caesar"
    }
}

impl From<AffineKeyPair> for AffineCipher {
    fn from(keys: AffineKeyPair) -> Self {
        Self::new(keys)
    }
}

/// Find the first key pair for modulus `n`
pub fn generate_key_pair(n: u64) -> Result<AffineKeyPair> {
    AffineKeyPair::generate(Modulus::new(n)?)
}

/// Encrypt bytes with the encryption half of `keys`
pub fn encrypt(data: &[u8], keys: &AffineKeyPair) -> Result<Vec<u8>> {
    AffineCipher::new(*keys).encrypt(data)
}

/// Decrypt bytes with the decryption half of `keys`
pub fn decrypt(data: &[u8], keys: &AffineKeyPair) -> Result<Vec<u8>> {
    AffineCipher::new(*keys).decrypt(data)
}
