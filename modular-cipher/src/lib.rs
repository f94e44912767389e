//! # Modular Cipher Library
//!
//! Classical substitution ciphers built on arithmetic in `Z_n`.
//!
//! ## Supported Ciphers
//!
//! - **Caesar** - shifts ASCII letters within their case, everything else is kept
//! - **Byte Caesar** - shifts every symbol mod `n` (usually 256)
//! - **Improved Caesar** - multiplies every symbol by one half of a modular
//!   inverse key pair `(ke, kd)` with `ke * kd = 1 mod n`
//!
//! None of these offer any real security. They exist to demonstrate the
//! modular arithmetic behind substitution ciphers.
//!
//! ## Usage
//!
//! ```rust
//! use modular_cipher::{AffineCipher, AffineKeyPair, Modulus, SubstitutionCipher};
//!
//! let keys = AffineKeyPair::generate(Modulus::BYTE)?;
//! let cipher = AffineCipher::new(keys);
//!
//! let encrypted = cipher.encrypt(b"cryptography")?;
//! let decrypted = cipher.decrypt(&encrypted)?;
//! assert_eq!(decrypted, b"cryptography");
//! # Ok::<(), modular_cipher::CipherError>(())
//! ```

pub mod analysis;
pub mod cipher;
pub mod ciphers;
pub mod error;
pub mod modulus;
pub mod utils;

pub use cipher::SubstitutionCipher;
pub use ciphers::{
    affine::{self},
    byte_shift::{self},
    shift::{self},
    AffineCipher, AffineKeyPair, ByteShiftCipher, ShiftCipher,
};
pub use error::{CipherError, Result};
pub use modulus::Modulus;
pub use utils::is_coprime;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Names of all ciphers in this crate
pub fn supported_ciphers() -> Vec<&'static str> {
    vec!["Caesar", "Byte Caesar", "Improved Caesar"]
}
