//! Size of the symbol space a cipher works over

use std::fmt;

use crate::error::{CipherError, Result};

/// Modulus `n` of the ring `Z_n`.
///
/// Any positive `n` is a valid modulus, so key pairs can be searched for
/// arbitrary rings. The byte transforms additionally need every symbol of
/// `Z_n` to fit into a byte, which limits them to `n <= 256`
/// (see [`Modulus::check_byte_data`]).
///
/// # Example
///
/// ```rust
/// use modular_cipher::Modulus;
///
/// let n = Modulus::new(26)?;
/// assert_eq!(n.value(), 26);
/// assert_eq!(n.reduce(29), 3);
/// assert!(Modulus::new(0).is_err());
/// assert!(!Modulus::new(1000)?.fits_byte());
/// # Ok::<(), modular_cipher::CipherError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Modulus(u64);

impl Modulus {
    /// Full byte range, the classic choice for byte-oriented Caesar variants
    pub const BYTE: Modulus = Modulus(256);

    /// Latin alphabet
    pub const ALPHABET: Modulus = Modulus(26);

    /// Create a modulus, rejecting `0`
    pub fn new(n: u64) -> Result<Self> {
        if n == 0 {
            return Err(CipherError::InvalidModulus(n));
        }
        Ok(Self(n))
    }

    /// Numeric value of `n`
    pub fn value(self) -> u64 {
        self.0
    }

    /// `k mod n`
    pub fn reduce(self, k: u64) -> u64 {
        k % self.0
    }

    /// Whether every element of `Z_n` can be stored in a byte
    pub fn fits_byte(self) -> bool {
        self.0 <= Self::BYTE.0
    }

    /// Whether `symbol` is an element of `Z_n`
    pub fn contains(self, symbol: u8) -> bool {
        u64::from(symbol) < self.0
    }

    /// Ensure `n <= 256` and every symbol of `data` lies in `Z_n`
    pub fn check_byte_data(self, data: &[u8]) -> Result<()> {
        if !self.fits_byte() {
            return Err(CipherError::ByteRangeExceeded(self.0));
        }
        match data.iter().find(|&&symbol| !self.contains(symbol)) {
            Some(&symbol) => Err(CipherError::SymbolOutOfRange {
                symbol,
                modulus: self.0,
            }),
            None => Ok(()),
        }
    }
}

impl Default for Modulus {
    fn default() -> Self {
        Self::BYTE
    }
}

impl TryFrom<u64> for Modulus {
    type Error = CipherError;

    fn try_from(n: u64) -> Result<Self> {
        Self::new(n)
    }
}

impl From<Modulus> for u64 {
    fn from(modulus: Modulus) -> Self {
        modulus.0
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
