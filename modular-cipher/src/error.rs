//! Error types for modular cipher operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CipherError {
    #[error("Invalid modulus {0} (must be positive)")]
    InvalidModulus(u64),

    #[error("No key pair (ke, kd) with ke * kd = 1 mod {0} found")]
    KeyPairNotFound(u64),

    #[error("Invalid key pair ({encrypt}, {decrypt}): not inverse to each other mod {modulus}")]
    InvalidKeyPair {
        encrypt: u64,
        decrypt: u64,
        modulus: u64,
    },

    #[error("Symbol {symbol} is out of range for modulus {modulus}")]
    SymbolOutOfRange { symbol: u8, modulus: u64 },

    #[error("Modulus {0} exceeds the byte range (at most 256)")]
    ByteRangeExceeded(u64),

    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_modulus() {
        let err = CipherError::InvalidModulus(0);
        assert_eq!(err.to_string(), "Invalid modulus 0 (must be positive)");
    }

    #[test]
    fn test_display_invalid_key_pair() {
        let err = CipherError::InvalidKeyPair { encrypt: 3, decrypt: 5, modulus: 256 };
        assert_eq!(
            err.to_string(),
            "Invalid key pair (3, 5): not inverse to each other mod 256"
        );
    }

    #[test]
    fn test_display_byte_range_exceeded() {
        let err = CipherError::ByteRangeExceeded(1000);
        assert_eq!(err.to_string(), "Modulus 1000 exceeds the byte range (at most 256)");
    }

    #[test]
    fn test_display_symbol_out_of_range() {
        let err = CipherError::SymbolOutOfRange { symbol: 200, modulus: 26 };
        assert_eq!(err.to_string(), "Symbol 200 is out of range for modulus 26");
    }
}
