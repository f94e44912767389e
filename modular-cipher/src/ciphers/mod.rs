//! Cipher implementations

pub mod affine;
pub mod byte_shift;
pub mod shift;

pub use affine::{AffineCipher, AffineKeyPair};
pub use byte_shift::ByteShiftCipher;
pub use shift::ShiftCipher;
