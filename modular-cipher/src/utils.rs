//! Modular arithmetic helpers shared by the ciphers

use crate::error::Result;

/// Greatest common divisor (Euclid)
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Check whether `x` and `y` share no divisor greater than 1
///
/// # Example
///
/// ```rust
/// use modular_cipher::utils::is_coprime;
///
/// assert!(is_coprime(3, 256));
/// assert!(!is_coprime(6, 256));
/// ```
pub fn is_coprime(x: u64, y: u64) -> bool {
    gcd(x, y) == 1
}

/// `(a + b) mod n` for any `n > 0`
pub fn add_mod(a: u64, b: u64, n: u64) -> u64 {
    ((u128::from(a % n) + u128::from(b % n)) % u128::from(n)) as u64
}

/// `(a * b) mod n` for any `n > 0`
pub fn mul_mod(a: u64, b: u64, n: u64) -> u64 {
    (u128::from(a) * u128::from(b) % u128::from(n)) as u64
}

/// Additive inverse of `k` in `Z_n`
pub fn neg_mod(k: u64, n: u64) -> u64 {
    (n - k % n) % n
}

/// Encode bytes as lowercase hex
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode hex, ignoring whitespace and line breaks
pub fn from_hex(input: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let compact: Vec<u8> = input
        .as_ref()
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    Ok(hex::decode(compact)?)
}

/// Decode raw input bytes, either verbatim or as hex text
pub fn decode_input(raw: Vec<u8>, is_hex: bool) -> Result<Vec<u8>> {
    if is_hex {
        from_hex(raw)
    } else {
        Ok(raw)
    }
}

/// Render bytes for a terminal: hex, or lossy UTF-8 text
pub fn render_bytes(data: &[u8], as_hex: bool) -> String {
    if as_hex {
        to_hex(data)
    } else {
        String::from_utf8_lossy(data).into_owned()
    }
}
