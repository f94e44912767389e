//! Frequency analysis against the letter shift cipher
//!
//! Every candidate shift `0..26` is scored with a chi-squared test between
//! the observed letter counts and a reference distribution; the shift with
//! the lowest score is the most likely key.

use log::debug;

use crate::ciphers::shift;

/// English letter frequencies, A to Z
const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.0817, 0.0149, 0.0278, 0.0425, 0.1270, 0.0223, 0.0202, 0.0609,
    0.0697, 0.0015, 0.0077, 0.0403, 0.0241, 0.0675, 0.0751, 0.0193,
    0.0010, 0.0599, 0.0633, 0.0906, 0.0276, 0.0098, 0.0236, 0.0015,
    0.0197, 0.0007,
];

/// German letter frequencies, A to Z
const GERMAN_FREQUENCIES: [f64; 26] = [
    0.0558, 0.0196, 0.0316, 0.0498, 0.1693, 0.0149, 0.0302, 0.0498,
    0.0802, 0.0024, 0.0132, 0.0360, 0.0255, 0.1053, 0.0224, 0.0067,
    0.0002, 0.0689, 0.0642, 0.0579, 0.0383, 0.0084, 0.0178, 0.0005,
    0.0005, 0.0121,
];

/// Reference language for the expected letter distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    pub fn frequencies(self) -> &'static [f64; 26] {
        match self {
            Language::English => &ENGLISH_FREQUENCIES,
            Language::German => &GERMAN_FREQUENCIES,
        }
    }
}

/// Counts the frequency of each letter, case-insensitive
///
/// # Arguments
///
/// * `content` - The input text to analyze.
///
/// # Returns
///
/// An array of 26 counts for letters A-Z.
pub fn count_frequencies(content: &str) -> [u32; 26] {
    let mut frequencies: [u32; 26] = [0; 26];

    for c in content.chars().filter(|c| c.is_ascii_alphabetic()) {
        let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
        frequencies[index] += 1;
    }

    frequencies
}

/// Chi-squared distance between the counts and the reference distribution
/// after undoing a shift of `shift`
///
/// Counts without any letters score `f64::INFINITY`.
pub fn chi_squared(frequencies: &[u32; 26], shift: u8, language: Language) -> f64 {
    let total: u32 = frequencies.iter().sum();
    if total == 0 {
        return f64::INFINITY;
    }
    let total = f64::from(total);
    let shift = usize::from(shift % 26);

    language
        .frequencies()
        .iter()
        .enumerate()
        .filter(|&(_, &p)| p > 0.0)
        .map(|(i, &p)| {
            let observed = f64::from(frequencies[(i + shift) % 26]);
            let expected = p * total;
            (observed - expected).powi(2) / expected
        })
        .sum()
}

/// Most likely shift key for `ciphertext`, or `None` without any letters
pub fn find_best_key(ciphertext: &str, language: Language) -> Option<u8> {
    let frequencies = count_frequencies(ciphertext);
    if frequencies.iter().all(|&count| count == 0) {
        return None;
    }

    let (key, score) = (0..26u8)
        .map(|shift| (shift, chi_squared(&frequencies, shift, language)))
        .min_by(|a, b| a.1.total_cmp(&b.1))?;

    debug!("Best shift {} with chi-squared {:.3}", key, score);
    Some(key)
}

/// Recover key and plaintext of a letter shift ciphertext
///
/// # Example
///
/// ```rust
/// use modular_cipher::{analysis::{crack, Language}, shift};
///
/// let text = "It was the best of times, it was the worst of times, \
///     it was the age of wisdom, it was the age of foolishness";
/// let (key, plain) = crack(&shift::encrypt(text, 11), Language::English).unwrap();
/// assert_eq!(key, 11);
/// assert_eq!(plain, text);
/// ```
pub fn crack(ciphertext: &str, language: Language) -> Option<(u8, String)> {
    let key = find_best_key(ciphertext, language)?;
    Some((key, shift::decrypt(ciphertext, u64::from(key))))
}
