//! Substitution keys

use std::fmt;
use std::str::FromStr;

use freq_analysis::{rank_letters, AnalysisError, Result, EN_ORDER};
use rand::seq::SliceRandom;
use rand::Rng;

/// A permutation of A-Z.
///
/// Position `i` holds the plaintext letter for ciphertext letter `i`, so the
/// key string `"QWERTY..."` decrypts `A` to `Q`, `B` to `W` and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key([u8; 26]);

impl Key {
    /// The key that leaves every letter in place.
    pub fn identity() -> Self {
        Key(core::array::from_fn(|i| i as u8))
    }

    /// A uniformly random key.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut key = Self::identity();
        key.0.shuffle(rng);
        key
    }

    /// Guesses a key by matching letter frequencies: the most common
    /// ciphertext letter maps to `E`, the next to `T`, and so on down
    /// [`EN_ORDER`].
    pub fn from_frequencies(counts: &[usize; 26]) -> Self {
        let mut key = [0u8; 26];
        for (cipher, plain) in rank_letters(counts).iter().zip(EN_ORDER.bytes()) {
            key[*cipher as usize] = plain - b'A';
        }
        Key(key)
    }

    /// The key string read backwards.
    pub fn reversed(&self) -> Self {
        let mut key = self.0;
        key.reverse();
        Key(key)
    }

    /// The key that undoes this one.
    pub fn inverse(&self) -> Self {
        let mut inverse = [0u8; 26];
        for (cipher, &plain) in self.0.iter().enumerate() {
            inverse[plain as usize] = cipher as u8;
        }
        Key(inverse)
    }

    /// Plaintext letter index for a ciphertext letter index.
    #[inline]
    pub fn plain(&self, cipher: u8) -> u8 {
        self.0[cipher as usize]
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Maps upper-case text through the key.
    ///
    /// A-Z are substituted, other alphabetic characters become `?` and
    /// everything else passes through.
    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    (b'A' + self.plain(c as u8 - b'A')) as char
                } else if c.is_alphabetic() {
                    '?'
                } else {
                    c
                }
            })
            .collect()
    }
}

impl FromStr for Key {
    type Err = AnalysisError;

    /// Parses 26 distinct letters, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let letters: Vec<char> = s.trim().chars().collect();
        if letters.len() != 26 {
            return Err(AnalysisError::InvalidKey(format!(
                "expected 26 letters, got {}",
                letters.len()
            )));
        }

        let mut key = [0u8; 26];
        let mut seen = [false; 26];
        for (slot, c) in key.iter_mut().zip(letters) {
            if !c.is_ascii_alphabetic() {
                return Err(AnalysisError::InvalidKey(format!("'{c}' is not a letter")));
            }
            let idx = c.to_ascii_uppercase() as u8 - b'A';
            if seen[idx as usize] {
                return Err(AnalysisError::InvalidKey(format!(
                    "letter '{}' appears twice",
                    c.to_ascii_uppercase()
                )));
            }
            seen[idx as usize] = true;
            *slot = idx;
        }
        Ok(Key(key))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &plain in &self.0 {
            write!(f, "{}", (b'A' + plain) as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freq_analysis::count_frequencies;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const QWERTY: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

    fn is_permutation(key: &Key) -> bool {
        let mut seen = [false; 26];
        key.0.iter().for_each(|&p| seen[p as usize] = true);
        seen.iter().all(|&s| s)
    }

    #[test]
    fn test_parse_and_display() {
        let key: Key = QWERTY.to_lowercase().parse().unwrap();
        assert_eq!(key.to_string(), QWERTY);
        assert_eq!(key.apply("ABC"), "QWE");
    }

    #[test]
    fn test_invalid_keys() {
        assert!(matches!("ABC".parse::<Key>(), Err(AnalysisError::InvalidKey(_))));
        assert!(matches!(
            "AACDEFGHIJKLMNOPQRSTUVWXYZ".parse::<Key>(),
            Err(AnalysisError::InvalidKey(_))
        ));
        assert!(matches!(
            "ABCDEFGHIJKLMNOPQRSTUVWXY1".parse::<Key>(),
            Err(AnalysisError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_inverse() {
        let key: Key = QWERTY.parse().unwrap();
        let text = "HELLO, WORLD!";
        assert_eq!(key.inverse().apply(&key.apply(text)), text);
        assert_eq!(key.inverse().inverse(), key);
    }

    #[test]
    fn test_apply_marks_foreign_letters() {
        assert_eq!(Key::identity().apply("ÄB C-1"), "?B C-1");
    }

    #[test]
    fn test_frequency_key() {
        // X is most common, then Q, then K.
        let counts = count_frequencies("XXXXQQQK");
        let key = Key::from_frequencies(&counts);
        assert!(is_permutation(&key));
        assert_eq!(key.apply("XQK"), "ETA");
        assert!(is_permutation(&key.reversed()));
    }

    #[test]
    fn test_random_keys_are_permutations() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert!(is_permutation(&Key::random(&mut rng)));
        }
    }
}
