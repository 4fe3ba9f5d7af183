//! Plaintext scoring
//!
//! `score = quadgrams + 0.4 * trigrams + 0.1 * common-word ratio`, with the
//! n-gram terms summed over the letters-only text.

use freq_analysis::{common_word_ratio, COMMON_WORDS, QUADGRAMS, TRIGRAMS};

use crate::key::Key;

pub const QUADGRAM_WEIGHT: f64 = 1.0;
pub const TRIGRAM_WEIGHT: f64 = 0.4;
pub const WORD_WEIGHT: f64 = 0.1;

// Longest entry in the common word list.
const MAX_WORD_LEN: usize = 7;

/// Scores upper-case candidate plaintext; higher is more English-like.
pub fn score_plaintext(text: &str) -> f64 {
    QUADGRAM_WEIGHT * QUADGRAMS.score(text)
        + TRIGRAM_WEIGHT * TRIGRAMS.score(text)
        + WORD_WEIGHT * common_word_ratio(text)
}

/// Ciphertext pre-digested for repeated scoring under different keys.
///
/// Scoring a key this way gives the same value as decrypting with it and
/// calling [`score_plaintext`], without building the string.
pub struct Prepared {
    text: String,
    letters: Vec<u8>,
    words: Vec<Vec<u8>>,
    tokens: usize,
    plain: Vec<u8>,
}

impl Prepared {
    /// Upper-cases `ciphertext` and indexes its letters and words.
    pub fn new(ciphertext: &str) -> Self {
        let text = ciphertext.to_uppercase();
        let letters: Vec<u8> = text
            .bytes()
            .filter(u8::is_ascii_uppercase)
            .map(|b| b - b'A')
            .collect();

        let mut tokens = 0;
        let mut words = Vec::new();
        for token in text.split_whitespace() {
            tokens += 1;
            let core = token.trim_matches(|c: char| !c.is_ascii_uppercase());
            // Only pure A-Z words of plausible length can ever match.
            if !core.is_empty()
                && core.len() <= MAX_WORD_LEN
                && core.bytes().all(|b| b.is_ascii_uppercase())
            {
                words.push(core.bytes().map(|b| b - b'A').collect());
            }
        }

        Prepared {
            plain: Vec::with_capacity(letters.len()),
            text,
            letters,
            words,
            tokens,
        }
    }

    /// The upper-cased ciphertext.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Ciphertext letters as indices 0-25.
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Scores the plaintext that `key` would produce.
    pub fn score(&mut self, key: &Key) -> f64 {
        self.plain.clear();
        self.plain.extend(self.letters.iter().map(|&c| key.plain(c)));
        let ngrams = QUADGRAM_WEIGHT * QUADGRAMS.score_indices(&self.plain)
            + TRIGRAM_WEIGHT * TRIGRAMS.score_indices(&self.plain);

        let mut buf = [0u8; MAX_WORD_LEN];
        let hits = self
            .words
            .iter()
            .filter(|word| {
                for (slot, &c) in buf.iter_mut().zip(word.iter()) {
                    *slot = b'A' + key.plain(c);
                }
                std::str::from_utf8(&buf[..word.len()])
                    .map(|w| COMMON_WORDS.contains(w))
                    .unwrap_or(false)
            })
            .count();
        let ratio = hits as f64 / self.tokens.max(1) as f64;

        ngrams + WORD_WEIGHT * ratio
    }

    /// Decrypts the prepared text with `key`.
    pub fn decrypt(&self, key: &Key) -> String {
        key.apply(&self.text)
    }
}
