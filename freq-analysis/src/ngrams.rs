//! Quadgram and trigram log-probability models
//!
//! Counts come from English prose and ship with the crate as `GRAM COUNT`
//! lines. Each model is expanded once into a dense table indexed by the
//! base-26 value of the gram, so scoring is a single lookup per window.

use lazy_static::lazy_static;
use tracing::debug;

use crate::frequencies::letter_index;

/// Log-probability assigned to grams that never appeared in the corpus.
pub const FLOOR: f64 = -11.0; // log10(0.01 / 1e9)

const QUADGRAM_DATA: &str = include_str!("../data/english_quadgrams.txt");
const TRIGRAM_DATA: &str = include_str!("../data/english_trigrams.txt");

lazy_static! {
    pub static ref QUADGRAMS: NgramModel = NgramModel::parse(4, QUADGRAM_DATA);
    pub static ref TRIGRAMS: NgramModel = NgramModel::parse(3, TRIGRAM_DATA);
}

/// Log10 probabilities for every gram of a fixed length.
pub struct NgramModel {
    n: usize,
    table: Vec<f64>,
    known: usize,
}

impl NgramModel {
    /// Builds a model from `GRAM COUNT` lines.
    ///
    /// Lines that are not an `n`-letter gram followed by a count are skipped.
    pub fn parse(n: usize, data: &str) -> Self {
        let entries: Vec<(usize, u64)> = data
            .lines()
            .filter_map(|line| {
                let mut parts = line.split_whitespace();
                let gram = parts.next()?;
                let count = parts.next()?.parse::<u64>().ok()?;
                let index = gram_index(gram, n)?;
                Some((index, count))
            })
            .collect();

        let total: u64 = entries.iter().map(|&(_, count)| count).sum();
        let mut table = vec![FLOOR; 26usize.pow(n as u32)];
        for &(index, count) in &entries {
            if count > 0 {
                table[index] = (count as f64 / total as f64).log10();
            }
        }

        debug!(n, grams = entries.len(), total, "loaded n-gram model");
        NgramModel {
            n,
            table,
            known: entries.len(),
        }
    }

    /// Gram length.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of grams with a corpus count.
    pub fn known_grams(&self) -> usize {
        self.known
    }

    /// Log-probability of a single gram; [`FLOOR`] when unseen or malformed.
    pub fn log_prob(&self, gram: &str) -> f64 {
        gram_index(gram, self.n).map_or(FLOOR, |i| self.table[i])
    }

    /// Sums the log-probabilities of every overlapping window of letter
    /// indices (values 0-25).
    pub fn score_indices(&self, letters: &[u8]) -> f64 {
        letters
            .windows(self.n)
            .map(|w| {
                let index = w.iter().fold(0usize, |acc, &l| acc * 26 + l as usize);
                self.table[index]
            })
            .sum()
    }

    /// Scores the ASCII letters of `text`, ignoring everything else.
    pub fn score(&self, text: &str) -> f64 {
        let letters: Vec<u8> = text.chars().filter_map(letter_index).collect();
        self.score_indices(&letters)
    }
}

fn gram_index(gram: &str, n: usize) -> Option<usize> {
    if gram.len() != n {
        return None;
    }
    gram.chars()
        .try_fold(0usize, |acc, c| Some(acc * 26 + letter_index(c)? as usize))
}
