//! Key recovery

use freq_analysis::{
    chi_squared_score, count_frequencies, count_indices, letter_index, AnalysisError, Result,
};
use tracing::{debug, info};

use crate::cipher::apply_shifts;
use crate::key_length::{candidate_lengths, split_text_by_key_length};

/// Tuning for [`break_with_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct BreakConfig {
    /// Longest key length tried by the IC scan.
    pub max_ic_length: usize,
    /// Average column IC above which a length becomes a candidate.
    pub ic_threshold: f64,
    /// Shortest repeated substring considered by Kasiski examination.
    pub kasiski_min: usize,
    /// Longest repeated substring considered by Kasiski examination.
    pub kasiski_max: usize,
    /// Kasiski GCDs must be below this.
    pub gcd_ceiling: usize,
    /// Lengths tried when neither estimator suggests any.
    pub fallback_lengths: Vec<usize>,
}

impl Default for BreakConfig {
    fn default() -> Self {
        BreakConfig {
            max_ic_length: 20,
            ic_threshold: 0.045,
            kasiski_min: 3,
            kasiski_max: 5,
            gcd_ceiling: 30,
            fallback_lengths: vec![3, 4, 5, 6, 7, 8],
        }
    }
}

/// A recovered key and the text it decrypts to.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakResult {
    pub key: String,
    pub plaintext: String,
    /// Chi-squared fit of the plaintext letters to English (higher is better).
    pub score: f64,
}

/// The Caesar shift that makes `column` look most like English.
///
/// Ties go to the smaller shift; an empty column gives 0.
pub fn best_shift(column: &[u8]) -> u8 {
    let counts = count_indices(column.iter().copied());
    let mut best_shift = 0u8;
    let mut best_score = f64::NEG_INFINITY;

    for shift in 0..26u8 {
        // Undoing `shift` moves ciphertext letter `i + shift` to plaintext `i`.
        let shifted: [usize; 26] = core::array::from_fn(|i| counts[(i + shift as usize) % 26]);
        let score = chi_squared_score(&shifted);
        if score > best_score {
            best_score = score;
            best_shift = shift;
        }
    }

    best_shift
}

/// Breaks `ciphertext` with the default configuration.
pub fn break_vigenere(ciphertext: &str, on_progress: impl FnMut(f64)) -> Result<BreakResult> {
    break_with_config(ciphertext, &BreakConfig::default(), on_progress)
}

/// Recovers the key of a Vigenère ciphertext.
///
/// Every candidate length is tried in ascending order: each column gets its
/// best Caesar shift, the whole text is decrypted (case and punctuation
/// kept), and the decryption whose letters best fit English wins. A later
/// length must score strictly better to replace an earlier one, so a key
/// and its repetitions resolve to the shortest form.
pub fn break_with_config(
    ciphertext: &str,
    config: &BreakConfig,
    mut on_progress: impl FnMut(f64),
) -> Result<BreakResult> {
    let letters: Vec<u8> = ciphertext.chars().filter_map(letter_index).collect();
    if letters.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let lengths = candidate_lengths(&letters, config);
    debug!(?lengths, "candidate key lengths");

    let mut best: Option<BreakResult> = None;
    for (idx, &length) in lengths.iter().enumerate() {
        let shifts: Vec<u8> = split_text_by_key_length(&letters, length)
            .iter()
            .map(|column| best_shift(column))
            .collect();
        let key: String = shifts.iter().map(|&s| (b'A' + s) as char).collect();

        let plaintext = apply_shifts(ciphertext, &shifts, false);
        let score = chi_squared_score(&count_frequencies(&plaintext));
        debug!(length, %key, score, "key candidate");

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(BreakResult {
                key,
                plaintext,
                score,
            });
        }

        on_progress((idx + 1) as f64 / lengths.len() as f64);
    }

    let best = best.ok_or(AnalysisError::EmptyInput)?;
    info!(key = %best.key, score = best.score, "vigenere key recovered");
    Ok(best)
}
