//! Caesar (additive) cipher and its brute-force attack
//!
//! Every ASCII letter is rotated within its case; all other characters pass
//! through untouched. Breaking the cipher tries all 26 shifts and keeps the
//! candidate that reads most like English.

use freq_analysis::{count_word_matches, AnalysisError, Result, SHIFT_WORDS};
use tracing::debug;

/// Shift used when the key does not start with a number.
pub const DEFAULT_SHIFT: u8 = 3;

/// One decryption attempt of a brute-force run.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub shift: u8,
    pub text: String,
    pub score: f64,
}

/// Parses a shift key into `0..26`.
///
/// The key must start (after optional whitespace) with an integer, which
/// may be signed and may be followed by anything. Negative shifts wrap, so
/// `"-1"` is 25. Keys without a leading integer give [`DEFAULT_SHIFT`].
pub fn parse_shift(key: &str) -> u8 {
    let key = key.trim_start();
    let (negative, digits) = match key.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, key.strip_prefix('+').unwrap_or(key)),
    };

    let digits: Vec<u32> = digits.chars().map_while(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return DEFAULT_SHIFT;
    }

    let magnitude = digits.iter().fold(0u32, |acc, &d| (acc * 10 + d) % 26);
    let shift = if negative {
        (26 - magnitude) % 26
    } else {
        magnitude
    };
    shift as u8
}

/// Rotates every ASCII letter forward by `shift` positions.
///
/// # Arguments
///
/// * `text` - The input text.
/// * `shift` - Rotation amount; values of 26 and above wrap.
///
/// # Returns
///
/// A `String` with letters rotated and everything else unchanged.
pub fn shift_text(text: &str, shift: u8) -> String {
    let shift = shift % 26;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                ((c as u8 - base + shift) % 26 + base) as char
            } else {
                c
            }
        })
        .collect()
}

/// Encrypts `text` with the shift parsed from `shift_key`.
pub fn encrypt(text: &str, shift_key: &str) -> String {
    shift_text(text, parse_shift(shift_key))
}

/// Decrypts `text` with the shift parsed from `shift_key`.
pub fn decrypt(text: &str, shift_key: &str) -> String {
    shift_text(text, (26 - parse_shift(shift_key)) % 26)
}

/// Scores how English-like `text` is.
///
/// Ten points per whole-word hit from [`SHIFT_WORDS`], plus up to 100 points
/// for the share of characters that are ASCII letters.
pub fn score_english(text: &str) -> f64 {
    let hits = count_word_matches(text, &SHIFT_WORDS);

    let total = text.chars().count();
    let letters = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
    let alpha_ratio = if total == 0 {
        0.0
    } else {
        letters as f64 / total as f64
    };

    hits as f64 * 10.0 + alpha_ratio * 100.0
}

/// Decrypts `ciphertext` under all 26 shifts, best candidate first.
///
/// Candidates with equal scores stay in shift order.
pub fn rank_shifts(ciphertext: &str) -> Result<Vec<Candidate>> {
    if ciphertext.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut candidates: Vec<Candidate> = (0..26u8)
        .map(|shift| {
            let text = shift_text(ciphertext, (26 - shift) % 26);
            let score = score_english(&text);
            Candidate { shift, text, score }
        })
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(candidates)
}

/// Recovers the most likely shift and plaintext.
///
/// Ties resolve to the lowest shift.
pub fn brute_force(ciphertext: &str) -> Result<Candidate> {
    let best = rank_shifts(ciphertext)?
        .into_iter()
        .next()
        .ok_or(AnalysisError::EmptyInput)?;
    debug!(shift = best.shift, score = best.score, "caesar brute force");
    Ok(best)
}
