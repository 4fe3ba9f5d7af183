//! Single-letter statistics

/// Relative frequencies of A-Z in English text, in percent.
pub const EN_FREQ: [f64; 26] = [
    8.12, 1.49, 2.71, 4.32, 12.02, 2.30, 2.03, 5.92, 7.31, 0.10, 0.69, 3.98, 2.61, 6.95, 7.68,
    1.82, 0.11, 6.02, 6.28, 9.10, 2.88, 1.11, 2.09, 0.17, 2.11, 0.07,
];

/// English letters from most to least frequent.
pub const EN_ORDER: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Alphabet index (0-25) of an ASCII letter, ignoring case.
pub fn letter_index(c: char) -> Option<u8> {
    c.is_ascii_alphabetic()
        .then(|| c.to_ascii_uppercase() as u8 - b'A')
}

/// Counts the frequency of each letter in the given text.
///
/// # Arguments
///
/// * `text` - The input text to analyze. Case is ignored and characters
///   other than A-Z are skipped.
///
/// # Returns
///
/// An array of 26 counts for letters A-Z.
pub fn count_frequencies(text: &str) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for idx in text.chars().filter_map(letter_index) {
        counts[idx as usize] += 1;
    }
    counts
}

/// Counts already-indexed letters (values 0-25).
pub fn count_indices(indices: impl IntoIterator<Item = u8>) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for idx in indices {
        counts[idx as usize] += 1;
    }
    counts
}

/// Negated chi-squared distance between `counts` and English, so that
/// higher means more English-like.
///
/// Each term is `(observed - expected)^2 / expected`, where `expected` is
/// the English share of the total count. A zero expectation counts as 1.
pub fn chi_squared_score(counts: &[usize; 26]) -> f64 {
    let total: usize = counts.iter().sum();
    let n = total as f64;

    -counts
        .iter()
        .zip(EN_FREQ.iter())
        .map(|(&observed, &pct)| {
            let expected = pct * n / 100.0;
            let diff = observed as f64 - expected;
            let divisor = if expected == 0.0 { 1.0 } else { expected };
            diff * diff / divisor
        })
        .sum::<f64>()
}

/// Index of coincidence: the chance that two letters drawn without
/// replacement are equal.
///
/// Returns 0.0 when fewer than two letters were counted.
pub fn index_of_coincidence(counts: &[usize; 26]) -> f64 {
    let total: usize = counts.iter().sum();
    if total < 2 {
        return 0.0;
    }

    let numerator: usize = counts.iter().map(|&f| f * f.saturating_sub(1)).sum();
    numerator as f64 / (total * (total - 1)) as f64
}

/// Letters of the ciphertext ordered from most to least frequent.
///
/// Ties keep alphabetical order.
pub fn rank_letters(counts: &[usize; 26]) -> [u8; 26] {
    let mut order: [u8; 26] = core::array::from_fn(|i| i as u8);
    order.sort_by(|&a, &b| counts[b as usize].cmp(&counts[a as usize]));
    order
}
