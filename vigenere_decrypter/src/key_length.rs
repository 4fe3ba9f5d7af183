//! Key-length estimation
//!
//! Two independent estimators feed the candidate list:
//!
//! - **Kasiski examination**: repeated substrings of the ciphertext are
//!   likely the same plaintext under the same key offset, so the distance
//!   between repeats tends to be a multiple of the key length.
//! - **Index of coincidence**: splitting the text into `k` columns gives
//!   English-like columns (IC near 0.066) only when `k` is a multiple of
//!   the key length; random-looking columns sit near 0.038.

use std::collections::{BTreeSet, HashMap};

use freq_analysis::{count_indices, index_of_coincidence};
use tracing::debug;

use crate::BreakConfig;

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Splits letters into `key_length` columns; column `i` holds every letter
/// encrypted with key position `i`.
pub fn split_text_by_key_length(letters: &[u8], key_length: usize) -> Vec<Vec<u8>> {
    let mut columns = vec![Vec::new(); key_length];
    if key_length == 0 {
        return columns;
    }
    for (i, &letter) in letters.iter().enumerate() {
        columns[i % key_length].push(letter);
    }
    columns
}

/// Key lengths suggested by repeated substrings.
///
/// For each substring length in the configured range, every repeat records
/// its distance to the previous occurrence. The GCD of each pair of
/// consecutive distances is a candidate when it lies strictly between 1
/// and the configured ceiling.
pub fn kasiski(letters: &[u8], config: &BreakConfig) -> Vec<usize> {
    let mut distances = Vec::new();
    for size in config.kasiski_min..=config.kasiski_max {
        let mut last_seen: HashMap<&[u8], usize> = HashMap::new();
        for i in 0..letters.len().saturating_sub(size) {
            let window = &letters[i..i + size];
            if let Some(previous) = last_seen.insert(window, i) {
                distances.push(i - previous);
            }
        }
    }

    let guesses: BTreeSet<usize> = distances
        .windows(2)
        .map(|pair| gcd(pair[0], pair[1]))
        .filter(|&g| g > 1 && g < config.gcd_ceiling)
        .collect();

    debug!(repeats = distances.len(), ?guesses, "kasiski examination");
    guesses.into_iter().collect()
}

/// Average index of coincidence of the columns for `key_length`.
pub fn average_ic(letters: &[u8], key_length: usize) -> f64 {
    if key_length == 0 {
        return 0.0;
    }
    let columns = split_text_by_key_length(letters, key_length);
    let total: f64 = columns
        .iter()
        .map(|column| index_of_coincidence(&count_indices(column.iter().copied())))
        .sum();
    total / key_length as f64
}

/// Key lengths up to the configured maximum whose average column IC
/// exceeds the threshold.
pub fn ic_scan(letters: &[u8], config: &BreakConfig) -> Vec<usize> {
    let lengths: Vec<usize> = (1..=config.max_ic_length)
        .filter(|&k| average_ic(letters, k) > config.ic_threshold)
        .collect();
    debug!(?lengths, "index of coincidence scan");
    lengths
}

/// Union of both estimators in ascending order, or the fallback lengths
/// when neither finds anything.
pub fn candidate_lengths(letters: &[u8], config: &BreakConfig) -> Vec<usize> {
    let mut lengths: BTreeSet<usize> = kasiski(letters, config).into_iter().collect();
    lengths.extend(ic_scan(letters, config));

    if lengths.is_empty() {
        debug!(fallback = ?config.fallback_lengths, "no key length evidence");
        return config.fallback_lengths.clone();
    }
    lengths.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(text: &str) -> Vec<u8> {
        text.bytes().map(|b| b - b'A').collect()
    }

    #[test]
    fn test_split_text() {
        let columns = split_text_by_key_length(&indices("ABCDEFGH"), 3);
        assert_eq!(columns[0], indices("ADG"));
        assert_eq!(columns[1], indices("BEH"));
        assert_eq!(columns[2], indices("CF"));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 5), 1);
        assert_eq!(gcd(9, 0), 9);
    }

    #[test]
    fn test_kasiski_finds_period_of_repeats() {
        // "XYZ" repeats every 6 letters, "XYZQ" too.
        let letters = indices(&"XYZQRS".repeat(5));
        let guesses = kasiski(&letters, &BreakConfig::default());
        assert_eq!(guesses, vec![6]);
    }

    #[test]
    fn test_kasiski_ignores_text_without_repeats() {
        let letters = indices("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!(kasiski(&letters, &BreakConfig::default()).is_empty());
    }

    #[test]
    fn test_average_ic() {
        // Length 2 columns are "AAAA" and "BBBB".
        let letters = indices("ABABABAB");
        assert_eq!(average_ic(&letters, 2), 1.0);
        assert_eq!(average_ic(&letters, 1), 24.0 / 56.0);
        assert_eq!(average_ic(&letters, 0), 0.0);
    }

    #[test]
    fn test_fallback_lengths() {
        let letters = indices("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(
            candidate_lengths(&letters, &BreakConfig::default()),
            vec![3, 4, 5, 6, 7, 8]
        );
    }
}
