//! Hill-climbing key search with random restarts

use freq_analysis::{count_indices, AnalysisError, Result, SearchHandle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::key::Key;
use crate::score::Prepared;

/// Tuning for [`crack`].
#[derive(Debug, Clone, PartialEq)]
pub struct CrackConfig {
    /// Independent climbs. The first starts from the frequency-matched key,
    /// the second from its reverse, the rest from random keys.
    pub restarts: usize,
    /// Swap proposals per climb.
    pub iterations: usize,
    /// A climb ends after this many proposals in a row without improvement.
    pub patience: usize,
    /// Chance of jumping to a proposal regardless of its score.
    pub escape_probability: f64,
    /// Report progress every this many iterations.
    pub progress_interval: usize,
    /// Fixes the random stream for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for CrackConfig {
    fn default() -> Self {
        CrackConfig {
            restarts: 25,
            iterations: 3000,
            patience: 600,
            escape_probability: 0.002,
            progress_interval: 100,
            seed: None,
        }
    }
}

/// The best decryption found by a search.
#[derive(Debug, Clone, PartialEq)]
pub struct CrackResult {
    pub text: String,
    pub mapping: Key,
    pub score: f64,
}

/// Cracks `ciphertext` with the default configuration.
pub fn brute_force(ciphertext: &str, on_progress: impl FnMut(f64)) -> Result<CrackResult> {
    crack(ciphertext, &CrackConfig::default(), on_progress)
}

/// Searches for the key whose decryption scores highest.
///
/// This is a heuristic: long English ciphertexts usually come back fully
/// solved, short ones may not. `on_progress` receives a non-decreasing
/// fraction in `[0, 1]`, ending with exactly `1.0`.
pub fn crack(
    ciphertext: &str,
    config: &CrackConfig,
    mut on_progress: impl FnMut(f64),
) -> Result<CrackResult> {
    let mut prepared = Prepared::new(ciphertext);
    if prepared.letters().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let seed_key = Key::from_frequencies(&count_indices(prepared.letters().iter().copied()));
    let restarts = config.restarts.max(1);
    let iterations = config.iterations.max(1);

    let mut best: Option<(Key, f64)> = None;
    for restart in 0..restarts {
        let start = match restart {
            0 => seed_key,
            1 => seed_key.reversed(),
            _ => Key::random(&mut rng),
        };

        let (key, score) = climb(&mut prepared, start, config, &mut rng, |iter| {
            if iter % config.progress_interval.max(1) == 0 {
                on_progress((restart as f64 + iter as f64 / iterations as f64) / restarts as f64);
            }
        });
        debug!(restart, score, %key, "climb finished");

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((key, score));
        }
    }
    on_progress(1.0);

    let (mapping, score) = best.ok_or(AnalysisError::EmptyInput)?;
    info!(score, %mapping, "monoalphabetic search finished");
    Ok(CrackResult {
        text: prepared.decrypt(&mapping),
        mapping,
        score,
    })
}

/// One climb from `start`, returning the best key it visited.
fn climb(
    prepared: &mut Prepared,
    start: Key,
    config: &CrackConfig,
    rng: &mut StdRng,
    mut tick: impl FnMut(usize),
) -> (Key, f64) {
    let mut current = start;
    let mut current_score = prepared.score(&current);
    let mut best = (current, current_score);
    let mut stale = 0;
    let escape = if config.escape_probability.is_finite() {
        config.escape_probability.clamp(0.0, 1.0)
    } else {
        0.0
    };

    for iter in 0..config.iterations {
        let i = rng.gen_range(0..26);
        let mut j = rng.gen_range(0..25);
        if j >= i {
            j += 1;
        }

        let mut candidate = current;
        candidate.swap(i, j);
        let score = prepared.score(&candidate);

        if score > current_score {
            current = candidate;
            current_score = score;
            stale = 0;
        } else if rng.gen_bool(escape) {
            trace!(iter, from = current_score, to = score, "escape move");
            current = candidate;
            current_score = score;
            stale = 0;
        } else {
            stale += 1;
        }

        if current_score > best.1 {
            best = (current, current_score);
        }

        tick(iter);

        if stale >= config.patience {
            trace!(iter, "climb stalled");
            break;
        }
    }

    best
}

/// Runs [`crack`] on a background thread.
///
/// The handle streams progress followed by the result; dropping it
/// abandons the search.
pub fn spawn_crack(ciphertext: String, config: CrackConfig) -> SearchHandle<CrackResult> {
    SearchHandle::spawn("mono-crack", move |progress| {
        crack(&ciphertext, &config, |f| progress.report(f))
    })
}
