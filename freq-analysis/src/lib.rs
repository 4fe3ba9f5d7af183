//! # Frequency Analysis Library
//!
//! English-language statistics shared by the classical cipher breakers:
//!
//! - letter frequencies, chi-squared fit and index of coincidence
//!   ([`frequencies`])
//! - quadgram and trigram log-probability models ([`ngrams`])
//! - common-word lists and word-level scores ([`words`])
//! - background searches that stream progress over a channel ([`task`])
//!
//! ```rust
//! use freq_analysis::{chi_squared_score, count_frequencies, QUADGRAMS};
//!
//! let english = "attack the castle at dawn";
//! let noise = "xqzv jkwp yfbm ugoe clrs h";
//! assert!(QUADGRAMS.score(english) > QUADGRAMS.score(noise));
//! assert!(chi_squared_score(&count_frequencies(english)) > chi_squared_score(&count_frequencies(noise)));
//! ```

pub mod error;
pub mod frequencies;
pub mod ngrams;
pub mod task;
pub mod words;

pub use error::{AnalysisError, Result};
pub use frequencies::{
    chi_squared_score, count_frequencies, count_indices, index_of_coincidence, letter_index,
    rank_letters, EN_FREQ, EN_ORDER,
};
pub use ngrams::{NgramModel, QUADGRAMS, TRIGRAMS};
pub use task::{ProgressSink, SearchEvent, SearchHandle};
pub use words::{common_word_ratio, count_word_matches, COMMON_WORDS, SHIFT_WORDS};
