//! Vigenère cipher and key recovery
//!
//! [`encrypt`] and [`decrypt`] work with a known key. [`break_vigenere`]
//! recovers an unknown key in three steps:
//!
//! 1. Estimate candidate key lengths (Kasiski examination plus an index of
//!    coincidence scan).
//! 2. For each length, split the letters into columns and find the Caesar
//!    shift that best fits English letter frequencies (chi-squared).
//! 3. Decrypt with each candidate key and keep the most English-like
//!    result.

pub mod breaker;
pub mod cipher;
pub mod key_length;

pub use breaker::{best_shift, break_vigenere, break_with_config, BreakConfig, BreakResult};
pub use cipher::{decrypt, encrypt, parse_key};
pub use key_length::{candidate_lengths, ic_scan, kasiski, split_text_by_key_length};
