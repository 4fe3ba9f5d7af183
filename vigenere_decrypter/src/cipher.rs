//! Vigenère encryption and decryption with a known key

use freq_analysis::{letter_index, AnalysisError, Result};

/// Converts a key into shifts (`A` = 0 ... `Z` = 25), ignoring case.
///
/// Fails with `InvalidKey` when the key is empty or holds anything other
/// than ASCII letters.
pub fn parse_key(key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(AnalysisError::InvalidKey("key is empty".to_string()));
    }
    key.chars()
        .map(|c| {
            letter_index(c)
                .ok_or_else(|| AnalysisError::InvalidKey(format!("'{c}' is not a letter")))
        })
        .collect()
}

/// Shifts every ASCII letter by the next key shift, preserving case.
///
/// Non-letters are copied and do not advance the key.
pub(crate) fn apply_shifts(text: &str, shifts: &[u8], forward: bool) -> String {
    let mut result = String::with_capacity(text.len());
    let mut key_index = 0;

    for c in text.chars() {
        if c.is_ascii_alphabetic() && !shifts.is_empty() {
            let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
            let shift = shifts[key_index % shifts.len()];
            let shift = if forward { shift } else { 26 - shift };
            result.push(((c as u8 - base + shift) % 26 + base) as char);
            key_index += 1;
        } else {
            result.push(c);
        }
    }

    result
}

/// Encrypts text using the Vigenère cipher.
///
/// # Arguments
///
/// * `text` - The input text to encrypt.
/// * `key` - The key, letters only, any case.
///
/// # Returns
///
/// The encrypted text with case and non-letters preserved.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    Ok(apply_shifts(text, &parse_key(key)?, true))
}

/// Decrypts text using the Vigenère cipher.
///
/// # Arguments
///
/// * `text` - The input text to decrypt.
/// * `key` - The key, letters only, any case.
///
/// # Returns
///
/// The decrypted text with case and non-letters preserved.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    Ok(apply_shifts(text, &parse_key(key)?, false))
}
