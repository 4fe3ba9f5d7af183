//! Key and IV normalization
//!
//! Keys and IVs arrive as text. A string of exactly `2 * size` hex digits is
//! decoded as hex; otherwise the string must be exactly `size` ASCII
//! characters, used as raw bytes.

use crate::error::{CipherModeError, Result};
use crate::utils;

/// Derives `size` key bytes from hex or ASCII text.
pub fn normalize_key(key: &str, size: usize) -> Result<Vec<u8>> {
    normalize_material(key, size, "key")
}

/// Derives IV bytes, treating an absent or blank IV as "not supplied".
pub fn normalize_iv(iv: Option<&str>, size: usize) -> Result<Option<Vec<u8>>> {
    match iv {
        Some(iv) if !iv.trim().is_empty() => normalize_material(iv, size, "IV").map(Some),
        _ => Ok(None),
    }
}

fn normalize_material(input: &str, size: usize, what: &str) -> Result<Vec<u8>> {
    if utils::is_hex_of_len(input, size * 2) {
        return utils::bytes_from_hex(input);
    }

    if input.is_ascii() && input.len() == size {
        return Ok(input.as_bytes().to_vec());
    }

    Err(CipherModeError::KeyFormatError(format!(
        "{what} must be {size} ASCII characters or {} hex characters",
        size * 2
    )))
}
