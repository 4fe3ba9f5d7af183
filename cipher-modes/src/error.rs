//! Error types for cipher mode operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherModeError {
    /// Key or IV has the wrong length or characters.
    #[error("Invalid key format: {0}")]
    KeyFormatError(String),

    /// Malformed hexadecimal input, or decrypted bytes that are not UTF-8 text.
    #[error("Invalid format: {0}")]
    FormatError(String),

    #[error("Ciphertext length {len} is not a multiple of the {block_size}-byte block size")]
    InvalidLengthError { len: usize, block_size: usize },

    #[error("Invalid PKCS#7 padding: {0}")]
    PaddingError(&'static str),

    #[error("IV is required for {0} CBC decryption")]
    MissingIvError(&'static str),

    #[error("Unsupported mode: {0} (use \"ecb\" or \"cbc\")")]
    UnsupportedModeError(String),
}

pub type Result<T> = std::result::Result<T, CipherModeError>;
