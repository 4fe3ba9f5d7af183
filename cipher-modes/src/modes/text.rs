//! Text-in, hex-out wrappers over the byte-level modes
//!
//! Ciphertext travels as lowercase hex. When CBC encryption has to invent its
//! own IV, the IV's hex is written in front of the ciphertext hex.

use tracing::debug;

use crate::{error::CipherModeError, utils, BlockCipher, Result};

use super::{CipherModes, Mode};

impl CipherModes {
    /// Encrypts `plaintext` and returns lowercase hex.
    ///
    /// In CBC mode without an `iv`, a random IV is generated and prefixed to
    /// the output. ECB ignores `iv`.
    pub fn encrypt_to_hex<C: BlockCipher>(
        cipher: &C,
        mode: Mode,
        plaintext: &[u8],
        iv: Option<&[u8]>,
    ) -> Result<String> {
        match (mode, iv) {
            (Mode::Ecb, _) => Ok(utils::bytes_to_hex(&Self::ecb_encrypt(cipher, plaintext)?)),
            (Mode::Cbc, Some(iv)) => {
                Ok(utils::bytes_to_hex(&Self::cbc_encrypt(cipher, plaintext, iv)?))
            }
            (Mode::Cbc, None) => {
                let iv = utils::random_bytes(cipher.block_size());
                debug!(cipher = cipher.name(), "generated random IV for CBC encryption");
                let ciphertext = Self::cbc_encrypt(cipher, plaintext, &iv)?;
                Ok(format!(
                    "{}{}",
                    utils::bytes_to_hex(&iv),
                    utils::bytes_to_hex(&ciphertext)
                ))
            }
        }
    }

    /// Decrypts hex ciphertext back to raw bytes.
    ///
    /// CBC requires an explicit `iv` here; callers that accept IV-prefixed
    /// ciphertext split it off first with [`CipherModes::split_iv_prefix`].
    pub fn decrypt_from_hex<C: BlockCipher>(
        cipher: &C,
        mode: Mode,
        cipher_hex: &str,
        iv: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        match mode {
            Mode::Ecb => Self::ecb_decrypt(cipher, &utils::bytes_from_hex(cipher_hex)?),
            Mode::Cbc => {
                // A missing IV is reported before the ciphertext is parsed.
                let iv = iv.ok_or(CipherModeError::MissingIvError(cipher.name()))?;
                Self::cbc_decrypt(cipher, &utils::bytes_from_hex(cipher_hex)?, iv)
            }
        }
    }

    /// Splits a leading hex-encoded IV of `block_size` bytes off `cipher_hex`.
    pub fn split_iv_prefix(cipher_hex: &str, block_size: usize) -> Result<(Vec<u8>, &str)> {
        let prefix_len = block_size * 2;
        if cipher_hex.len() < prefix_len || !cipher_hex.is_char_boundary(prefix_len) {
            return Err(CipherModeError::InvalidLengthError {
                len: cipher_hex.len() / 2,
                block_size,
            });
        }

        let (iv_hex, rest) = cipher_hex.split_at(prefix_len);
        Ok((utils::bytes_from_hex(iv_hex)?, rest))
    }
}
