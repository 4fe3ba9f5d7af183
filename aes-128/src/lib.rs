//! AES-128 implementation
//!
//! Encryption runs the standard ten rounds:
//! 1. Initial AddRoundKey
//! 2. Nine main rounds (SubBytes, ShiftRows, MixColumns, AddRoundKey)
//! 3. Final round without MixColumns
//!
//! Decryption mirrors it with the inverse transforms. The string-level
//! [`encrypt`] and [`decrypt`] functions add PKCS#7 padding, ECB/CBC
//! chaining and hex encoding on top.

pub mod block;
pub mod key_schedule;
pub mod tables;

use cipher_modes::{
    normalize_iv, normalize_key, utils, BlockCipher, CipherModeError, CipherModes, Mode, Result,
};
use tracing::debug;

use block::AesBlock;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;
/// AES-128 key size in bytes
pub const KEY_SIZE: usize = 16;

const ROUNDS: usize = 10;

/// AES-128 keyed with an expanded schedule of 11 round keys.
#[derive(Clone)]
pub struct Aes128 {
    round_keys: [[u8; 16]; ROUNDS + 1],
}

impl Aes128 {
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        Aes128 {
            round_keys: key_schedule::expand_key(key),
        }
    }

    /// Builds a cipher from a key slice, which must be exactly 16 bytes.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| {
            CipherModeError::KeyFormatError(format!(
                "AES-128 key must be {KEY_SIZE} bytes, got {}",
                key.len()
            ))
        })?;
        Ok(Self::new(key))
    }

    /// The 11 round keys (176 bytes) produced by key expansion.
    pub fn round_keys(&self) -> &[[u8; 16]; ROUNDS + 1] {
        &self.round_keys
    }

    pub fn encrypt_block_array(&self, plaintext: &[u8; 16]) -> [u8; 16] {
        let mut block = AesBlock::new(plaintext);

        block.add_round_key(&self.round_keys[0]);

        for round in 1..ROUNDS {
            block.sub_bytes();
            block.shift_rows();
            block.mix_columns();
            block.add_round_key(&self.round_keys[round]);
        }

        block.sub_bytes();
        block.shift_rows();
        block.add_round_key(&self.round_keys[ROUNDS]);

        block.to_bytes()
    }

    pub fn decrypt_block_array(&self, ciphertext: &[u8; 16]) -> [u8; 16] {
        let mut block = AesBlock::new(ciphertext);

        block.add_round_key(&self.round_keys[ROUNDS]);

        for round in (1..ROUNDS).rev() {
            block.inv_shift_rows();
            block.inv_sub_bytes();
            block.add_round_key(&self.round_keys[round]);
            block.inv_mix_columns();
        }

        block.inv_shift_rows();
        block.inv_sub_bytes();
        block.add_round_key(&self.round_keys[0]);

        block.to_bytes()
    }
}

fn as_block(block: &mut [u8]) -> Result<&mut [u8; BLOCK_SIZE]> {
    let len = block.len();
    block
        .try_into()
        .map_err(|_| CipherModeError::InvalidLengthError {
            len,
            block_size: BLOCK_SIZE,
        })
}

impl BlockCipher for Aes128 {
    fn name(&self) -> &'static str {
        "AES"
    }

    fn key_size(&self) -> usize {
        KEY_SIZE
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let block = as_block(block)?;
        *block = self.encrypt_block_array(block);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let block = as_block(block)?;
        *block = self.decrypt_block_array(block);
        Ok(())
    }
}

fn cipher_for(key: &str) -> Result<Aes128> {
    Aes128::from_slice(&normalize_key(key, KEY_SIZE)?)
}

/// Encrypts `plaintext` with AES-128 and returns lowercase hex.
///
/// `key` is 16 ASCII characters or 32 hex digits, `mode` is `"ecb"` or
/// `"cbc"` (any case). In CBC mode without an `iv` a random IV is generated
/// and its hex is prefixed to the result.
pub fn encrypt(plaintext: &str, key: &str, mode: &str, iv: Option<&str>) -> Result<String> {
    let cipher = cipher_for(key)?;
    let mode: Mode = mode.parse()?;
    let iv = normalize_iv(iv, BLOCK_SIZE)?;

    debug!(%mode, explicit_iv = iv.is_some(), len = plaintext.len(), "AES encrypt");
    CipherModes::encrypt_to_hex(&cipher, mode, &utils::text_to_bytes(plaintext), iv.as_deref())
}

/// Decrypts hex ciphertext produced by [`encrypt`].
///
/// In CBC mode without an `iv`, the first 32 hex digits are taken as the IV.
pub fn decrypt(cipher_hex: &str, key: &str, mode: &str, iv: Option<&str>) -> Result<String> {
    let cipher = cipher_for(key)?;
    let mode: Mode = mode.parse()?;
    let iv = normalize_iv(iv, BLOCK_SIZE)?;

    debug!(%mode, explicit_iv = iv.is_some(), hex_len = cipher_hex.len(), "AES decrypt");
    let plaintext = match (mode, iv) {
        (Mode::Cbc, None) => {
            let (iv, rest) = CipherModes::split_iv_prefix(cipher_hex, BLOCK_SIZE)?;
            CipherModes::decrypt_from_hex(&cipher, mode, rest, Some(&iv))?
        }
        (_, iv) => CipherModes::decrypt_from_hex(&cipher, mode, cipher_hex, iv.as_deref())?,
    };

    utils::bytes_to_text(plaintext)
}
