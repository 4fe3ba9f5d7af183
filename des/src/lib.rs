//! DES implementation
//!
//! A 16-round Feistel network over 64-bit blocks. Each round expands the
//! right half to 48 bits, mixes in a subkey, squeezes the result through
//! the eight S-boxes and permutes it with P before XORing into the left
//! half. The string-level [`encrypt`] and [`decrypt`] functions add PKCS#7
//! padding, ECB/CBC chaining and hex encoding on top.
//!
//! Unlike the AES engine, CBC decryption here never reads an IV from the
//! ciphertext: without an explicit IV it fails with
//! [`CipherModeError::MissingIvError`].

pub mod key_schedule;
pub mod tables;

use cipher_modes::{
    normalize_iv, normalize_key, utils, BlockCipher, CipherModeError, CipherModes, Mode, Result,
};
use tracing::debug;

use tables::{E, FP, IP, P, SBOXES};

/// DES block size in bytes
pub const BLOCK_SIZE: usize = 8;
/// DES key size in bytes, parity bits included
pub const KEY_SIZE: usize = 8;

/// Applies a permutation table to the low `in_bits` bits of `input`.
///
/// Entry `n` of `table` selects input bit `n`, counting from 1 at the most
/// significant of the `in_bits` bits. The output has `table.len()` bits.
pub(crate) fn permute(input: u64, in_bits: u32, table: &[u8]) -> u64 {
    table.iter().fold(0u64, |acc, &pos| {
        (acc << 1) | ((input >> (in_bits - pos as u32)) & 1)
    })
}

/// The round function f(R, K).
fn feistel(right: u32, subkey: u64) -> u32 {
    let expanded = permute(right as u64, 32, &E) ^ subkey;

    let mut out = 0u32;
    for (i, sbox) in SBOXES.iter().enumerate() {
        let six = ((expanded >> (42 - 6 * i)) & 0x3f) as usize;
        let row = ((six & 0x20) >> 4) | (six & 1);
        let col = (six >> 1) & 0x0f;
        out = (out << 4) | sbox[row][col] as u32;
    }

    permute(out as u64, 32, &P) as u32
}

/// DES keyed with its sixteen round subkeys.
#[derive(Clone)]
pub struct Des {
    subkeys: [u64; 16],
}

impl Des {
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        Des {
            subkeys: key_schedule::subkeys(u64::from_be_bytes(*key)),
        }
    }

    /// Builds a cipher from a key slice, which must be exactly 8 bytes.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| {
            CipherModeError::KeyFormatError(format!(
                "DES key must be {KEY_SIZE} bytes, got {}",
                key.len()
            ))
        })?;
        Ok(Self::new(key))
    }

    /// The 48-bit round subkeys, in encryption order.
    pub fn subkeys(&self) -> &[u64; 16] {
        &self.subkeys
    }

    pub fn encrypt_u64(&self, block: u64) -> u64 {
        self.crypt(block, self.subkeys.iter())
    }

    pub fn decrypt_u64(&self, block: u64) -> u64 {
        self.crypt(block, self.subkeys.iter().rev())
    }

    fn crypt<'a>(&self, block: u64, subkeys: impl Iterator<Item = &'a u64>) -> u64 {
        let permuted = permute(block, 64, &IP);
        let mut left = (permuted >> 32) as u32;
        let mut right = permuted as u32;

        for &subkey in subkeys {
            let next = left ^ feistel(right, subkey);
            left = right;
            right = next;
        }

        // The halves are swapped once more before the final permutation.
        permute(((right as u64) << 32) | left as u64, 64, &FP)
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

impl BlockCipher for Des {
    fn name(&self) -> &'static str {
        "DES"
    }

    fn key_size(&self) -> usize {
        KEY_SIZE
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let block = as_block(block)?;
        *block = self.encrypt_u64(u64::from_be_bytes(*block)).to_be_bytes();
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let block = as_block(block)?;
        *block = self.decrypt_u64(u64::from_be_bytes(*block)).to_be_bytes();
        Ok(())
    }
}

fn cipher_for(key: &str) -> Result<Des> {
    Des::from_slice(&normalize_key(key, KEY_SIZE)?)
}

/// Encrypts `plaintext` with DES and returns lowercase hex.
///
/// `key` is 8 ASCII characters or 16 hex digits, `mode` is `"ecb"` or
/// `"cbc"` (any case). In CBC mode without an `iv` a random IV is generated
/// and its hex is prefixed to the result.
pub fn encrypt(plaintext: &str, key: &str, mode: &str, iv: Option<&str>) -> Result<String> {
    let cipher = cipher_for(key)?;
    let mode: Mode = mode.parse()?;
    let iv = normalize_iv(iv, BLOCK_SIZE)?;

    debug!(%mode, explicit_iv = iv.is_some(), len = plaintext.len(), "DES encrypt");
    CipherModes::encrypt_to_hex(&cipher, mode, &utils::text_to_bytes(plaintext), iv.as_deref())
}

/// Decrypts hex ciphertext produced by [`encrypt`].
///
/// CBC mode requires `iv`; to decrypt output that carries a generated IV
/// prefix, split off the first 16 hex digits and pass them as the IV.
pub fn decrypt(cipher_hex: &str, key: &str, mode: &str, iv: Option<&str>) -> Result<String> {
    let cipher = cipher_for(key)?;
    let mode: Mode = mode.parse()?;
    let iv = normalize_iv(iv, BLOCK_SIZE)?;

    debug!(%mode, explicit_iv = iv.is_some(), hex_len = cipher_hex.len(), "DES decrypt");
    let plaintext = CipherModes::decrypt_from_hex(&cipher, mode, cipher_hex, iv.as_deref())?;
    utils::bytes_to_text(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "PASSWORD";

    #[test]
    fn test_textbook_block() {
        let cipher = Des::new(&0x1334_5779_9BBC_DFF1u64.to_be_bytes());
        assert_eq!(cipher.encrypt_u64(0x0123_4567_89AB_CDEF), 0x85e8_1354_0f0a_b405);
        assert_eq!(cipher.decrypt_u64(0x85e8_1354_0f0a_b405), 0x0123_4567_89AB_CDEF);
    }

    #[test]
    fn test_initial_permutation() {
        assert_eq!(permute(0x0123_4567_89AB_CDEF, 64, &IP), 0xcc00_ccff_f0aa_f0aa);
        assert_eq!(permute(0xcc00_ccff_f0aa_f0aa, 64, &FP), 0x0123_4567_89AB_CDEF);
    }

    #[test]
    fn test_ecb_known_vector() {
        let hex = encrypt("HELLO WORLD!!", KEY, "ecb", None).unwrap();
        assert_eq!(hex, "f60c16bc971ad2d01317667b1d45ebeb");
        assert_eq!(decrypt(&hex, KEY, "ECB", None).unwrap(), "HELLO WORLD!!");
    }

    #[test]
    fn test_cbc_known_vector_with_iv() {
        let hex = encrypt("HELLO WORLD!!", KEY, "cbc", Some("12345678")).unwrap();
        assert_eq!(hex, "d3bc786f6f3c70cdd0ff4c93f5314d82");
        assert_eq!(decrypt(&hex, KEY, "cbc", Some("12345678")).unwrap(), "HELLO WORLD!!");
    }

    #[test]
    fn test_cbc_decrypt_requires_iv() {
        let hex = encrypt("HELLO WORLD!!", KEY, "cbc", None).unwrap();
        assert_eq!(hex.len(), 16 + 32);
        assert_eq!(
            decrypt(&hex, KEY, "cbc", None),
            Err(CipherModeError::MissingIvError("DES"))
        );

        let (iv_hex, body) = hex.split_at(16);
        assert_eq!(decrypt(body, KEY, "cbc", Some(iv_hex)).unwrap(), "HELLO WORLD!!");
    }

    #[test]
    fn test_block_cipher_rejects_wrong_block_length() {
        let cipher = Des::new(b"PASSWORD");
        let mut long = [0u8; 16];
        assert!(matches!(
            cipher.decrypt_block(&mut long),
            Err(CipherModeError::InvalidLengthError { len: 16, block_size: 8 })
        ));
    }

    #[test]
    fn test_bad_key_length() {
        assert!(matches!(
            encrypt("x", "PASSWORD1", "ecb", None),
            Err(CipherModeError::KeyFormatError(_))
        ));
    }

    #[test]
    fn test_unsupported_mode() {
        assert_eq!(
            decrypt("00", KEY, "ofb", None),
            Err(CipherModeError::UnsupportedModeError("ofb".to_string()))
        );
    }
}
