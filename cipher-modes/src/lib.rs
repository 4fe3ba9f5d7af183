//! # Cipher Modes Library
//!
//! Shared plumbing for the block cipher engines in this workspace.
//!
//! ## Supported Modes
//!
//! - **ECB** (Electronic Code Book) - every block encrypted independently
//! - **CBC** (Cipher Block Chaining) - each block XORed with the previous ciphertext block
//!
//! Both modes apply PKCS#7 padding and validate it strictly on the way back.
//!
//! ## Usage
//!
//! ```rust
//! use cipher_modes::{BlockCipher, CipherModes, Mode, Result};
//!
//! // A toy 4-byte "cipher" standing in for AES or DES.
//! struct Xor4([u8; 4]);
//!
//! impl BlockCipher for Xor4 {
//!     fn name(&self) -> &'static str { "XOR4" }
//!     fn key_size(&self) -> usize { 4 }
//!     fn block_size(&self) -> usize { 4 }
//!     fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
//!         block.iter_mut().zip(self.0).for_each(|(b, k)| *b ^= k);
//!         Ok(())
//!     }
//!     fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
//!         self.encrypt_block(block)
//!     }
//! }
//!
//! let cipher = Xor4(*b"key!");
//! let hex = CipherModes::encrypt_to_hex(&cipher, Mode::Cbc, b"Hello, World!", Some(&b"iviv"[..]))?;
//! let plain = CipherModes::decrypt_from_hex(&cipher, Mode::Cbc, &hex, Some(&b"iviv"[..]))?;
//! assert_eq!(plain, b"Hello, World!");
//! # Ok::<(), cipher_modes::CipherModeError>(())
//! ```

// Public modules
pub mod cipher;
pub mod error;
pub mod key;
pub mod modes;
pub mod utils;

// Re-exports for easy access
pub use cipher::BlockCipher;
pub use error::{CipherModeError, Result};
pub use key::{normalize_iv, normalize_key};
pub use modes::{CipherModes, Mode};

impl CipherModes {
    /// Validate IV length for modes that require it
    pub fn validate_iv_length(iv: &[u8], block_size: usize) -> Result<()> {
        if iv.len() != block_size {
            Err(CipherModeError::KeyFormatError(format!(
                "IV must be {block_size} bytes, got {}",
                iv.len()
            )))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Byte-rotating XOR "cipher" with an 8-byte block, for exercising the modes.
    struct ToyCipher {
        key: [u8; 8],
    }

    impl BlockCipher for ToyCipher {
        fn name(&self) -> &'static str {
            "TOY"
        }

        fn key_size(&self) -> usize {
            8
        }

        fn block_size(&self) -> usize {
            8
        }

        fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
            if block.len() != 8 {
                return Err(CipherModeError::InvalidLengthError {
                    len: block.len(),
                    block_size: 8,
                });
            }
            utils::xor_in_place(block, &self.key);
            block.rotate_left(3);
            Ok(())
        }

        fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
            if block.len() != 8 {
                return Err(CipherModeError::InvalidLengthError {
                    len: block.len(),
                    block_size: 8,
                });
            }
            block.rotate_right(3);
            utils::xor_in_place(block, &self.key);
            Ok(())
        }
    }

    fn toy() -> ToyCipher {
        ToyCipher { key: *b"toy-key!" }
    }

    #[test]
    fn test_ecb_round_trip() {
        let cipher = toy();
        let plaintext = b"Integration test message for all modes!";

        let encrypted = CipherModes::ecb_encrypt(&cipher, plaintext).unwrap();
        assert_eq!(encrypted.len() % 8, 0);
        let decrypted = CipherModes::ecb_decrypt(&cipher, &encrypted).unwrap();
        assert_eq!(plaintext, &decrypted[..]);
    }

    #[test]
    fn test_cbc_round_trip() {
        let cipher = toy();
        let plaintext = b"Integration test message for all modes!";
        let iv = b"initvect";

        let encrypted = CipherModes::cbc_encrypt(&cipher, plaintext, iv).unwrap();
        let decrypted = CipherModes::cbc_decrypt(&cipher, &encrypted, iv).unwrap();
        assert_eq!(plaintext, &decrypted[..]);
    }

    #[test]
    fn test_empty_plaintext_gets_full_padding_block() {
        let cipher = toy();
        let encrypted = CipherModes::ecb_encrypt(&cipher, b"").unwrap();
        assert_eq!(encrypted.len(), 8);
        assert!(CipherModes::ecb_decrypt(&cipher, &encrypted).unwrap().is_empty());
    }

    #[test]
    fn test_ecb_repeats_blocks_cbc_does_not() {
        let cipher = toy();
        let plaintext = b"SAMEBLK!SAMEBLK!";

        let ecb = CipherModes::ecb_encrypt(&cipher, plaintext).unwrap();
        assert_eq!(ecb[0..8], ecb[8..16]);

        let cbc = CipherModes::cbc_encrypt(&cipher, plaintext, b"initvect").unwrap();
        assert_ne!(cbc[0..8], cbc[8..16]);
    }

    #[test]
    fn test_decrypt_rejects_partial_blocks() {
        let cipher = toy();
        assert_eq!(
            CipherModes::ecb_decrypt(&cipher, &[0u8; 12]),
            Err(CipherModeError::InvalidLengthError {
                len: 12,
                block_size: 8
            })
        );
        assert!(matches!(
            CipherModes::cbc_decrypt(&cipher, &[0u8; 9], b"initvect"),
            Err(CipherModeError::InvalidLengthError { .. })
        ));
    }

    #[test]
    fn test_corrupted_padding_is_rejected() {
        let cipher = toy();
        let mut encrypted = CipherModes::ecb_encrypt(&cipher, b"abc").unwrap();

        // Flip the last plaintext byte by re-encrypting a tampered block.
        let mut block = encrypted[0..8].to_vec();
        cipher.decrypt_block(&mut block).unwrap();
        block[7] ^= 0x01;
        cipher.encrypt_block(&mut block).unwrap();
        encrypted[0..8].copy_from_slice(&block);

        assert!(matches!(
            CipherModes::ecb_decrypt(&cipher, &encrypted),
            Err(CipherModeError::PaddingError(_))
        ));
    }

    #[test]
    fn test_cbc_wrong_iv_length() {
        let cipher = toy();
        assert!(matches!(
            CipherModes::cbc_encrypt(&cipher, b"hello", b"short"),
            Err(CipherModeError::KeyFormatError(_))
        ));
    }

    #[test]
    fn test_hex_wrappers_prefix_generated_iv() {
        let cipher = toy();
        let hex = CipherModes::encrypt_to_hex(&cipher, Mode::Cbc, b"prefixed", None).unwrap();
        // 8-byte IV + two blocks (8 bytes of data plus a full padding block)
        assert_eq!(hex.len(), 16 + 32);
        assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));

        let (iv, rest) = CipherModes::split_iv_prefix(&hex, 8).unwrap();
        let plain = CipherModes::decrypt_from_hex(&cipher, Mode::Cbc, rest, Some(iv.as_slice())).unwrap();
        assert_eq!(plain, b"prefixed");
    }

    #[test]
    fn test_cbc_hex_decrypt_without_iv() {
        let cipher = toy();
        assert_eq!(
            CipherModes::decrypt_from_hex(&cipher, Mode::Cbc, "00", None),
            Err(CipherModeError::MissingIvError("TOY"))
        );
        assert_eq!(
            CipherModes::decrypt_from_hex(&cipher, Mode::Cbc, "not hex", None),
            Err(CipherModeError::MissingIvError("TOY"))
        );
    }

    #[test]
    fn test_split_iv_prefix_too_short() {
        assert!(matches!(
            CipherModes::split_iv_prefix("abcd", 8),
            Err(CipherModeError::InvalidLengthError { .. })
        ));
    }

    #[test]
    fn test_validate_iv_length() {
        assert!(CipherModes::validate_iv_length(&[0u8; 16], 16).is_ok());
        assert!(matches!(
            CipherModes::validate_iv_length(&[0u8; 8], 16),
            Err(CipherModeError::KeyFormatError(_))
        ));
    }
}
