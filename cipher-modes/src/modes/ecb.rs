//! ECB (Electronic Code Book) mode implementation

use crate::{error::CipherModeError, utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// ECB mode encryption. Pads with PKCS#7 before encrypting.
    pub fn ecb_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        let mut data = utils::pkcs7_pad(plaintext, block_size);

        for chunk in data.chunks_mut(block_size) {
            cipher.encrypt_block(chunk)?;
        }

        Ok(data)
    }

    /// ECB mode decryption. Strips and validates PKCS#7 padding.
    pub fn ecb_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        if ciphertext.len() % block_size != 0 {
            return Err(CipherModeError::InvalidLengthError {
                len: ciphertext.len(),
                block_size,
            });
        }

        let mut data = ciphertext.to_vec();
        for chunk in data.chunks_mut(block_size) {
            cipher.decrypt_block(chunk)?;
        }

        utils::pkcs7_unpad(&data, block_size)
    }
}
