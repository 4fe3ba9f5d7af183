//! CBC (Cipher Block Chaining) mode implementation

use crate::{error::CipherModeError, utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// CBC mode encryption
    pub fn cbc_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_iv_length(iv, block_size)?;

        let mut data = utils::pkcs7_pad(plaintext, block_size);
        let mut previous_block = iv.to_vec();

        for chunk in data.chunks_mut(block_size) {
            utils::xor_in_place(chunk, &previous_block);
            cipher.encrypt_block(chunk)?;
            previous_block.copy_from_slice(chunk);
        }

        Ok(data)
    }

    /// CBC mode decryption
    pub fn cbc_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_iv_length(iv, block_size)?;

        if ciphertext.len() % block_size != 0 {
            return Err(CipherModeError::InvalidLengthError {
                len: ciphertext.len(),
                block_size,
            });
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut previous_block = iv;

        for chunk in ciphertext.chunks(block_size) {
            let mut block = chunk.to_vec();
            cipher.decrypt_block(&mut block)?;
            utils::xor_in_place(&mut block, previous_block);
            plaintext.extend_from_slice(&block);
            previous_block = chunk;
        }

        utils::pkcs7_unpad(&plaintext, block_size)
    }
}
