//! Generic block cipher trait

use crate::error::Result;

/// A keyed block cipher.
///
/// Implementations own their expanded key schedule, so the chaining code in
/// [`crate::modes`] only ever moves blocks around.
pub trait BlockCipher {
    /// Short name used in error messages ("AES", "DES").
    fn name(&self) -> &'static str;

    /// Key size in bytes
    fn key_size(&self) -> usize;

    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Encrypts a single block in place.
    ///
    /// Fails with `InvalidLengthError` when `block` is not exactly one block long.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place.
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}
