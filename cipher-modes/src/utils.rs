//! Byte, hex and padding helpers shared by the block cipher engines

use rand::RngCore;

use crate::error::{CipherModeError, Result};

/// Decodes a hexadecimal string into bytes.
///
/// Both upper and lower case digits are accepted. Odd lengths and non-hex
/// characters fail with `FormatError`.
pub fn bytes_from_hex(s: &str) -> Result<Vec<u8>> {
    hex::decode(s).map_err(|e| CipherModeError::FormatError(e.to_string()))
}

/// Encodes bytes as a lowercase hexadecimal string.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Returns `true` when `s` is exactly `len` hexadecimal digits.
pub fn is_hex_of_len(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// UTF-8 encodes text for encryption.
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Interprets decrypted bytes as UTF-8 text.
pub fn bytes_to_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| {
        CipherModeError::FormatError("decrypted data is not valid UTF-8".to_string())
    })
}

/// Adds PKCS#7 padding.
///
/// Always appends between 1 and `block_size` bytes, each holding the pad
/// length; aligned input gets a full block of padding.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad_len = block_size - (data.len() % block_size);
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strips PKCS#7 padding, rejecting anything that is not well formed.
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(CipherModeError::PaddingError("padded data is empty"));
    }
    if data.len() % block_size != 0 {
        return Err(CipherModeError::PaddingError(
            "padded data is not a multiple of the block size",
        ));
    }

    let pad_len = data[data.len() - 1] as usize;
    if pad_len == 0 || pad_len > block_size {
        return Err(CipherModeError::PaddingError("pad length out of range"));
    }

    let (body, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| b as usize != pad_len) {
        return Err(CipherModeError::PaddingError("inconsistent pad bytes"));
    }

    Ok(body.to_vec())
}

/// XOR two equally sized blocks into `dst`.
pub fn xor_in_place(dst: &mut [u8], other: &[u8]) {
    for (d, o) in dst.iter_mut().zip(other) {
        *d ^= o;
    }
}

/// Fresh random bytes from the thread-local CSPRNG, used for IVs.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}
