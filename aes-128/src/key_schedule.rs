//! AES-128 key expansion

use crate::tables::{RCON, SBOX};

const NK: usize = 4;
const NR: usize = 10;
const WORDS: usize = 4 * (NR + 1);

/// Expands a 16-byte key into the 11 round keys.
///
/// Word `w[i]` is `w[i-4] ^ w[i-1]`, except that every fourth word first
/// runs `w[i-1]` through RotWord, SubWord and the round constant.
pub fn expand_key(key: &[u8; 16]) -> [[u8; 16]; NR + 1] {
    let mut w = [[0u8; 4]; WORDS];
    for (i, word) in w.iter_mut().take(NK).enumerate() {
        word.copy_from_slice(&key[i * 4..i * 4 + 4]);
    }

    for i in NK..WORDS {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp.rotate_left(1);
            for byte in temp.iter_mut() {
                *byte = SBOX[*byte as usize];
            }
            temp[0] ^= RCON[i / NK];
        }
        for j in 0..4 {
            w[i][j] = w[i - NK][j] ^ temp[j];
        }
    }

    let mut round_keys = [[0u8; 16]; NR + 1];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for (j, word) in w[round * 4..round * 4 + 4].iter().enumerate() {
            round_key[j * 4..j * 4 + 4].copy_from_slice(word);
        }
    }
    round_keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_round_key_is_cipher_key() {
        let key: [u8; 16] = core::array::from_fn(|i| i as u8);
        assert_eq!(expand_key(&key)[0], key);
    }

    #[test]
    fn test_fips197_appendix_a1_last_round_key() {
        let key = [
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ];
        let round_keys = expand_key(&key);
        assert_eq!(&round_keys[1][..4], &[0xa0, 0xfa, 0xfe, 0x17]);
        assert_eq!(
            round_keys[10],
            [
                0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6,
                0x63, 0x0c, 0xa6
            ]
        );
    }
}
