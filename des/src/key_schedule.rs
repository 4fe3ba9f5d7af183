//! DES key schedule

use crate::tables::{PC1, PC2, SHIFTS};
use crate::permute;

const HALF_MASK: u64 = 0x0fff_ffff;

fn rotl28(half: u64, n: u32) -> u64 {
    ((half << n) | (half >> (28 - n))) & HALF_MASK
}

/// Derives the sixteen 48-bit round subkeys from a 64-bit key.
///
/// The parity bits (every eighth bit) are dropped by PC-1 and play no part
/// in encryption.
pub fn subkeys(key: u64) -> [u64; 16] {
    let cd = permute(key, 64, &PC1);
    let mut c = cd >> 28;
    let mut d = cd & HALF_MASK;

    let mut keys = [0u64; 16];
    for (subkey, &shift) in keys.iter_mut().zip(SHIFTS.iter()) {
        c = rotl28(c, shift);
        d = rotl28(d, shift);
        *subkey = permute((c << 28) | d, 56, &PC2);
    }
    keys
}
