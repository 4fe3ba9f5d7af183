//! The AES state and its round transformations

use crate::tables::{INV_SBOX, SBOX};

/// An AES-128 block viewed as a 4x4 byte matrix.
///
/// Bytes fill the matrix column by column, so `data[row][col]` holds input
/// byte `col * 4 + row`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AesBlock {
    data: [[u8; 4]; 4],
}

impl AesBlock {
    /// Loads a block from 16 bytes in column-major order.
    pub fn new(bytes: &[u8; 16]) -> Self {
        let mut data = [[0u8; 4]; 4];
        for col in 0..4 {
            for row in 0..4 {
                data[row][col] = bytes[col * 4 + row];
            }
        }
        AesBlock { data }
    }

    /// Converts the block back to 16 bytes
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        for col in 0..4 {
            for row in 0..4 {
                bytes[col * 4 + row] = self.data[row][col];
            }
        }
        bytes
    }

    /// SubBytes: replaces every byte through the S-box
    pub fn sub_bytes(&mut self) {
        for row in self.data.iter_mut() {
            for byte in row.iter_mut() {
                *byte = SBOX[*byte as usize];
            }
        }
    }

    pub fn inv_sub_bytes(&mut self) {
        for row in self.data.iter_mut() {
            for byte in row.iter_mut() {
                *byte = INV_SBOX[*byte as usize];
            }
        }
    }

    /// ShiftRows: row `r` rotates left by `r` positions.
    pub fn shift_rows(&mut self) {
        for row in 1..4 {
            self.data[row].rotate_left(row);
        }
    }

    /// Inverse ShiftRows: row `r` rotates right by `r` positions.
    pub fn inv_shift_rows(&mut self) {
        for row in 1..4 {
            self.data[row].rotate_right(row);
        }
    }

    /// MixColumns: multiplies every column by the fixed MDS matrix
    ///
    /// ```text
    /// [2 3 1 1]
    /// [1 2 3 1]
    /// [1 1 2 3]
    /// [3 1 1 2]
    /// ```
    pub fn mix_columns(&mut self) {
        for col in 0..4 {
            let t = self.column(col);
            self.data[0][col] = gf_mult(2, t[0]) ^ gf_mult(3, t[1]) ^ t[2] ^ t[3];
            self.data[1][col] = t[0] ^ gf_mult(2, t[1]) ^ gf_mult(3, t[2]) ^ t[3];
            self.data[2][col] = t[0] ^ t[1] ^ gf_mult(2, t[2]) ^ gf_mult(3, t[3]);
            self.data[3][col] = gf_mult(3, t[0]) ^ t[1] ^ t[2] ^ gf_mult(2, t[3]);
        }
    }

    /// Inverse MixColumns
    ///
    /// ```text
    /// [0xE 0xB 0xD 0x9]
    /// [0x9 0xE 0xB 0xD]
    /// [0xD 0x9 0xE 0xB]
    /// [0xB 0xD 0x9 0xE]
    /// ```
    pub fn inv_mix_columns(&mut self) {
        for col in 0..4 {
            let t = self.column(col);
            self.data[0][col] =
                gf_mult(0x0e, t[0]) ^ gf_mult(0x0b, t[1]) ^ gf_mult(0x0d, t[2]) ^ gf_mult(0x09, t[3]);
            self.data[1][col] =
                gf_mult(0x09, t[0]) ^ gf_mult(0x0e, t[1]) ^ gf_mult(0x0b, t[2]) ^ gf_mult(0x0d, t[3]);
            self.data[2][col] =
                gf_mult(0x0d, t[0]) ^ gf_mult(0x09, t[1]) ^ gf_mult(0x0e, t[2]) ^ gf_mult(0x0b, t[3]);
            self.data[3][col] =
                gf_mult(0x0b, t[0]) ^ gf_mult(0x0d, t[1]) ^ gf_mult(0x09, t[2]) ^ gf_mult(0x0e, t[3]);
        }
    }

    /// AddRoundKey: XOR with a 16-byte round key laid out like the state.
    pub fn add_round_key(&mut self, round_key: &[u8; 16]) {
        for col in 0..4 {
            for row in 0..4 {
                self.data[row][col] ^= round_key[col * 4 + row];
            }
        }
    }

    fn column(&self, col: usize) -> [u8; 4] {
        [
            self.data[0][col],
            self.data[1][col],
            self.data[2][col],
            self.data[3][col],
        ]
    }
}

/// Multiplication in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
pub fn gf_mult(a: u8, b: u8) -> u8 {
    let mut result = 0;
    let mut a = a;
    let mut b = b;

    while b != 0 {
        if b & 1 != 0 {
            result ^= a;
        }
        let high_bit = a & 0x80;
        a <<= 1;
        if high_bit != 0 {
            a ^= 0x1b; // 0x11b without the x^8 term
        }
        b >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> [u8; 16] {
        core::array::from_fn(|i| (i as u8).wrapping_mul(17).wrapping_add(3))
    }

    #[test]
    fn test_column_major_layout() {
        let bytes: [u8; 16] = core::array::from_fn(|i| i as u8);
        let block = AesBlock::new(&bytes);
        assert_eq!(block.data[1][0], 1);
        assert_eq!(block.data[0][1], 4);
        assert_eq!(block.to_bytes(), bytes);
    }

    #[test]
    fn test_shift_rows_rotates_each_row() {
        let bytes: [u8; 16] = core::array::from_fn(|i| i as u8);
        let mut block = AesBlock::new(&bytes);
        block.shift_rows();
        assert_eq!(
            block.to_bytes(),
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
        block.inv_shift_rows();
        assert_eq!(block.to_bytes(), bytes);
    }

    #[test]
    fn test_gf_mult_known_products() {
        // FIPS-197 section 4.2: {57} * {83} = {c1}, {57} * {13} = {fe}
        assert_eq!(gf_mult(0x57, 0x83), 0xc1);
        assert_eq!(gf_mult(0x57, 0x13), 0xfe);
        assert_eq!(gf_mult(0x01, 0xab), 0xab);
    }

    #[test]
    fn test_mix_columns_known_column() {
        // db 13 53 45 -> 8e 4d a1 bc
        let mut bytes = [0u8; 16];
        bytes[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        let mut block = AesBlock::new(&bytes);
        block.mix_columns();
        assert_eq!(&block.to_bytes()[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);
    }

    #[test]
    fn test_inverse_transforms() {
        let original = AesBlock::new(&sample());

        let mut block = original;
        block.sub_bytes();
        block.inv_sub_bytes();
        assert_eq!(block, original);

        block.mix_columns();
        assert_ne!(block, original);
        block.inv_mix_columns();
        assert_eq!(block, original);
    }
}
