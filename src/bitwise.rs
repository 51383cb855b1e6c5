//! Shifts, byte extraction, sign extension and bit queries.
//!
//! Shift amounts and byte indices are themselves words, as they are on an
//! EVM stack. Amounts at or beyond the word width saturate instead of
//! wrapping around the way primitive integer shifts would.

use crate::constants::{N_LIMBS, WORD_BITS, WORD_BYTES};
use crate::word::limbs;
use crate::word::U256;

impl U256 {
    /// The word as an amount below `bound`, if it is one.
    fn below(&self, bound: usize) -> Option<u32> {
        self.to_u64()
            .filter(|&n| n < bound as u64)
            .map(|n| n as u32)
    }

    /// Logical left shift; zero once `shift >= 256`.
    pub fn shift_left(self, shift: U256) -> U256 {
        match shift.below(WORD_BITS) {
            Some(n) => U256(limbs::shl(&self.0, n)),
            None => U256::ZERO,
        }
    }

    /// Logical right shift; zero once `shift >= 256`.
    pub fn shift_right(self, shift: U256) -> U256 {
        match shift.below(WORD_BITS) {
            Some(n) => U256(limbs::shr(&self.0, n)),
            None => U256::ZERO,
        }
    }

    /// Arithmetic right shift, filling vacated bits with the sign bit.
    ///
    /// Once `shift >= 256` the result is all ones for a negative value and
    /// zero otherwise.
    pub fn arithmetic_shift_right(self, shift: U256) -> U256 {
        let negative = self.is_negative();
        match shift.below(WORD_BITS) {
            Some(n) if negative => {
                let fill = !U256(limbs::shr(&U256::MAX.0, n));
                U256(limbs::shr(&self.0, n)) | fill
            }
            Some(n) => U256(limbs::shr(&self.0, n)),
            None if negative => U256::MAX,
            None => U256::ZERO,
        }
    }

    /// Byte `index` counted from the most significant end (0 is the top
    /// byte), zero-extended. Zero once `index >= 32`.
    pub fn byte(self, index: U256) -> U256 {
        match index.below(WORD_BYTES) {
            Some(i) => {
                let bytes = self.to_bytes_be();
                U256::from(bytes[i as usize])
            }
            None => U256::ZERO,
        }
    }

    /// Sign-extends from byte `byte_index`, counted from the least
    /// significant end: every bit above bit `8 * byte_index + 7` is replaced
    /// by that bit. From index 31 on the word is returned unchanged.
    pub fn sign_extend(self, byte_index: U256) -> U256 {
        match byte_index.below(WORD_BYTES - 1) {
            Some(b) => {
                let sign_bit = 8 * b as usize + 7;
                // bits 0..=sign_bit
                let low = U256(limbs::shr(&U256::MAX.0, (WORD_BITS - 1 - sign_bit) as u32));
                if self.bit(sign_bit) {
                    self | !low
                } else {
                    self & low
                }
            }
            None => self,
        }
    }

    /// Number of significant bits; zero for zero.
    pub fn bit_len(&self) -> usize {
        WORD_BITS - self.leading_zeros() as usize
    }

    pub fn leading_zeros(&self) -> u32 {
        let len = limbs::significant_len(&self.0);
        if len == 0 {
            return WORD_BITS as u32;
        }
        (N_LIMBS - len) as u32 * u64::BITS + self.0[len - 1].leading_zeros()
    }

    pub fn trailing_zeros(&self) -> u32 {
        match self.0.iter().position(|&limb| limb != 0) {
            Some(i) => i as u32 * u64::BITS + self.0[i].trailing_zeros(),
            None => WORD_BITS as u32,
        }
    }

    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|limb| limb.count_ones()).sum()
    }
}
