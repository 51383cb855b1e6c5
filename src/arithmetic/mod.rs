//! Arithmetic unit: wrapping add/sub/mul, exponentiation and the signed
//! reading of a word.

pub mod division;
pub mod modular;

use bitvec::prelude::*;

use crate::constants::{N_LIMBS, SIGN_BIT};
use crate::word::limbs::{self, Limbs};
use crate::word::U256;

impl U256 {
    /// Returns self + rhs modulo 2^256 and whether the true sum reached 2^256.
    pub fn overflowing_add(self, rhs: U256) -> (U256, bool) {
        let mut sum: Limbs = self.0;
        let carry = limbs::add_assign(&mut sum, &rhs.0);
        (U256(sum), carry != 0)
    }

    pub fn wrapping_add(self, rhs: U256) -> U256 {
        self.overflowing_add(rhs).0
    }

    /// Returns self - rhs modulo 2^256 and whether the subtraction borrowed.
    pub fn overflowing_sub(self, rhs: U256) -> (U256, bool) {
        let mut diff: Limbs = self.0;
        let borrow = limbs::sub_assign(&mut diff, &rhs.0);
        (U256(diff), borrow != 0)
    }

    pub fn wrapping_sub(self, rhs: U256) -> U256 {
        self.overflowing_sub(rhs).0
    }

    /// Two's complement negation, 0 - self.
    pub fn wrapping_neg(self) -> U256 {
        U256::ZERO.wrapping_sub(self)
    }

    /// The full 512-bit product as (low word, high word).
    pub fn widening_mul(self, rhs: U256) -> (U256, U256) {
        let prod = limbs::mul_wide(&self.0, &rhs.0);
        let mut lo = [0u64; N_LIMBS];
        let mut hi = [0u64; N_LIMBS];
        lo.copy_from_slice(&prod[..N_LIMBS]);
        hi.copy_from_slice(&prod[N_LIMBS..]);
        (U256(lo), U256(hi))
    }

    /// self * rhs modulo 2^256.
    pub fn wrapping_mul(self, rhs: U256) -> U256 {
        U256(limbs::mul_lo(&self.0, &rhs.0))
    }

    /// self^exponent modulo 2^256 by square-and-multiply over the
    /// significant bits of the exponent. Anything to the power zero is one,
    /// zero included.
    pub fn wrapping_pow(self, exponent: U256) -> U256 {
        let exp_limbs = exponent.0;
        let bits = exp_limbs.view_bits::<Lsb0>();
        let mut result = U256::ONE;
        let mut multiplier = self;
        for bit in bits[..exponent.bit_len()].iter().by_vals() {
            if bit {
                result = result.wrapping_mul(multiplier);
            }
            multiplier = multiplier.wrapping_mul(multiplier);
        }
        result
    }

    /// Returns true if bit 255 is set.
    pub fn is_negative(&self) -> bool {
        self.bit(SIGN_BIT)
    }

    /// -1, 0 or 1 according to the signed reading of the word.
    pub fn signum(&self) -> i8 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Magnitude of the signed reading. [`U256::SIGNED_MIN`] has no positive
    /// counterpart and maps to itself, which is 2^255 read unsigned.
    pub fn abs_wrapping(self) -> U256 {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }
}
