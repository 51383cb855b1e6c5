//! Unsigned and signed division.
//!
//! Every function here is total: a zero divisor gives a zero quotient and a
//! zero remainder rather than a fault.

use crate::constants::N_LIMBS;
use crate::word::limbs::{self, Limbs};
use crate::word::U256;

impl U256 {
    /// Truncating unsigned division and remainder in one pass.
    pub fn div_rem(self, rhs: U256) -> (U256, U256) {
        if rhs.is_zero() || rhs > self {
            let rem = if rhs.is_zero() { U256::ZERO } else { self };
            return (U256::ZERO, rem);
        }
        if let (Some(x), Some(y)) = (self.to_u64(), rhs.to_u64()) {
            return (U256::from(x / y), U256::from(x % y));
        }
        let (quot, rem) = limbs::div_rem(&self.0, &rhs.0);
        let mut q: Limbs = [0; N_LIMBS];
        q.copy_from_slice(&quot[..N_LIMBS]);
        (U256(q), U256(rem))
    }

    /// Unsigned quotient; zero when `rhs` is zero.
    pub fn div_or_zero(self, rhs: U256) -> U256 {
        self.div_rem(rhs).0
    }

    /// Unsigned remainder; zero when `rhs` is zero.
    pub fn rem_or_zero(self, rhs: U256) -> U256 {
        self.div_rem(rhs).1
    }

    /// Two's complement division truncated toward zero.
    ///
    /// `SIGNED_MIN / -1` overflows back to `SIGNED_MIN`.
    pub fn signed_div(self, rhs: U256) -> U256 {
        if rhs.is_zero() {
            return U256::ZERO;
        }
        let quot = self.abs_wrapping().div_or_zero(rhs.abs_wrapping());
        if self.is_negative() != rhs.is_negative() {
            quot.wrapping_neg()
        } else {
            quot
        }
    }

    /// Two's complement remainder of truncating division. The result takes
    /// the sign of the dividend.
    pub fn signed_rem(self, rhs: U256) -> U256 {
        if rhs.is_zero() {
            return U256::ZERO;
        }
        let rem = self.abs_wrapping().rem_or_zero(rhs.abs_wrapping());
        if self.is_negative() {
            rem.wrapping_neg()
        } else {
            rem
        }
    }
}
