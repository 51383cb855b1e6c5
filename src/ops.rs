//! Operator overloads.
//!
//! The operators keep the word semantics rather than the primitive integer
//! ones: arithmetic wraps, `/` and `%` by zero give zero, and shifts by 256
//! or more saturate. None of them panic.

use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use itertools::izip;

use crate::constants::N_LIMBS;
use crate::word::U256;

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $apply:expr) => {
        impl $op for U256 {
            type Output = U256;

            fn $method(self, rhs: U256) -> U256 {
                let apply: fn(U256, U256) -> U256 = $apply;
                apply(self, rhs)
            }
        }

        impl $op<&U256> for U256 {
            type Output = U256;

            fn $method(self, rhs: &U256) -> U256 {
                $op::$method(self, *rhs)
            }
        }

        impl $op_assign for U256 {
            fn $method_assign(&mut self, rhs: U256) {
                // The result is complete before it is written back, so rhs
                // may be a copy of self.
                let result = $op::$method(*self, rhs);
                *self = result;
            }
        }
    };
}

fn limbwise(a: U256, b: U256, f: fn(u64, u64) -> u64) -> U256 {
    let mut limbs = [0u64; N_LIMBS];
    for (out, &x, &y) in izip!(limbs.iter_mut(), a.0.iter(), b.0.iter()) {
        *out = f(x, y);
    }
    U256(limbs)
}

impl_binary_op!(Add, add, AddAssign, add_assign, U256::wrapping_add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, U256::wrapping_sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, U256::wrapping_mul);
impl_binary_op!(Div, div, DivAssign, div_assign, U256::div_or_zero);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, U256::rem_or_zero);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| limbwise(
    a,
    b,
    |x, y| x & y
));
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, |a, b| limbwise(
    a,
    b,
    |x, y| x | y
));
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, |a, b| limbwise(
    a,
    b,
    |x, y| x ^ y
));

impl Not for U256 {
    type Output = U256;

    fn not(self) -> U256 {
        U256(self.0.map(|limb| !limb))
    }
}

/// Two's complement negation.
impl Neg for U256 {
    type Output = U256;

    fn neg(self) -> U256 {
        self.wrapping_neg()
    }
}

impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, rhs: u32) -> U256 {
        self.shift_left(U256::from(rhs))
    }
}

impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, rhs: u32) -> U256 {
        self.shift_right(U256::from(rhs))
    }
}

impl ShlAssign<u32> for U256 {
    fn shl_assign(&mut self, rhs: u32) {
        *self = *self << rhs;
    }
}

impl ShrAssign<u32> for U256 {
    fn shr_assign(&mut self, rhs: u32) {
        *self = *self >> rhs;
    }
}

impl Sum for U256 {
    fn sum<I: Iterator<Item = U256>>(iter: I) -> U256 {
        iter.fold(U256::ZERO, U256::wrapping_add)
    }
}

impl Product for U256 {
    fn product<I: Iterator<Item = U256>>(iter: I) -> U256 {
        iter.fold(U256::ONE, U256::wrapping_mul)
    }
}
