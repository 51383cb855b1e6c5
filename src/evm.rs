//! The word operations of the EVM instruction set, one function per opcode.
//!
//! Operands are passed in reading order (`sub(a, b)` is `a - b`,
//! `shl(value, shift)` shifts `value`), not in stack order. See
//! [`crate::opcode::Opcode`] for the stack-ordered dispatch.

use crate::word::U256;

// arithmetic

pub fn add(x: U256, y: U256) -> U256 {
    x.wrapping_add(y)
}

pub fn mul(x: U256, y: U256) -> U256 {
    x.wrapping_mul(y)
}

pub fn sub(x: U256, y: U256) -> U256 {
    x.wrapping_sub(y)
}

/// Zero if `y` is zero.
pub fn div(x: U256, y: U256) -> U256 {
    x.div_or_zero(y)
}

/// Zero if `y` is zero.
pub fn sdiv(x: U256, y: U256) -> U256 {
    x.signed_div(y)
}

/// `MOD`. Zero if `m` is zero.
pub fn modulo(x: U256, m: U256) -> U256 {
    x.rem_or_zero(m)
}

/// Zero if `m` is zero.
pub fn smod(x: U256, m: U256) -> U256 {
    x.signed_rem(m)
}

pub fn add_mod(x: U256, y: U256, m: U256) -> U256 {
    x.add_mod(y, m)
}

pub fn mul_mod(x: U256, y: U256, m: U256) -> U256 {
    x.mul_mod(y, m)
}

pub fn exp(base: U256, exponent: U256) -> U256 {
    base.wrapping_pow(exponent)
}

pub fn sign_extend(value: U256, byte_index: U256) -> U256 {
    value.sign_extend(byte_index)
}

// comparison

pub fn lt(x: U256, y: U256) -> bool {
    x < y
}

pub fn gt(x: U256, y: U256) -> bool {
    x > y
}

pub fn slt(x: U256, y: U256) -> bool {
    x.signed_lt(&y)
}

pub fn sgt(x: U256, y: U256) -> bool {
    x.signed_gt(&y)
}

pub fn eq(x: U256, y: U256) -> bool {
    x == y
}

pub fn is_zero(x: U256) -> bool {
    x.is_zero()
}

// bitwise

pub fn and(x: U256, y: U256) -> U256 {
    x & y
}

pub fn or(x: U256, y: U256) -> U256 {
    x | y
}

pub fn xor(x: U256, y: U256) -> U256 {
    x ^ y
}

pub fn not(x: U256) -> U256 {
    !x
}

/// Byte `index` from the most significant end.
pub fn byte(value: U256, index: U256) -> U256 {
    value.byte(index)
}

pub fn shl(value: U256, shift: U256) -> U256 {
    value.shift_left(shift)
}

pub fn shr(value: U256, shift: U256) -> U256 {
    value.shift_right(shift)
}

pub fn sar(value: U256, shift: U256) -> U256 {
    value.arithmetic_shift_right(shift)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::arithmetic::tests::{sample_word, NUM_TESTS};
    use crate::utils::u256_to_bigint_signed;

    fn w(v: u64) -> U256 {
        U256::from(v)
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(add(U256::MAX, w(1)), U256::ZERO);
        assert_eq!(sub(w(0), w(1)), U256::MAX);
        assert_eq!(mul(U256::SIGNED_MIN, w(2)), U256::ZERO);
    }

    #[test]
    fn test_division_by_zero_totality() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..NUM_TESTS {
            let a = sample_word(&mut rng);
            let b = sample_word(&mut rng);
            assert_eq!(div(a, U256::zero()), U256::zero());
            assert_eq!(modulo(a, U256::zero()), U256::zero());
            assert_eq!(sdiv(a, U256::zero()), U256::zero());
            assert_eq!(smod(a, U256::zero()), U256::zero());
            assert_eq!(add_mod(a, b, U256::zero()), U256::zero());
            assert_eq!(mul_mod(a, b, U256::zero()), U256::zero());
        }
        assert_eq!(div(w(10), w(0)), w(0));
        assert_eq!(modulo(w(10), w(0)), w(0));
    }

    #[test]
    fn test_sdiv_overflow_wraps() {
        assert_eq!(sdiv(U256::SIGNED_MIN, U256::all_ones()), U256::SIGNED_MIN);
        assert_eq!(sdiv(U256::from(-8i64), U256::from(-1i64)), w(8));
    }

    #[test]
    fn test_byte_indexing() {
        assert_eq!(byte(w(0x01), w(31)), w(1));
        assert_eq!(byte(w(0x01), w(0)), w(0));
    }

    #[test]
    fn test_shl_boundary() {
        assert_eq!(shl(w(1), w(256)), U256::ZERO);
        assert_eq!(shl(w(1), w(4)), w(16));
        assert_eq!(shr(w(16), w(4)), w(1));
        assert_eq!(sar(U256::MAX, w(256)), U256::MAX);
        assert_eq!(sar(U256::SIGNED_MAX, w(256)), U256::ZERO);
    }

    #[test]
    fn test_sign_extend_low_byte() {
        assert_eq!(sign_extend(w(0x7f), w(0)), w(0x7f));
        let extended = sign_extend(w(0x80), w(0));
        assert_eq!(extended, !w(0x7f));
        assert_eq!(and(extended, w(0xff)), w(0x80));
    }

    #[test]
    fn test_comparisons() {
        assert!(lt(w(1), w(2)));
        assert!(gt(U256::MAX, w(2)));
        assert!(slt(U256::MAX, w(2)));
        assert!(sgt(w(2), U256::MAX));
        assert!(eq(U256::MAX, U256::all_ones()));
        assert!(is_zero(U256::zero()));
        assert!(!is_zero(w(1)));
    }

    #[test]
    fn test_slt_matches_signed_integers() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x517);
        for _ in 0..NUM_TESTS {
            let a = sample_word(&mut rng);
            let b = sample_word(&mut rng);
            let (ai, bi) = (u256_to_bigint_signed(a), u256_to_bigint_signed(b));
            assert_eq!(slt(a, b), ai < bi);
            assert_eq!(sgt(a, b), ai > bi);
        }
    }

    #[test]
    fn test_bitwise() {
        let x = w(0b1100);
        let y = w(0b1010);
        assert_eq!(and(x, y), w(0b1000));
        assert_eq!(or(x, y), w(0b1110));
        assert_eq!(xor(x, y), w(0b0110));
        assert_eq!(not(U256::ZERO), U256::MAX);
        assert_eq!(exp(w(2), w(10)), w(1024));
    }
}
