//! Modular addition and multiplication with an explicit modulus.
//!
//! The intermediate sum (257 bits) and product (512 bits) are reduced
//! without first truncating them to a word.

use crate::constants::N_LIMBS;
use crate::word::limbs;
use crate::word::U256;

impl U256 {
    /// (self + rhs) mod m over the untruncated sum. Zero when `m` is zero.
    pub fn add_mod(self, rhs: U256, m: U256) -> U256 {
        if m.is_zero() {
            return U256::ZERO;
        }
        if self < m && rhs < m {
            // Both operands already reduced: at most one subtraction of m.
            let (sum, carry) = self.overflowing_add(rhs);
            return if carry || sum >= m {
                sum.wrapping_sub(m)
            } else {
                sum
            };
        }
        let mut sum = [0u64; N_LIMBS + 1];
        sum[..N_LIMBS].copy_from_slice(&self.0);
        sum[N_LIMBS] = limbs::add_assign(&mut sum[..N_LIMBS], &rhs.0);
        U256(limbs::div_rem(&sum, &m.0).1)
    }

    /// (self * rhs) mod m over the full 512-bit product. Zero when `m` is
    /// zero.
    pub fn mul_mod(self, rhs: U256, m: U256) -> U256 {
        if m.is_zero() || self.is_zero() || rhs.is_zero() {
            return U256::ZERO;
        }
        let prod = limbs::mul_wide(&self.0, &rhs.0);
        U256(limbs::div_rem(&prod, &m.0).1)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::arithmetic::tests::{sample_word, NUM_TESTS};
    use crate::utils::u256_to_biguint;
    use crate::word::U256;

    #[test]
    fn test_zero_modulus() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..100 {
            let a = sample_word(&mut rng);
            let b = sample_word(&mut rng);
            assert_eq!(a.add_mod(b, U256::ZERO), U256::ZERO);
            assert_eq!(a.mul_mod(b, U256::ZERO), U256::ZERO);
        }
    }

    #[test]
    fn test_no_intermediate_truncation() {
        // (2^256 - 1) + (2^256 - 1) = 2^257 - 2; mod (2^256 - 1) that is 0,
        // while the truncated sum 2^256 - 2 would leave 2^256 - 2.
        assert_eq!(U256::MAX.add_mod(U256::MAX, U256::MAX), U256::ZERO);
        let ten = U256::from(10u8);
        let expected = (u256_to_biguint(U256::MAX) * 2u8) % 10u8;
        assert_eq!(
            u256_to_biguint(U256::MAX.add_mod(U256::MAX, ten)),
            expected
        );
        // (2^256 - 1)^2 mod (2^256 - 2) = 1
        let m = U256::MAX.wrapping_sub(U256::ONE);
        assert_eq!(U256::MAX.mul_mod(U256::MAX, m), U256::ONE);
        assert_eq!(U256::MAX.mul_mod(U256::MAX, U256::MAX), U256::ZERO);
    }

    #[test]
    fn test_modulus_one() {
        assert_eq!(U256::MAX.add_mod(U256::from(3u8), U256::ONE), U256::ZERO);
        assert_eq!(U256::MAX.mul_mod(U256::from(3u8), U256::ONE), U256::ZERO);
    }

    #[test]
    fn test_add_mul_mod_against_biguint() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x30d);
        for _ in 0..NUM_TESTS {
            let a = sample_word(&mut rng);
            let b = sample_word(&mut rng);
            let m = sample_word(&mut rng);
            if m.is_zero() {
                continue;
            }
            let (ab, bb, mb) = (u256_to_biguint(a), u256_to_biguint(b), u256_to_biguint(m));
            assert_eq!(u256_to_biguint(a.add_mod(b, m)), (&ab + &bb) % &mb);
            assert_eq!(u256_to_biguint(a.mul_mod(b, m)), (&ab * &bb) % &mb);
            // reduced operands take the short path
            let (ar, br) = (a.rem_or_zero(m), b.rem_or_zero(m));
            assert_eq!(ar.add_mod(br, m), a.add_mod(b, m));
        }
    }
}
