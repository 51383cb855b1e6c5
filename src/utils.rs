use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;

use crate::constants::{N_LIMBS, WORD_BITS, WORD_BYTES};
use crate::error::WordError;
use crate::word::U256;

pub fn u256_to_biguint(x: U256) -> BigUint {
    BigUint::from_bytes_be(&x.to_bytes_be())
}

/// Fails with [`WordError::Overflow`] if `x` needs more than 256 bits.
pub fn biguint_to_u256(x: &BigUint) -> Result<U256, WordError> {
    if x.bits() > WORD_BITS as u64 {
        log::debug!("{}-bit integer does not fit in a word", x.bits());
        return Err(WordError::Overflow);
    }
    Ok(low_word(x))
}

/// The two's complement reading of `x` as an integer in [-2^255, 2^255).
pub fn u256_to_bigint_signed(x: U256) -> BigInt {
    let magnitude = BigInt::from(u256_to_biguint(x));
    if x.is_negative() {
        magnitude - (BigInt::one() << WORD_BITS)
    } else {
        magnitude
    }
}

/// `x` reduced modulo 2^256, so negative integers land on their two's
/// complement encoding.
pub fn bigint_to_u256_wrapping(x: &BigInt) -> U256 {
    let low = low_word(x.magnitude());
    match x.sign() {
        Sign::Minus => low.wrapping_neg(),
        Sign::NoSign | Sign::Plus => low,
    }
}

/// The least significant 256 bits of `x`.
fn low_word(x: &BigUint) -> U256 {
    let mut limbs = [0u64; N_LIMBS];
    for (limb, digit) in limbs.iter_mut().zip(x.iter_u64_digits()) {
        *limb = digit;
    }
    U256::from_limbs(limbs)
}

impl From<U256> for BigUint {
    fn from(x: U256) -> Self {
        u256_to_biguint(x)
    }
}

impl TryFrom<&BigUint> for U256 {
    type Error = WordError;

    fn try_from(x: &BigUint) -> Result<Self, Self::Error> {
        biguint_to_u256(x)
    }
}

impl TryFrom<BigUint> for U256 {
    type Error = WordError;

    fn try_from(x: BigUint) -> Result<Self, Self::Error> {
        biguint_to_u256(&x)
    }
}

static_assertions::const_assert_eq!(WORD_BYTES * 8, WORD_BITS);

#[cfg(test)]
mod tests {
    use num_bigint::{BigInt, BigUint};
    use num_traits::One;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::arithmetic::tests::{sample_word, NUM_TESTS};

    #[test]
    fn test_biguint_round_trip() -> anyhow::Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(0xb16);
        for _ in 0..NUM_TESTS {
            let x = sample_word(&mut rng);
            assert_eq!(U256::try_from(BigUint::from(x))?, x);
            assert_eq!(bigint_to_u256_wrapping(&u256_to_bigint_signed(x)), x);
        }
        Ok(())
    }

    #[test]
    fn test_biguint_overflow() {
        let too_big = BigUint::one() << 256;
        assert_eq!(biguint_to_u256(&too_big), Err(WordError::Overflow));
        let max = too_big - 1u8;
        assert_eq!(biguint_to_u256(&max), Ok(U256::MAX));
    }

    #[test]
    fn test_signed_reading() {
        assert_eq!(u256_to_bigint_signed(U256::MAX), BigInt::from(-1));
        assert_eq!(
            u256_to_bigint_signed(U256::SIGNED_MIN),
            -(BigInt::one() << 255usize)
        );
        assert_eq!(
            u256_to_bigint_signed(U256::SIGNED_MAX),
            (BigInt::one() << 255) - 1
        );
        assert_eq!(bigint_to_u256_wrapping(&BigInt::from(-8)), U256::from(-8i64));
        assert_eq!(bigint_to_u256_wrapping(&(BigInt::one() << 256)), U256::ZERO);
        assert_eq!(
            bigint_to_u256_wrapping(&-(BigInt::one() << 256usize)),
            U256::ZERO
        );
    }
}
