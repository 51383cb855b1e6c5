//! [`U256`] related definitions.

pub(crate) mod limbs;

mod fmt;

use byteorder::{BigEndian, ByteOrder};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::constants::{LIMB_BYTES, N_LIMBS, WORD_BYTES};
use crate::error::WordError;
use limbs::Limbs;

/// [`U256`] is a 256-bit value and the fundamental unit of data of an
/// EVM-style stack machine. All arithmetic is total and wraps modulo 2^256;
/// the signed operations read the same bits as two's complement.
///
/// Limbs are stored least significant first. That layout is never
/// observable: byte import and export are always big-endian.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U256(pub(crate) Limbs);

static_assertions::assert_eq_size!(U256, [u8; WORD_BYTES]);
static_assertions::assert_impl_all!(U256: Copy, Send, Sync);

impl U256 {
    /// All zero bit pattern.
    pub const ZERO: U256 = U256([0; N_LIMBS]);
    /// 1.
    pub const ONE: U256 = U256([1, 0, 0, 0]);
    /// All bits set to one: 2^256 - 1, or -1 when read as signed.
    pub const MAX: U256 = U256([u64::MAX; N_LIMBS]);
    /// Only the sign bit set: -2^255, the smallest signed value.
    pub const SIGNED_MIN: U256 = U256([0, 0, 0, 1 << 63]);
    /// Every bit but the sign bit set: 2^255 - 1.
    pub const SIGNED_MAX: U256 = U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 1]);

    pub const fn zero() -> U256 {
        U256::ZERO
    }

    pub const fn one() -> U256 {
        U256::ONE
    }

    pub const fn all_ones() -> U256 {
        U256::MAX
    }

    /// Creates a word from four limbs, least significant first.
    pub const fn from_limbs(limbs: [u64; N_LIMBS]) -> U256 {
        U256(limbs)
    }

    /// The limbs of the word, least significant first.
    pub const fn as_limbs(&self) -> &[u64; N_LIMBS] {
        &self.0
    }

    /// Interprets 32 bytes as a big-endian number.
    pub fn from_bytes_be(bytes: [u8; WORD_BYTES]) -> U256 {
        let mut limbs = [0u64; N_LIMBS];
        for (i, chunk) in bytes.chunks_exact(LIMB_BYTES).enumerate() {
            limbs[N_LIMBS - 1 - i] = BigEndian::read_u64(chunk);
        }
        U256(limbs)
    }

    /// Big-endian bytes of the word, most significant byte first.
    pub fn to_bytes_be(&self) -> [u8; WORD_BYTES] {
        let mut bytes = [0u8; WORD_BYTES];
        for (i, chunk) in bytes.chunks_exact_mut(LIMB_BYTES).enumerate() {
            BigEndian::write_u64(chunk, self.0[N_LIMBS - 1 - i]);
        }
        bytes
    }

    /// Like [`U256::from_bytes_be`], for a slice whose length is only known
    /// at runtime. Anything but exactly 32 bytes is rejected.
    pub fn from_be_slice(bytes: &[u8]) -> Result<U256, WordError> {
        let bytes: [u8; WORD_BYTES] = bytes.try_into().map_err(|_| {
            log::debug!("rejecting {}-byte word import", bytes.len());
            WordError::invalid_length(bytes.len())
        })?;
        Ok(U256::from_bytes_be(bytes))
    }

    /// The least significant 64 bits.
    pub const fn low_u64(&self) -> u64 {
        self.0[0]
    }

    /// Returns true if the value is below 2^64.
    pub fn fits_u64(&self) -> bool {
        self.0[1..].iter().all(|&limb| limb == 0)
    }

    /// The value as a `u64`, or `None` if it does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.fits_u64().then_some(self.0[0])
    }

    /// Returns the bit at position `n` (0 = least significant). Positions
    /// past the word read as zero.
    pub fn bit(&self, n: usize) -> bool {
        self.0
            .get(n / 64)
            .map_or(false, |limb| (limb >> (n % 64)) & 1 == 1)
    }
}

impl From<bool> for U256 {
    fn from(value: bool) -> Self {
        U256([value as u64, 0, 0, 0])
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for U256 {
                fn from(value: $t) -> Self {
                    U256([value as u64, 0, 0, 0])
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        U256([value as u64, (value >> 64) as u64, 0, 0])
    }
}

// Signed integers are sign-extended, so -1 becomes the all ones word.
macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for U256 {
                fn from(value: $t) -> Self {
                    let fill = if value < 0 { u64::MAX } else { 0 };
                    U256([value as i64 as u64, fill, fill, fill])
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);

impl From<i128> for U256 {
    fn from(value: i128) -> Self {
        let fill = if value < 0 { u64::MAX } else { 0 };
        U256([value as u64, (value >> 64) as u64, fill, fill])
    }
}

impl From<[u8; WORD_BYTES]> for U256 {
    fn from(bytes: [u8; WORD_BYTES]) -> Self {
        U256::from_bytes_be(bytes)
    }
}

impl From<U256> for [u8; WORD_BYTES] {
    fn from(value: U256) -> Self {
        value.to_bytes_be()
    }
}

impl TryFrom<&[u8]> for U256 {
    type Error = WordError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        U256::from_be_slice(bytes)
    }
}

impl TryFrom<U256> for u64 {
    type Error = WordError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        value.to_u64().ok_or(WordError::Overflow)
    }
}

impl TryFrom<U256> for u128 {
    type Error = WordError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let U256([l0, l1, l2, l3]) = value;
        if l2 != 0 || l3 != 0 {
            return Err(WordError::Overflow);
        }
        Ok(((l1 as u128) << 64) | l0 as u128)
    }
}

/// Uniformly random words.
impl Distribution<U256> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> U256 {
        U256(rng.gen())
    }
}
