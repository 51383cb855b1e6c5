//! Word geometry

pub const LIMB_BITS: usize = 64;
pub const WORD_BITS: usize = 256;
pub const WORD_BYTES: usize = WORD_BITS / 8;
pub const LIMB_BYTES: usize = LIMB_BITS / 8;

/// Return the number of LIMB_BITS limbs that are in an EVM
/// word-sized number, panicking if LIMB_BITS doesn't divide in
/// the word size.
const fn n_limbs() -> usize {
    if WORD_BITS % LIMB_BITS != 0 {
        panic!("limb size must divide word size");
    }
    let n = WORD_BITS / LIMB_BITS;
    if n % 2 == 1 {
        panic!("number of limbs must be even");
    }
    n
}

/// Number of LIMB_BITS limbs that are in one word.
pub const N_LIMBS: usize = n_limbs(); // 4

/// Index of the sign bit of a word.
pub const SIGN_BIT: usize = WORD_BITS - 1;

static_assertions::const_assert_eq!(N_LIMBS * LIMB_BYTES, WORD_BYTES);
static_assertions::const_assert_eq!(LIMB_BITS, u64::BITS as usize);
