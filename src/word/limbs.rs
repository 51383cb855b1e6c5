//! Multi-limb primitives over little-endian `u64` limbs.
//!
//! Everything here works on fixed buffers; nothing allocates.

use itertools::Itertools;

use crate::constants::{LIMB_BITS, N_LIMBS, WORD_BITS};

pub(crate) type Limbs = [u64; N_LIMBS];

/// Limbs of a full double-width product.
pub(crate) type WideLimbs = [u64; 2 * N_LIMBS];

const LIMB_SHIFT: u32 = LIMB_BITS as u32;

/// Returns x + y + carry as (sum, carry_out).
#[inline]
pub(crate) const fn adc(x: u64, y: u64, carry: u64) -> (u64, u64) {
    let t = x as u128 + y as u128 + carry as u128;
    (t as u64, (t >> LIMB_SHIFT) as u64)
}

/// Returns x - y - borrow as (diff, borrow_out).
#[inline]
pub(crate) const fn sbb(x: u64, y: u64, borrow: u64) -> (u64, u64) {
    let t = (x as u128)
        .wrapping_sub(y as u128)
        .wrapping_sub(borrow as u128);
    (t as u64, (t >> (2 * LIMB_SHIFT - 1)) as u64)
}

/// Returns z + x * y + carry as (lo, hi). Cannot overflow 128 bits.
#[inline]
pub(crate) const fn mac(z: u64, x: u64, y: u64, carry: u64) -> (u64, u64) {
    let t = z as u128 + (x as u128) * (y as u128) + carry as u128;
    (t as u64, (t >> LIMB_SHIFT) as u64)
}

/// a += b over the first b.len() limbs of a, returning the carry out.
pub(crate) fn add_assign(a: &mut [u64], b: &[u64]) -> u64 {
    debug_assert!(a.len() >= b.len(), "expected {} >= {}", a.len(), b.len());
    let mut carry = 0;
    for (a_limb, &b_limb) in a.iter_mut().zip(b) {
        let (sum, c) = adc(*a_limb, b_limb, carry);
        *a_limb = sum;
        carry = c;
    }
    carry
}

/// a -= b over the first b.len() limbs of a, returning the borrow out.
pub(crate) fn sub_assign(a: &mut [u64], b: &[u64]) -> u64 {
    debug_assert!(a.len() >= b.len(), "expected {} >= {}", a.len(), b.len());
    let mut borrow = 0;
    for (a_limb, &b_limb) in a.iter_mut().zip(b) {
        let (diff, bout) = sbb(*a_limb, b_limb, borrow);
        *a_limb = diff;
        borrow = bout;
    }
    borrow
}

/// a -= m * b where a and b have the same length, returning the limb that
/// would have to be borrowed from above a.
fn sub_mul_assign(a: &mut [u64], b: &[u64], m: u64) -> u64 {
    let mut borrow = 0u64;
    for (a_limb, &b_limb) in a.iter_mut().zip_eq(b) {
        let (lo, hi) = mac(0, b_limb, m, borrow);
        let (diff, under) = a_limb.overflowing_sub(lo);
        *a_limb = diff;
        borrow = hi + under as u64;
    }
    borrow
}

/// Full 512-bit product of two words.
pub(crate) fn mul_wide(x: &Limbs, y: &Limbs) -> WideLimbs {
    let mut res = [0u64; 2 * N_LIMBS];
    for (i, &xi) in x.iter().enumerate() {
        let mut carry = 0;
        for (j, &yj) in y.iter().enumerate() {
            let (lo, hi) = mac(res[i + j], xi, yj, carry);
            res[i + j] = lo;
            carry = hi;
        }
        res[i + N_LIMBS] = carry;
    }
    res
}

/// Low 256 bits of x * y. Partial products landing above the word are
/// never formed.
pub(crate) fn mul_lo(x: &Limbs, y: &Limbs) -> Limbs {
    let mut res = [0u64; N_LIMBS];
    for (i, &xi) in x.iter().enumerate() {
        let mut carry = 0;
        for (j, &yj) in y.iter().take(N_LIMBS - i).enumerate() {
            let (lo, hi) = mac(res[i + j], xi, yj, carry);
            res[i + j] = lo;
            carry = hi;
        }
    }
    res
}

/// Number of limbs up to and including the most significant nonzero one.
pub(crate) fn significant_len(x: &[u64]) -> usize {
    x.iter().rposition(|&limb| limb != 0).map_or(0, |i| i + 1)
}

/// x << n for n < 256.
pub(crate) fn shl(x: &Limbs, n: u32) -> Limbs {
    debug_assert!((n as usize) < WORD_BITS);
    let limb_shift = (n / LIMB_SHIFT) as usize;
    let bit_shift = n % LIMB_SHIFT;
    let mut res = [0u64; N_LIMBS];
    for i in limb_shift..N_LIMBS {
        let src = i - limb_shift;
        res[i] = x[src] << bit_shift;
        if bit_shift > 0 && src > 0 {
            res[i] |= x[src - 1] >> (LIMB_SHIFT - bit_shift);
        }
    }
    res
}

/// x >> n (logical) for n < 256.
pub(crate) fn shr(x: &Limbs, n: u32) -> Limbs {
    debug_assert!((n as usize) < WORD_BITS);
    let limb_shift = (n / LIMB_SHIFT) as usize;
    let bit_shift = n % LIMB_SHIFT;
    let mut res = [0u64; N_LIMBS];
    for i in 0..N_LIMBS - limb_shift {
        let src = i + limb_shift;
        res[i] = x[src] >> bit_shift;
        if bit_shift > 0 && src + 1 < N_LIMBS {
            res[i] |= x[src + 1] << (LIMB_SHIFT - bit_shift);
        }
    }
    res
}

/// Shifts `src` left by `shift < 64` bits into `dst`. If `dst` is one limb
/// longer than `src` the bits shifted out land in its top limb, otherwise
/// they are dropped.
fn shl_into(src: &[u64], shift: u32, dst: &mut [u64]) {
    debug_assert!(shift < LIMB_SHIFT);
    debug_assert!(dst.len() == src.len() || dst.len() == src.len() + 1);
    let mut carry = 0u64;
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s << shift) | carry;
        carry = if shift == 0 {
            0
        } else {
            s >> (LIMB_SHIFT - shift)
        };
    }
    if let Some(top) = dst.get_mut(src.len()) {
        *top = carry;
    }
}

/// Divides the limbs of `u` (most significant last) by the single limb `d`,
/// writing the quotient into `quot` and returning the remainder.
pub(crate) fn div_rem_by_limb(u: &[u64], d: u64, quot: &mut [u64]) -> u64 {
    debug_assert!(d != 0);
    debug_assert!(quot.len() >= u.len());
    let d = d as u128;
    let mut rem = 0u128;
    for (i, &limb) in u.iter().enumerate().rev() {
        let num = (rem << LIMB_SHIFT) | limb as u128;
        quot[i] = (num / d) as u64;
        rem = num % d;
    }
    rem as u64
}

/// Unsigned long division of up to 2 * N_LIMBS limbs by a word.
///
/// Returns (quotient, remainder). A zero divisor yields (0, 0), the word
/// convention for division by zero.
pub(crate) fn div_rem(u: &[u64], d: &Limbs) -> (WideLimbs, Limbs) {
    debug_assert!(u.len() <= 2 * N_LIMBS, "dividend of {} limbs", u.len());
    let mut quot = [0u64; 2 * N_LIMBS];
    let mut rem = [0u64; N_LIMBS];

    let d_len = significant_len(d);
    if d_len == 0 {
        return (quot, rem);
    }
    let u_len = significant_len(u);
    if u_len < d_len {
        rem[..u_len].copy_from_slice(&u[..u_len]);
        return (quot, rem);
    }

    if d_len == 1 {
        rem[0] = div_rem_by_limb(&u[..u_len], d[0], &mut quot);
        return (quot, rem);
    }

    // Knuth, TAOCP vol. 2, 4.3.1, algorithm D. Normalize so that the top
    // divisor limb has its high bit set.
    let shift = d[d_len - 1].leading_zeros();
    let mut dn = [0u64; N_LIMBS];
    let mut un = [0u64; 2 * N_LIMBS + 1];
    shl_into(&d[..d_len], shift, &mut dn[..d_len]);
    shl_into(&u[..u_len], shift, &mut un[..=u_len]);

    let dh = dn[d_len - 1] as u128;
    let dl = dn[d_len - 2] as u128;
    for j in (0..=u_len - d_len).rev() {
        let num = ((un[j + d_len] as u128) << LIMB_SHIFT) | un[j + d_len - 1] as u128;
        let mut qhat = num / dh;
        let mut rhat = num % dh;
        while qhat >> LIMB_SHIFT != 0
            || qhat * dl > ((rhat << LIMB_SHIFT) | un[j + d_len - 2] as u128)
        {
            qhat -= 1;
            rhat += dh;
            if rhat >> LIMB_SHIFT != 0 {
                break;
            }
        }

        let mut qhat = qhat as u64;
        let borrow = sub_mul_assign(&mut un[j..j + d_len], &dn[..d_len], qhat);
        let (top, under) = un[j + d_len].overflowing_sub(borrow);
        un[j + d_len] = top;
        if under {
            // qhat was one too large
            qhat -= 1;
            let carry = add_assign(&mut un[j..j + d_len], &dn[..d_len]);
            un[j + d_len] = un[j + d_len].wrapping_add(carry);
        }
        quot[j] = qhat;
    }

    for i in 0..d_len {
        rem[i] = un[i] >> shift;
        if shift > 0 {
            rem[i] |= un[i + 1] << (LIMB_SHIFT - shift);
        }
    }
    (quot, rem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adc_sbb_carry_chain() {
        assert_eq!(adc(u64::MAX, 1, 0), (0, 1));
        assert_eq!(adc(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
        assert_eq!(sbb(0, 1, 0), (u64::MAX, 1));
        assert_eq!(sbb(5, 3, 1), (1, 0));
        assert_eq!(sbb(0, u64::MAX, 1), (0, 1));
    }

    #[test]
    fn test_mac_extremes() {
        assert_eq!(
            mac(u64::MAX, u64::MAX, u64::MAX, u64::MAX),
            (u64::MAX, u64::MAX)
        );
    }

    #[test]
    fn test_mul_wide_max() {
        // (2^256 - 1)^2 = 2^512 - 2^257 + 1
        let x = [u64::MAX; N_LIMBS];
        let prod = mul_wide(&x, &x);
        assert_eq!(prod, [1, 0, 0, 0, u64::MAX - 1, u64::MAX, u64::MAX, u64::MAX]);
        assert_eq!(mul_lo(&x, &x), [1, 0, 0, 0]);
    }

    #[test]
    fn test_shifts_across_limbs() {
        let x = [1, 0, 0, 0];
        assert_eq!(shl(&x, 64), [0, 1, 0, 0]);
        assert_eq!(shl(&x, 255), [0, 0, 0, 1 << 63]);
        assert_eq!(shr(&[0, 0, 0, 1 << 63], 255), x);
        assert_eq!(shr(&[0, 1, 0, 0], 1), [1 << 63, 0, 0, 0]);
        assert_eq!(shl(&[0x8000_0000_0000_0001, 0, 0, 0], 1), [2, 1, 0, 0]);
    }

    #[test]
    fn test_div_rem_single_limb() {
        let (q, r) = div_rem(&[10, 0, 0, 0], &[3, 0, 0, 0]);
        assert_eq!(q[..N_LIMBS], [3, 0, 0, 0]);
        assert_eq!(r, [1, 0, 0, 0]);
    }

    #[test]
    fn test_div_rem_zero_divisor() {
        let (q, r) = div_rem(&[10, 1, 2, 3], &[0; N_LIMBS]);
        assert_eq!(q, [0; 2 * N_LIMBS]);
        assert_eq!(r, [0; N_LIMBS]);
    }

    #[test]
    fn test_div_rem_wide_dividend() {
        // (2^512 - 2^257 + 1) / (2^256 - 1) = 2^256 - 1, remainder 0
        let x = [u64::MAX; N_LIMBS];
        let prod = mul_wide(&x, &x);
        let (q, r) = div_rem(&prod, &x);
        assert_eq!(q, [u64::MAX, u64::MAX, u64::MAX, u64::MAX, 0, 0, 0, 0]);
        assert_eq!(r, [0; N_LIMBS]);
    }

    #[test]
    fn test_div_rem_needs_add_back() {
        // Top divisor limb is already normalized, so the quotient digit is
        // estimated from the raw limbs.
        let u = [0, 0, 0x8000_0000_0000_0000, 0x7fff_ffff_ffff_ffff];
        let d = [1, 0, 0x8000_0000_0000_0000, 0];
        let (q, r) = div_rem(&u, &d);
        // check q * d + r == u
        let q_word = [q[0], q[1], q[2], q[3]];
        let mut back = mul_wide(&q_word, &d);
        assert_eq!(add_assign(&mut back, &r), 0);
        assert_eq!(back[..N_LIMBS], u);
        assert_eq!(back[N_LIMBS..], [0; N_LIMBS]);
        assert!(significant_len(&r) <= 3);
    }
}
