use core::fmt;
use core::str::FromStr;

use super::limbs::{self, Limbs};
use super::U256;
use crate::constants::N_LIMBS;
use crate::error::WordError;

/// Largest power of ten that fits in a limb.
const TEN_19: u64 = 10_000_000_000_000_000_000;

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({:#066x})", self)
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // At most 78 decimal digits, i.e. five base-10^19 chunks.
        let mut chunks = Vec::with_capacity(5);
        let mut rest: Limbs = self.0;
        loop {
            let mut quot = [0u64; N_LIMBS];
            chunks.push(limbs::div_rem_by_limb(&rest, TEN_19, &mut quot));
            rest = quot;
            if rest.iter().all(|&limb| limb == 0) {
                break;
            }
        }
        let mut digits = String::with_capacity(80);
        let mut chunks = chunks.iter().rev();
        if let Some(top) = chunks.next() {
            digits.push_str(&top.to_string());
        }
        for chunk in chunks {
            digits.push_str(&format!("{chunk:019}"));
        }
        f.pad_integral(true, "", &digits)
    }
}

fn hex_digits(word: &U256, upper: bool) -> String {
    let len = limbs::significant_len(&word.0);
    if len == 0 {
        return "0".to_string();
    }
    let mut digits = String::with_capacity(64);
    for (i, limb) in word.0[..len].iter().enumerate().rev() {
        let chunk = match (upper, i + 1 == len) {
            (false, true) => format!("{limb:x}"),
            (false, false) => format!("{limb:016x}"),
            (true, true) => format!("{limb:X}"),
            (true, false) => format!("{limb:016X}"),
        };
        digits.push_str(&chunk);
    }
    digits
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &hex_digits(self, false))
    }
}

impl fmt::UpperHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &hex_digits(self, true))
    }
}

/// Parses a decimal literal, or a hexadecimal one with a `0x` prefix.
impl FromStr for U256 {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => (hex, 16u32),
            None => (s, 10u32),
        };
        if digits.is_empty() {
            log::debug!("rejecting empty literal {s:?}");
            return Err(WordError::Parse(s.to_string()));
        }

        let radix_word = U256::from(radix);
        let mut value = U256::ZERO;
        for c in digits.chars() {
            let digit = c
                .to_digit(radix)
                .ok_or_else(|| WordError::Parse(s.to_string()))?;
            let (shifted, hi) = value.widening_mul(radix_word);
            if !hi.is_zero() {
                return Err(WordError::Overflow);
            }
            let (next, carry) = shifted.overflowing_add(U256::from(digit));
            if carry {
                return Err(WordError::Overflow);
            }
            value = next;
        }
        Ok(value)
    }
}
