//! Unsigned and two's complement orderings.

use core::cmp::Ordering;

use itertools::Itertools;

use crate::word::U256;

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        // most significant limb first
        self.0
            .iter()
            .rev()
            .zip_eq(other.0.iter().rev())
            .map(|(a, b)| a.cmp(b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl U256 {
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Compares the two's complement readings of both words. Any word with
    /// the sign bit set is less than every word without it; within one sign
    /// class the unsigned order applies.
    pub fn signed_cmp(&self, other: &U256) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            _ => self.cmp(other),
        }
    }

    pub fn signed_lt(&self, other: &U256) -> bool {
        self.signed_cmp(other) == Ordering::Less
    }

    pub fn signed_gt(&self, other: &U256) -> bool {
        self.signed_cmp(other) == Ordering::Greater
    }
}
