//! [`Nat`] comparison.

use crate::{arith, word, Nat};
use core::cmp::Ordering;

impl Nat {
    /// Compare the numeric values of `self` and `rhs`.
    ///
    /// Limb scans never short-circuit: the ordering is derived from flags
    /// folded over the low common limbs plus the upper tail of the longer
    /// operand. Only the (public) lengths influence control flow.
    pub fn cmp_nat(&self, rhs: &Nat) -> Ordering {
        let m = self.limbs.len();
        let n = rhs.limbs.len();

        if m < n {
            return rhs.cmp_nat(self).reverse();
        }
        if m == 0 {
            // n == 0 because m >= n
            return Ordering::Equal;
        }
        // m > 0

        let (lt, ne) = arith::cmp_vv(&self.limbs[..n], &rhs.limbs);
        let (lt, ne) = if m > n {
            arith::cmp_vw(&self.limbs[n..], lt, ne)
        } else {
            (lt, ne)
        };
        let gt = 1 - (lt | word::czero(ne));

        match gt as i8 - lt as i8 {
            -1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }
}

impl PartialEq for Nat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_nat(other) == Ordering::Equal
    }
}

impl Eq for Nat {}

impl PartialOrd for Nat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Nat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_nat(other)
    }
}
