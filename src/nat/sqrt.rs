//! [`Nat`] integer square root.

use crate::Nat;
use core::cmp::Ordering;

impl Nat {
    /// Computes `⌊√self⌋`.
    ///
    /// Uses Brent & Zimmermann, Modern Computer Arithmetic, Algorithm 1.13
    /// (SqrtInt): start from a power of two known to be too large and repeat
    /// `z = ⌊(z + ⌊self/z⌋)/2⌋` until it stops shrinking. If `self` is one
    /// less than a perfect square the sequence oscillates between the answer
    /// and the answer plus one; the exit condition returns the former.
    pub fn sqrt(&self) -> Nat {
        if self.cmp_nat(&Nat::one()) != Ordering::Greater {
            let mut z = self.clone();
            z.cnorm(0);
            return z;
        }

        let mut z1 = Nat::one().shl(self.bit_len() / 2 + 1); // ≥ √self
        loop {
            let q = self.div_rem(&z1).0;
            let z2 = q.add_nat(&z1).shr(1);
            if z2.cmp_nat(&z1) != Ordering::Less {
                return z1;
            }
            z1 = z2;
        }
    }
}
