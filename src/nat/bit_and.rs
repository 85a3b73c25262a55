//! [`Nat`] bitwise AND and AND-NOT.

use crate::{Limb, Nat};
use core::ops::{BitAnd, BitAndAssign};

impl Nat {
    pub(crate) fn and_nat(&self, rhs: &Nat) -> Nat {
        let m = self.limbs.len().min(rhs.limbs.len());

        let mut z = Nat::zero();
        z.resize_for(m, 0);
        for i in 0..m {
            z.limbs[i] = Limb(self.limbs[i].0 & rhs.limbs[i].0);
        }

        z.cnorm(0);
        z
    }

    /// Computes `self & !rhs`, normalized.
    pub fn and_not(&self, rhs: &Nat) -> Nat {
        let m = self.limbs.len();
        let n = rhs.limbs.len().min(m);
        // m >= n

        let mut z = Nat::zero();
        z.resize_for(m, 0);
        for i in 0..n {
            z.limbs[i] = Limb(self.limbs[i].0 & !rhs.limbs[i].0);
        }
        z.limbs[n..m].copy_from_slice(&self.limbs[n..m]);

        z.cnorm(0);
        z
    }
}

impl BitAnd<&Nat> for &Nat {
    type Output = Nat;

    fn bitand(self, rhs: &Nat) -> Nat {
        self.and_nat(rhs)
    }
}

impl BitAnd<&Nat> for Nat {
    type Output = Nat;

    fn bitand(self, rhs: &Nat) -> Nat {
        self.and_nat(rhs)
    }
}

impl BitAnd<Nat> for Nat {
    type Output = Nat;

    fn bitand(self, rhs: Nat) -> Nat {
        self.and_nat(&rhs)
    }
}

impl BitAndAssign<&Nat> for Nat {
    fn bitand_assign(&mut self, rhs: &Nat) {
        *self = self.and_nat(rhs);
    }
}
