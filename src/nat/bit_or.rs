//! [`Nat`] bitwise OR.

use crate::{Limb, Nat};
use core::ops::{BitOr, BitOrAssign};

impl Nat {
    pub(crate) fn or_nat(&self, rhs: &Nat) -> Nat {
        let (long, short) = if self.limbs.len() >= rhs.limbs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let m = long.limbs.len();
        let n = short.limbs.len();
        // m >= n

        let mut z = Nat::zero();
        z.resize_for(m, 0);
        for i in 0..n {
            z.limbs[i] = Limb(long.limbs[i].0 | short.limbs[i].0);
        }
        z.limbs[n..m].copy_from_slice(&long.limbs[n..m]);

        z.cnorm(0);
        z
    }
}

impl BitOr<&Nat> for &Nat {
    type Output = Nat;

    fn bitor(self, rhs: &Nat) -> Nat {
        self.or_nat(rhs)
    }
}

impl BitOr<&Nat> for Nat {
    type Output = Nat;

    fn bitor(self, rhs: &Nat) -> Nat {
        self.or_nat(rhs)
    }
}

impl BitOr<Nat> for Nat {
    type Output = Nat;

    fn bitor(self, rhs: Nat) -> Nat {
        self.or_nat(&rhs)
    }
}

impl BitOrAssign<&Nat> for Nat {
    fn bitor_assign(&mut self, rhs: &Nat) {
        *self = self.or_nat(rhs);
    }
}
