//! [`Nat`] addition.

use crate::{arith, Nat};
use core::ops::{Add, AddAssign};

impl Nat {
    /// Computes `self + rhs`, normalized.
    pub fn add_nat(&self, rhs: &Nat) -> Nat {
        self.add_zcap(rhs, 0)
    }

    /// Constant-time [`Nat::add_nat`]: the result is padded to exactly
    /// `zcap` limbs.
    ///
    /// Panics if the sum does not fit `zcap` limbs.
    pub fn ct_add(&self, rhs: &Nat, zcap: usize) -> Nat {
        self.add_zcap(rhs, zcap)
    }

    pub(crate) fn add_zcap(&self, rhs: &Nat, zcap: usize) -> Nat {
        let m = self.limbs.len();
        let n = rhs.limbs.len();

        if m < n {
            return rhs.add_zcap(self, zcap);
        }
        if m == 0 {
            // n == 0 because m >= n; result is 0
            let mut z = Nat::zero();
            z.resize_for(0, zcap);
            return z;
        }
        if n == 0 {
            // result is self
            return Nat::ct_set(self, zcap);
        }
        // m >= n > 0

        let mut z = Nat::zero();
        z.resize_for(m + 1, zcap);
        let mut c = arith::add_vv(&mut z.limbs[..n], &self.limbs[..n], &rhs.limbs);
        if m > n {
            c = arith::add_vw(&mut z.limbs[n..m], &self.limbs[n..], c);
        }
        z.limbs[m] = c;

        z.cnorm(zcap);
        z
    }
}

impl Add for Nat {
    type Output = Nat;

    fn add(self, rhs: Nat) -> Nat {
        self.add_nat(&rhs)
    }
}

impl Add<&Nat> for Nat {
    type Output = Nat;

    fn add(self, rhs: &Nat) -> Nat {
        self.add_nat(rhs)
    }
}

impl Add<&Nat> for &Nat {
    type Output = Nat;

    fn add(self, rhs: &Nat) -> Nat {
        self.add_nat(rhs)
    }
}

impl Add<Nat> for &Nat {
    type Output = Nat;

    fn add(self, rhs: Nat) -> Nat {
        self.add_nat(&rhs)
    }
}

impl AddAssign<Nat> for Nat {
    fn add_assign(&mut self, rhs: Nat) {
        *self = self.add_nat(&rhs);
    }
}

impl AddAssign<&Nat> for Nat {
    fn add_assign(&mut self, rhs: &Nat) {
        *self = self.add_nat(rhs);
    }
}
