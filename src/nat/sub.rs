//! [`Nat`] subtraction.

use crate::{arith, word, Limb, Nat};
use core::ops::{Sub, SubAssign};

impl Nat {
    /// Computes `self - rhs`, normalized.
    ///
    /// Panics with `"underflow"` if `rhs > self`.
    pub fn sub_nat(&self, rhs: &Nat) -> Nat {
        self.sub_zcap(rhs, 0)
    }

    /// Constant-time [`Nat::sub_nat`]: the result is padded to exactly
    /// `zcap` limbs.
    ///
    /// Panics with `"underflow"` if `rhs > self`.
    pub fn ct_sub(&self, rhs: &Nat, zcap: usize) -> Nat {
        self.sub_zcap(rhs, zcap)
    }

    pub(crate) fn sub_zcap(&self, rhs: &Nat, zcap: usize) -> Nat {
        let m = self.limbs.len();
        let n = rhs.limbs.len();

        let mut z = Nat::zero();
        let c;
        if m < n {
            // Not necessarily an underflow: rhs may be denormalized with a
            // tail of zero limbs above m. The tail folds into the borrow
            // through a constant-time zero test.
            z.resize_for(m, zcap);
            let b = arith::sub_vv(&mut z.limbs[..m], &self.limbs, &rhs.limbs[..m]);
            c = Limb(b.0 | (1 - word::czero(arith::nonzero(&rhs.limbs[m..]))));
        } else if m == 0 {
            // n == 0 because m >= n; result is 0
            z.resize_for(0, zcap);
            return z;
        } else if n == 0 {
            // result is self
            return Nat::ct_set(self, zcap);
        } else if m > n {
            z.resize_for(m, zcap);
            let b = arith::sub_vv(&mut z.limbs[..n], &self.limbs[..n], &rhs.limbs);
            c = arith::sub_vw(&mut z.limbs[n..m], &self.limbs[n..], b);
        } else {
            // m == n
            z.resize_for(m, zcap);
            c = arith::sub_vv(&mut z.limbs[..m], &self.limbs, &rhs.limbs);
        }
        if c.0 != 0 {
            panic!("underflow");
        }

        z.cnorm(zcap);
        z
    }
}

impl Sub for Nat {
    type Output = Nat;

    fn sub(self, rhs: Nat) -> Nat {
        self.sub_nat(&rhs)
    }
}

impl Sub<&Nat> for Nat {
    type Output = Nat;

    fn sub(self, rhs: &Nat) -> Nat {
        self.sub_nat(rhs)
    }
}

impl Sub<&Nat> for &Nat {
    type Output = Nat;

    fn sub(self, rhs: &Nat) -> Nat {
        self.sub_nat(rhs)
    }
}

impl Sub<Nat> for &Nat {
    type Output = Nat;

    fn sub(self, rhs: Nat) -> Nat {
        self.sub_nat(&rhs)
    }
}

impl SubAssign<Nat> for Nat {
    fn sub_assign(&mut self, rhs: Nat) {
        *self = self.sub_nat(&rhs);
    }
}

impl SubAssign<&Nat> for Nat {
    fn sub_assign(&mut self, rhs: &Nat) {
        *self = self.sub_nat(rhs);
    }
}
