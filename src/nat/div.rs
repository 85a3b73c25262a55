//! [`Nat`] division.

use crate::{arith, pool, Limb, Nat};
use core::cmp::Ordering;
use core::ops::{Div, DivAssign, Rem, RemAssign};

/// Reports whether the double-limb `(x1, x2)` exceeds `(y1, y2)`.
fn greater_than(x1: Limb, x2: Limb, y1: Limb, y2: Limb) -> bool {
    x1.0 > y1.0 || (x1.0 == y1.0 && x2.0 > y2.0)
}

impl Nat {
    /// Computes `self / v` and `self % v`, both normalized.
    ///
    /// Panics with `"division by zero"` if `v` is zero.
    pub fn div_rem(&self, v: &Nat) -> (Nat, Nat) {
        if v.limbs.is_empty() {
            panic!("division by zero");
        }

        if self.cmp_nat(v) == Ordering::Less {
            let mut r = self.clone();
            r.cnorm(0);
            return (Nat::zero(), r);
        }

        if v.limbs.len() == 1 {
            let (q, r) = self.div_rem_word(v.limbs[0]);
            return (q, Nat::from_word(r.0));
        }

        self.div_large(v)
    }

    /// Short division by a single limb: returns the quotient and the
    /// remainder limb.
    ///
    /// Panics with `"division by zero"` if `d` is zero.
    pub fn div_rem_word(&self, d: Limb) -> (Nat, Limb) {
        let m = self.limbs.len();
        if d.0 == 0 {
            panic!("division by zero");
        }
        if d.0 == 1 {
            // result is self
            let mut q = self.clone();
            q.cnorm(0);
            return (q, Limb::ZERO);
        }
        if m == 0 {
            return (Nat::zero(), Limb::ZERO);
        }
        // m > 0

        let mut z = Nat::zero();
        z.resize_for(m, 0);
        let r = arith::div_wvw(&mut z.limbs, Limb::ZERO, &self.limbs, d);
        z.cnorm(0);
        (z, r)
    }

    /// Computes `self % d` for a single limb `d` without materializing the
    /// quotient in a fresh allocation.
    ///
    /// Panics with `"division by zero"` if `d` is zero.
    pub fn rem_word(&self, d: Limb) -> Limb {
        if d.0 == 0 {
            panic!("division by zero");
        }
        let mut q = pool::get(self.limbs.len());
        let r = arith::div_wvw(&mut q, Limb::ZERO, &self.limbs, d);
        pool::put(q);
        r
    }

    /// Knuth, Volume 2, section 4.3.1, Algorithm D.
    ///
    /// Preconditions: `v` has at least 2 limbs, `self >= v`, both normalized.
    fn div_large(&self, v: &Nat) -> (Nat, Nat) {
        debug_assert!(v.normalized());
        let n = v.limbs.len();
        let m = self.limbs.len() - n;
        let ulen = self.limbs.len();

        let mut q = Nat::zero();
        q.resize_for(m + 1, 0);
        let mut qhatv = pool::get(n + 1);

        // D1: normalize so the divisor's top bit is set. The divisor must
        // not be shifted in place — it may be shared with another thread —
        // so the shifted copy lives in a pool buffer.
        let shift = v.limbs[n - 1].leading_zeros();
        let v1 = if shift > 0 {
            let mut v1 = pool::get(n);
            arith::shl_vu(&mut v1, &v.limbs, shift);
            Some(v1)
        } else {
            None
        };
        let vv: &[Limb] = v1.as_deref().unwrap_or(&v.limbs);

        let mut u = pool::get(ulen + 1);
        let carry = arith::shl_vu(&mut u[..ulen], &self.limbs, shift);
        u[ulen] = carry;

        // D2.
        let vn1 = vv[n - 1];
        let vn2 = vv[n - 2];
        for j in (0..=m).rev() {
            // D3: estimate the quotient digit from the top two limbs of u
            // and the top limb of v.
            let mut qhat = Limb::MAX;
            let ujn = u[j + n];
            if ujn != vn1 {
                let (mut qh, mut rhat) = Limb::div_wide(ujn, u[j + n - 1], vn1);

                // refine the estimate against the second divisor limb:
                // while q̂·v[n-2] > r̂·b + u[j+n-2], decrement q̂
                let (mut x2, mut x1) = qh.mul_wide(vn2);
                let ujn2 = u[j + n - 2];
                while greater_than(x1, x2, rhat, ujn2) {
                    qh = qh.wrapping_sub(Limb::ONE);
                    let prev_rhat = rhat;
                    rhat = rhat.wrapping_add(vn1);
                    // r̂ overflowed: q̂·v[n-2] can no longer exceed r̂·b
                    if rhat.0 < prev_rhat.0 {
                        break;
                    }
                    let (lo, hi) = qh.mul_wide(vn2);
                    x1 = hi;
                    x2 = lo;
                }
                qhat = qh;
            }

            // D4: multiply and subtract.
            let c = arith::mul_add_vww(&mut qhatv[..n], vv, qhat, Limb::ZERO);
            qhatv[n] = c;

            let b = arith::sub_vv_assign(&mut u[j..j + n + 1], &qhatv);
            if b.0 != 0 {
                // q̂ was one too large: add the divisor back
                let c = arith::add_vv_assign(&mut u[j..j + n], vv);
                u[j + n] = u[j + n].wrapping_add(c);
                qhat = qhat.wrapping_sub(Limb::ONE);
            }

            q.limbs[j] = qhat;
        }
        if let Some(v1) = v1 {
            pool::put(v1);
        }
        pool::put(qhatv);

        // D8: denormalize the remainder.
        q.cnorm(0);
        arith::shr_vu_assign(&mut u, shift);
        let mut r = Nat { limbs: u };
        r.cnorm(0);

        (q, r)
    }
}

impl Div<&Nat> for &Nat {
    type Output = Nat;

    fn div(self, rhs: &Nat) -> Nat {
        self.div_rem(rhs).0
    }
}

impl Div<&Nat> for Nat {
    type Output = Nat;

    fn div(self, rhs: &Nat) -> Nat {
        self.div_rem(rhs).0
    }
}

impl Div<Nat> for Nat {
    type Output = Nat;

    fn div(self, rhs: Nat) -> Nat {
        self.div_rem(&rhs).0
    }
}

impl DivAssign<&Nat> for Nat {
    fn div_assign(&mut self, rhs: &Nat) {
        *self = self.div_rem(rhs).0;
    }
}

impl Rem<&Nat> for &Nat {
    type Output = Nat;

    fn rem(self, rhs: &Nat) -> Nat {
        self.div_rem(rhs).1
    }
}

impl Rem<&Nat> for Nat {
    type Output = Nat;

    fn rem(self, rhs: &Nat) -> Nat {
        self.div_rem(rhs).1
    }
}

impl Rem<Nat> for Nat {
    type Output = Nat;

    fn rem(self, rhs: Nat) -> Nat {
        self.div_rem(&rhs).1
    }
}

impl RemAssign<&Nat> for Nat {
    fn rem_assign(&mut self, rhs: &Nat) {
        *self = self.div_rem(rhs).1;
    }
}
