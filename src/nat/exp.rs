//! [`Nat`] modular exponentiation.

use crate::{arith, Limb, Nat, Word};
use core::cmp::Ordering;

impl Nat {
    /// Computes `self ** y mod m`, or `self ** y` when `m` is zero.
    pub fn exp_mod(&self, y: &Nat, m: &Nat) -> Nat {
        self.exp_zcap(y, m, 0)
    }

    /// Constant-time [`Nat::exp_mod`]: the result is padded to exactly
    /// `zcap` limbs, and the exponent does not influence branching or
    /// data-dependent loop counts on the windowed paths.
    pub fn ct_exp_mod(&self, y: &Nat, m: &Nat, zcap: usize) -> Nat {
        self.exp_zcap(y, m, zcap)
    }

    pub(crate) fn exp_zcap(&self, y: &Nat, m: &Nat, zcap: usize) -> Nat {
        // x**y mod 1 == 0
        if m.limbs.len() == 1 && m.limbs[0] == Limb::ONE {
            return Nat::from_word_zcap(0, zcap);
        }
        // m == 0 || m > 1

        // x**0 == 1
        if y.limbs.is_empty() {
            return Nat::from_word_zcap(1, zcap);
        }
        // y > 0

        // x**1 mod m == x mod m
        if y.limbs.len() == 1 && y.limbs[0] == Limb::ONE && !m.limbs.is_empty() {
            let r = self.div_rem(m).1;
            return Nat::ct_set(&r, zcap);
        }
        // y > 1

        // With a non-trivial base and a long exponent, use 4-bit windowed
        // exponentiation: 14 precomputed powers cut the multiply-reduce
        // count by a third. The Montgomery form handles odd moduli.
        if self.cmp_nat(&Nat::one()) == Ordering::Greater
            && y.limbs.len() > 1
            && !m.limbs.is_empty()
        {
            if m.limbs[0].0 & 1 == 1 {
                return self.exp_montgomery(y, m, zcap);
            }
            return self.exp_windowed(y, m, zcap);
        }

        // Plain square-and-multiply, walking the exponent from its top bit.
        // The leading one bit is implicit in starting from z = x. The scan
        // covers the significant limbs only, so a padded exponent behaves
        // like its normalized value.
        let ysig = arith::significant(&y.limbs);
        if ysig.is_empty() {
            return Nat::from_word_zcap(1, zcap);
        }
        let top = ysig[ysig.len() - 1];
        // top > 0 by construction
        let shift = top.leading_zeros() + 1;
        let mut v: Word = top.0.checked_shl(shift).unwrap_or(0);
        let w = Limb::BITS - shift;

        const MASK: Word = 1 << (Limb::BITS - 1);

        let mut z = self.clone();
        for _ in 0..w {
            z = z.mul_nat(&z);
            if v & MASK != 0 {
                z = z.mul_nat(self);
            }
            if !m.limbs.is_empty() {
                z = z.div_rem(m).1;
            }
            v <<= 1;
        }

        for i in (0..ysig.len() - 1).rev() {
            let mut v = ysig[i].0;
            for _ in 0..Limb::BITS {
                z = z.mul_nat(&z);
                if v & MASK != 0 {
                    z = z.mul_nat(self);
                }
                if !m.limbs.is_empty() {
                    z = z.div_rem(m).1;
                }
                v <<= 1;
            }
        }

        Nat::ct_set(&z, zcap)
    }

    /// `self ** y mod m` using a fixed 4-bit window with division-based
    /// reduction; the path for even moduli.
    fn exp_windowed(&self, y: &Nat, m: &Nat, zcap: usize) -> Nat {
        const WINDOW: u32 = 4;

        // powers[i] contains x^i mod m (powers[1] deliberately unreduced:
        // the first use reduces the product anyway)
        let mut powers: Vec<Nat> = Vec::with_capacity(1 << WINDOW);
        powers.push(Nat::one());
        powers.push(self.clone());
        for i in (2..1usize << WINDOW).step_by(2) {
            let p2 = &powers[i / 2];
            let p = p2.mul_nat(p2).div_rem(m).1;
            let p1 = p.mul_nat(self).div_rem(m).1;
            powers.push(p);
            powers.push(p1);
        }

        let mut z = Nat::one();
        let top = y.limbs.len() - 1;
        for i in (0..=top).rev() {
            let mut yi = y.limbs[i].0;
            let mut j = 0;
            while j < Limb::BITS {
                if i != top || j != 0 {
                    // Four squarings walk the window across the exponent.
                    // Skipped on the very first nibble: z is still 1 there.
                    z = z.mul_nat(&z).div_rem(m).1;
                    z = z.mul_nat(&z).div_rem(m).1;
                    z = z.mul_nat(&z).div_rem(m).1;
                    z = z.mul_nat(&z).div_rem(m).1;
                }

                z = z
                    .mul_nat(&powers[(yi >> (Limb::BITS - WINDOW)) as usize])
                    .div_rem(m)
                    .1;

                yi <<= WINDOW;
                j += WINDOW;
            }
        }

        Nat::ct_set(&z, zcap)
    }
}
