//! Montgomery-form modular exponentiation.
//!
//! See Gueron, "Efficient Software Implementations of Modular
//! Exponentiation" (<https://eprint.iacr.org/2011/239.pdf>). The inner step
//! is an "Almost Montgomery Multiplication": operands satisfy
//! `0 <= z < 2^(n*W)` and so does the result, but the result may exceed the
//! modulus; the out-conversion performs the final reduction.

use crate::{arith, Limb, Nat};
use core::cmp::Ordering;
use core::mem;
use subtle::Choice;

/// `z = x*y*2^(-n*W) mod m`, assuming `k = -1/m mod 2^W`.
///
/// All of `x`, `y`, `m` must have length `n`, with `x` and `y` already
/// reduced modulo `m`. `z` must not alias any operand (the borrow checker
/// enforces this). When `zt` is provided, the final reduction computes both
/// candidates and selects without branching; otherwise it branches on the
/// carry.
pub(crate) fn montgomery(
    z: &mut Nat,
    x: &Nat,
    y: &Nat,
    m: &Nat,
    k: Limb,
    n: usize,
    zt: Option<&mut Nat>,
) {
    if x.limbs.len() != n || y.limbs.len() != n || m.limbs.len() != n {
        panic!("mismatched montgomery number lengths");
    }
    z.resize_for(n, 0);
    z.clear();

    let mut c = Limb::ZERO;
    for i in 0..n {
        let d = y.limbs[i];
        let c2 = arith::mul_add_vvw(&mut z.limbs, &x.limbs, d);
        let t = z.limbs[0].wrapping_mul(k);
        let c3 = arith::mul_add_vvw(&mut z.limbs, &m.limbs, t);
        z.limbs.copy_within(1..n, 0);
        let cx = c.wrapping_add(c2);
        let cy = cx.wrapping_add(c3);
        z.limbs[n - 1] = cy;
        // three-way carry fold; see Hacker's Delight, section 2-12
        // (overflow detection)
        let mut cc = (c.0 & c2.0 | (c.0 | c2.0) & !cx.0) >> Limb::HI_BIT;
        cc |= (cx.0 & c3.0 | (cx.0 | c3.0) & !cy.0) >> Limb::HI_BIT;
        c = Limb(cc);
    }

    match zt {
        None => {
            // variable-time operation
            if c.0 != 0 {
                arith::sub_vv_assign(&mut z.limbs, &m.limbs);
            }
        }
        Some(zt) => {
            // constant-time operation: always compute z - m and select
            zt.resize_for(n, 0);
            arith::sub_vv(&mut zt.limbs, &z.limbs, &m.limbs);
            arith::ct_assign(&mut z.limbs, &zt.limbs, Choice::from(c.0 as u8));
        }
    }
}

/// `k0 = -m^(-1) mod 2^W` for odd `m`, by Hensel lifting: each squaring of
/// `t` doubles the number of correct low bits. See Dumas, "On Newton-Raphson
/// Iteration for Multiplicative Inverses Modulo Prime Powers".
pub(crate) fn montgomery_inverse(m0: Limb) -> Limb {
    debug_assert!(m0.0 & 1 == 1);
    let mut k0 = Limb(2).wrapping_sub(m0);
    let mut t = m0.wrapping_sub(Limb::ONE);
    let mut i = 1;
    while i < Limb::BITS {
        t = t.wrapping_mul(t);
        k0 = k0.wrapping_mul(t.wrapping_add(Limb::ONE));
        i <<= 1;
    }
    k0.wrapping_neg()
}

impl Nat {
    /// `self ** y mod m` for odd `m`, using a fixed 4-bit window over
    /// Montgomery representation.
    pub(crate) fn exp_montgomery(&self, y: &Nat, m: &Nat, zcap: usize) -> Nat {
        const WINDOW: u32 = 4;
        let num_words = m.limbs.len();

        // The base and the modulus must have equal lengths; x >= m is fine
        // as long as the lengths match.
        let mut x = self.clone();
        if x.limbs.len() > num_words {
            x = x.div_rem(m).1;
            // now x.nlimbs() <= num_words, not necessarily ==
        }
        if x.limbs.len() < num_words {
            x.limbs.resize(num_words, Limb::ZERO);
        }

        let k0 = montgomery_inverse(m.limbs[0]);

        // RR = 2^(2*n*W) mod m
        let mut rr = Nat::one()
            .shl(2 * num_words as u32 * Limb::BITS)
            .div_rem(m)
            .1;
        if rr.limbs.len() < num_words {
            rr.limbs.resize(num_words, Limb::ZERO);
        }

        // one = 1, with the same length as m
        let mut one = Nat::zero();
        one.resize_for(num_words, 0);
        one.limbs[0] = Limb::ONE;

        // constant-time operation needs a scratch to select from
        let mut zt = if zcap > 0 { Some(Nat::zero()) } else { None };

        // powers[i] contains (x^i)·R mod m
        let mut powers: Vec<Nat> = Vec::with_capacity(1 << WINDOW);
        let mut p = Nat::zero();
        montgomery(&mut p, &one, &rr, m, k0, num_words, zt.as_mut());
        powers.push(p);
        let mut p = Nat::zero();
        montgomery(&mut p, &x, &rr, m, k0, num_words, zt.as_mut());
        powers.push(p);
        for i in 2..1usize << WINDOW {
            let mut p = Nat::zero();
            let (prev, first) = (&powers[i - 1], &powers[1]);
            montgomery(&mut p, prev, first, m, k0, num_words, zt.as_mut());
            powers.push(p);
        }

        // z = 1 in Montgomery form
        let mut z = powers[0].clone();
        let mut zz = Nat::zero();

        // the same window walk as the division-based form, but with
        // Montgomery multiplications
        let top = y.limbs.len() - 1;
        for i in (0..=top).rev() {
            let mut yi = y.limbs[i].0;
            let mut j = 0;
            while j < Limb::BITS {
                if i != top || j != 0 {
                    montgomery(&mut zz, &z, &z, m, k0, num_words, zt.as_mut());
                    montgomery(&mut z, &zz, &zz, m, k0, num_words, zt.as_mut());
                    montgomery(&mut zz, &z, &z, m, k0, num_words, zt.as_mut());
                    montgomery(&mut z, &zz, &zz, m, k0, num_words, zt.as_mut());
                }
                let p = &powers[(yi >> (Limb::BITS - WINDOW)) as usize];
                montgomery(&mut zz, &z, p, m, k0, num_words, zt.as_mut());
                mem::swap(&mut z, &mut zz);
                yi <<= WINDOW;
                j += WINDOW;
            }
        }

        // convert back out of Montgomery form
        montgomery(&mut zz, &z, &one, m, k0, num_words, zt.as_mut());

        // One last reduction, in case the almost-Montgomery result still
        // exceeds m. A single subtraction suffices when m has its high bit
        // set; fall back to a full division otherwise.
        if zz.cmp_nat(m) != Ordering::Less {
            zz = zz.sub_nat(m);
            if zz.cmp_nat(m) != Ordering::Less {
                zz = zz.div_rem(m).1;
            }
        }

        Nat::ct_set(&zz, zcap)
    }
}
