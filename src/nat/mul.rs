//! [`Nat`] multiplication.

use crate::nat::karatsuba::karatsuba;
use crate::{arith, Limb, Nat};
use core::ops::{Mul, MulAssign};

/// Operands shorter than this are multiplied with the schoolbook loop; the
/// recursive splitting scheme only wins above it.
pub(crate) const KARATSUBA_THRESHOLD: usize = 40;

/// Schoolbook multiplication: `z[..m+n] = x * y`, one row per limb of `y`.
///
/// In variable time, rows with a zero multiplier are skipped. The `zcap > 0`
/// test comes first so that constant-time mode unconditionally forces every
/// row regardless of the limb value.
pub(crate) fn basic_mul(z: &mut [Limb], x: &[Limb], y: &[Limb], zcap: usize) {
    let m = x.len();
    let n = y.len();
    arith::clear(&mut z[..m + n]);
    for (i, &d) in y.iter().enumerate() {
        if zcap > 0 || d.0 != 0 {
            let c = arith::mul_add_vvw(&mut z[i..i + m], x, d);
            z[i + m] = c;
        }
    }
}

/// `z += x << (Limb::BITS * i)`; `z` must be long enough for the shifted
/// addend, the final carry propagates through whatever tail remains.
pub(crate) fn add_at(z: &mut [Limb], x: &[Limb], i: usize, zcap: usize) {
    let n = x.len();
    if n > 0 {
        let c = arith::add_vv_assign(&mut z[i..i + n], x);
        if zcap > 0 || c.0 != 0 {
            let j = i + n;
            if j < z.len() {
                arith::add_vw_assign(&mut z[j..], c);
            }
        }
    }
}

/// The largest `k <= n` of the form `p << i` with `p <= KARATSUBA_THRESHOLD`:
/// the length that can be halved repeatedly all the way down to the basic
/// multiplication threshold.
pub(crate) fn karatsuba_len(n: usize) -> usize {
    let mut n = n;
    let mut i = 0u32;
    while n > KARATSUBA_THRESHOLD {
        n >>= 1;
        i += 1;
    }
    n << i
}

impl Nat {
    /// Computes `self * rhs`, normalized.
    pub fn mul_nat(&self, rhs: &Nat) -> Nat {
        self.mul_zcap(rhs, 0)
    }

    /// Constant-time [`Nat::mul_nat`]: the result is padded to exactly
    /// `zcap` limbs.
    ///
    /// Panics if the product does not fit `zcap` limbs.
    pub fn ct_mul(&self, rhs: &Nat, zcap: usize) -> Nat {
        self.mul_zcap(rhs, zcap)
    }

    /// Computes `self * y + r`, normalized.
    pub fn mul_add_word(&self, y: Limb, r: Limb) -> Nat {
        self.mul_add_word_zcap(y, r, 0)
    }

    /// Constant-time [`Nat::mul_add_word`], padded to `zcap` limbs.
    pub fn ct_mul_add_word(&self, y: Limb, r: Limb, zcap: usize) -> Nat {
        self.mul_add_word_zcap(y, r, zcap)
    }

    pub(crate) fn mul_add_word_zcap(&self, y: Limb, r: Limb, zcap: usize) -> Nat {
        let m = self.limbs.len();
        if m == 0 || y.0 == 0 {
            // result is r
            return Nat::from_word_zcap(r.0, zcap);
        }
        // m > 0

        let mut z = Nat::zero();
        z.resize_for(m + 1, zcap);
        let c = arith::mul_add_vww(&mut z.limbs[..m], &self.limbs, y, r);
        z.limbs[m] = c;

        z.cnorm(zcap);
        z
    }

    pub(crate) fn mul_zcap(&self, rhs: &Nat, zcap: usize) -> Nat {
        let m = self.limbs.len();
        let n = rhs.limbs.len();

        if m < n {
            return rhs.mul_zcap(self, zcap);
        }
        if m == 0 || n == 0 {
            let mut z = Nat::zero();
            z.cnorm(zcap);
            return z;
        }
        if n == 1 {
            return self.mul_add_word_zcap(rhs.limbs[0], Limb::ZERO, zcap);
        }
        // m >= n > 1

        // use basic multiplication if the numbers are small
        if n < KARATSUBA_THRESHOLD {
            let mut z = Nat::zero();
            z.resize_for(m + n, zcap);
            basic_mul(&mut z.limbs[..m + n], &self.limbs, &rhs.limbs, zcap);
            z.cnorm(zcap);
            return z;
        }
        // m >= n >= KARATSUBA_THRESHOLD

        // Determine the Karatsuba length k such that
        //
        //   x = xh*b + x0  (0 <= x0 < b)
        //   y = yh*b + y0  (0 <= y0 < b)
        //   b = 1 << (Limb::BITS * k)
        //
        let k = karatsuba_len(n);
        // k <= n

        // multiply the low k limbs of each operand via Karatsuba
        let full = m + n;
        let mut z = Nat::zero();
        z.resize_for((6 * k).max(full), zcap);
        karatsuba(
            &mut z.limbs[..6 * k],
            &self.limbs[..k],
            &rhs.limbs[..k],
            zcap,
        );
        z.limbs.truncate(full);
        // the upper portion of z is scratch leftovers (2*k <= m+n since k <= n <= m)
        arith::clear(&mut z.limbs[2 * k..]);

        // If xh != 0 or yh != 0, add the missing cross terms: x0*y1 at
        // offset k, and xi*y0, xi*y1 for every remaining k-limb block of x.
        // By the choice of k, the y tail is a single block of at most k
        // limbs.
        if k < n || m != n {
            let y1 = Nat {
                limbs: rhs.limbs[k..].to_vec(),
            };
            let x0 = if zcap == 0 {
                arith::significant(&self.limbs[..k])
            } else {
                &self.limbs[..k]
            };
            let t = Nat { limbs: x0.to_vec() }.mul_nat(&y1);
            add_at(&mut z.limbs, &t.limbs, k, zcap);

            let y0 = if zcap == 0 {
                arith::significant(&rhs.limbs[..k])
            } else {
                &rhs.limbs[..k]
            };
            let y0 = Nat { limbs: y0.to_vec() };
            let mut i = k;
            while i < m {
                let hi = (i + k).min(m);
                let xi = if zcap == 0 {
                    arith::significant(&self.limbs[i..hi])
                } else {
                    &self.limbs[i..hi]
                };
                let xi = Nat { limbs: xi.to_vec() };
                let t = xi.mul_nat(&y0);
                add_at(&mut z.limbs, &t.limbs, i, zcap);
                let t = xi.mul_nat(&y1);
                add_at(&mut z.limbs, &t.limbs, i + k, zcap);
                i += k;
            }
        }

        if z.limbs.len() < zcap {
            z.limbs.resize(zcap, Limb::ZERO);
        }
        z.cnorm(zcap);
        z
    }

    /// Product of all integers in the inclusive range `[a, b]`. An empty
    /// range (`a > b`) yields `1`.
    pub fn mul_range(a: u64, b: u64) -> Nat {
        // cut ranges containing zero short
        if a == 0 {
            return Nat::zero();
        }
        if a > b {
            return Nat::one();
        }
        if a == b {
            return Nat::from_u64(a);
        }
        if a + 1 == b {
            return Nat::from_u64(a).mul_nat(&Nat::from_u64(b));
        }
        let m = a + (b - a) / 2;
        Nat::mul_range(a, m).mul_nat(&Nat::mul_range(m + 1, b))
    }
}

impl Mul for Nat {
    type Output = Nat;

    fn mul(self, rhs: Nat) -> Nat {
        self.mul_nat(&rhs)
    }
}

impl Mul<&Nat> for Nat {
    type Output = Nat;

    fn mul(self, rhs: &Nat) -> Nat {
        self.mul_nat(rhs)
    }
}

impl Mul<&Nat> for &Nat {
    type Output = Nat;

    fn mul(self, rhs: &Nat) -> Nat {
        self.mul_nat(rhs)
    }
}

impl Mul<Nat> for &Nat {
    type Output = Nat;

    fn mul(self, rhs: Nat) -> Nat {
        self.mul_nat(&rhs)
    }
}

impl MulAssign<Nat> for Nat {
    fn mul_assign(&mut self, rhs: Nat) {
        *self = self.mul_nat(&rhs);
    }
}

impl MulAssign<&Nat> for Nat {
    fn mul_assign(&mut self, rhs: &Nat) {
        *self = self.mul_nat(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::karatsuba_len;
    use crate::{Limb, Nat};

    #[test]
    fn mul_zero_and_one() {
        assert!(bool::from(Nat::zero().mul_nat(&Nat::zero()).is_zero()));
        assert!(bool::from(Nat::zero().mul_nat(&Nat::one()).is_zero()));
        assert!(bool::from(Nat::one().mul_nat(&Nat::zero()).is_zero()));
        assert_eq!(Nat::one().mul_nat(&Nat::one()), Nat::one());
    }

    #[test]
    fn mul_primes() {
        let primes: &[u32] = &[3, 5, 17, 257, 65537];
        for &a in primes {
            for &b in primes {
                let actual = Nat::from(a).mul_nat(&Nat::from(b));
                assert_eq!(actual, Nat::from(a as u64 * b as u64));
            }
        }
    }

    #[test]
    fn mul_add_word_scalar() {
        let x = Nat::from_u64(1_000_000_007);
        let z = x.mul_add_word(Limb(3), Limb(11));
        assert_eq!(z, Nat::from_u64(3_000_000_032));
    }

    #[test]
    fn mul_add_word_zero_operand() {
        assert_eq!(Nat::zero().mul_add_word(Limb(9), Limb(7)), Nat::from_word(7));
        let x = Nat::from_u64(123);
        assert_eq!(x.mul_add_word(Limb::ZERO, Limb(7)), Nat::from_word(7));
    }

    #[test]
    fn karatsuba_len_shape() {
        assert_eq!(karatsuba_len(40), 40);
        assert_eq!(karatsuba_len(41), 40);
        assert_eq!(karatsuba_len(80), 80);
        assert_eq!(karatsuba_len(100), 100);
        // 163 -> 40 * 4
        assert_eq!(karatsuba_len(163), 160);
        assert!(karatsuba_len(163) <= 163);
    }

    #[test]
    fn karatsuba_agrees_with_schoolbook() {
        // (2^4096 - 1)^2, large enough to take the Karatsuba route
        let ones = Nat::one().shl(4096).sub_nat(&Nat::one());
        let square = ones.mul_nat(&ones);
        // (2^n - 1)^2 = 2^(2n) - 2^(n+1) + 1
        let expect = Nat::one()
            .shl(8192)
            .sub_nat(&Nat::one().shl(4097))
            .add_nat(&Nat::one());
        assert_eq!(square, expect);
    }

    #[test]
    fn uneven_lengths_cross_terms() {
        // m much larger than n so the add_at accumulation runs
        let x = Nat::one().shl(70 * Limb::BITS).sub_nat(&Nat::one());
        let y = Nat::one().shl(45 * Limb::BITS).sub_nat(&Nat::one());
        let p = x.mul_nat(&y);
        // (2^a - 1)(2^b - 1) = 2^(a+b) - 2^a - 2^b + 1
        let expect = Nat::one()
            .shl(115 * Limb::BITS)
            .sub_nat(&Nat::one().shl(70 * Limb::BITS))
            .sub_nat(&Nat::one().shl(45 * Limb::BITS))
            .add_nat(&Nat::one());
        assert_eq!(p, expect);
    }

    #[test]
    fn mul_range_small() {
        assert_eq!(Nat::mul_range(0, 10), Nat::zero());
        assert_eq!(Nat::mul_range(5, 4), Nat::one());
        assert_eq!(Nat::mul_range(7, 7), Nat::from_u64(7));
        assert_eq!(Nat::mul_range(3, 4), Nat::from_u64(12));
        // 10! = 3628800
        assert_eq!(Nat::mul_range(1, 10), Nat::from_u64(3_628_800));
    }

    #[test]
    fn ct_mul_matches_vartime() {
        let x = Nat::from_u64(u64::MAX);
        let y = Nat::from_u64(0x1234_5678_9abc_def0);
        let ct = x.ct_mul(&y, 4);
        assert_eq!(ct.nlimbs(), 4);
        assert_eq!(ct, x.mul_nat(&y));
    }
}
