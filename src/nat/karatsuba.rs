//! Recursive Karatsuba multiplication.
//!
//! Karatsuba multiplication is based on the observation that for
//!
//! ```text
//!   x = x1*b + x0
//!   y = y1*b + y0
//! ```
//!
//! the product `x*y` needs only 3 sub-products instead of 4:
//!
//! ```text
//!   x*y = x1*y1*b*b + (x1*y0 + x0*y1)*b + x0*y0
//!       =    z2*b*b +              z1*b +    z0
//! ```
//!
//! with `z1 = (x1-x0)*(y0-y1) + z2 + z0`.

use crate::nat::mul::{basic_mul, KARATSUBA_THRESHOLD};
use crate::{arith, Limb, Word};
use subtle::Choice;

/// Fold `x` into the running sum: `z[..n] += x[..n]` with the carry
/// propagated into `z[n..n + n/2]`. In constant-time mode the propagation is
/// unconditional. Factored out for readability — only for use by
/// [`karatsuba`].
fn karatsuba_add(z: &mut [Limb], x: &[Limb], n: usize, zcap: usize) {
    let c = arith::add_vv_assign(&mut z[..n], &x[..n]);
    if zcap > 0 || c.0 != 0 {
        arith::add_vw_assign(&mut z[n..n + (n >> 1)], c);
    }
}

/// Like [`karatsuba_add`], but subtracts.
fn karatsuba_sub(z: &mut [Limb], x: &[Limb], n: usize, zcap: usize) {
    let b = arith::sub_vv_assign(&mut z[..n], &x[..n]);
    if zcap > 0 || b.0 != 0 {
        arith::sub_vw_assign(&mut z[n..n + (n >> 1)], b);
    }
}

/// Multiplies `x` and `y`, leaving the (non-normalized) product in
/// `z[..2*n]`.
///
/// Both operands must have the same length `n`; `z` must have at least `6*n`
/// limbs. The region above the product is scratch, partitioned as
///
/// ```text
///   6*n     5*n     4*n     3*n     2*n     1*n     0*n
/// z = [z2 copy|z0 copy| xd*yd | yd:xd | x1*y1 | x0*y0 ]
/// ```
///
/// Each recursive call receives an unused suffix of `z` with at least half
/// the length of the caller's region.
pub(crate) fn karatsuba(z: &mut [Limb], x: &[Limb], y: &[Limb], zcap: usize) {
    let n = y.len();
    debug_assert_eq!(x.len(), n);
    debug_assert!(z.len() >= 6 * n);

    // Switch to basic multiplication if the numbers are odd-length or small.
    if n & 1 != 0 || n < KARATSUBA_THRESHOLD || n < 2 {
        basic_mul(z, x, y, zcap);
        return;
    }
    // n even, n >= KARATSUBA_THRESHOLD, n >= 2

    // split x, y into half-length "digits"
    let n2 = n >> 1;
    let (x0, x1) = x.split_at(n2);
    let (y0, y1) = y.split_at(n2);

    // compute z0 and z2 with the result "in place" in z
    karatsuba(z, x0, y0, zcap); // z0 = x0*y0 in z[..n]
    karatsuba(&mut z[n..], x1, y1, zcap); // z2 = x1*y1 in z[n..2n]

    // compute xd = |x1 - x0| and yd = |y0 - y1|, tracking the sign of the
    // product xd*yd in `neg`
    let mut neg: Word = 0;
    {
        let (lo, hi) = z.split_at_mut(3 * n);

        let xd = &mut lo[2 * n..2 * n + n2];
        let c = arith::sub_vv(xd, x1, x0);
        if zcap > 0 {
            let xt = &mut hi[..n2];
            arith::sub_vv(xt, x0, x1);
            arith::ct_assign(xd, xt, Choice::from(c.0 as u8));
        } else if c.0 != 0 {
            arith::sub_vv(xd, x0, x1);
        }
        neg ^= c.0;

        let yd = &mut lo[2 * n + n2..3 * n];
        let c = arith::sub_vv(yd, y0, y1);
        if zcap > 0 {
            let yt = &mut hi[..n2];
            arith::sub_vv(yt, y1, y0);
            arith::ct_assign(yd, yt, Choice::from(c.0 as u8));
        } else if c.0 != 0 {
            arith::sub_vv(yd, y1, y0);
        }
        neg ^= c.0;
    }

    // p = xd*yd in z[3n..4n]
    {
        let (lo, hi) = z.split_at_mut(3 * n);
        let (xd, yd) = lo[2 * n..].split_at(n2);
        karatsuba(hi, xd, yd, zcap);
    }

    // save the original z2:z0 in the upper half of z (done recursing there)
    {
        let (lo, hi) = z.split_at_mut(4 * n);
        hi[..2 * n].copy_from_slice(&lo[..2 * n]);
    }

    // add up the partial products:
    //
    //   2*n     n     0
    // z = [ z2  | z0  ]
    //   +    [ z0  ]
    //   +    [ z2  ]
    //   +    [  p  ]
    //
    let (lo, rest) = z.split_at_mut(3 * n);
    let (p, r) = rest.split_at_mut(n);
    let zn2 = &mut lo[n2..2 * n];
    karatsuba_add(zn2, r, n, zcap);
    karatsuba_add(zn2, &r[n..], n, zcap);
    if zcap > 0 {
        // compute both the added and the subtracted variant and select
        r[..n + n2].copy_from_slice(zn2);
        karatsuba_add(zn2, p, n, zcap);
        karatsuba_sub(&mut r[..n + n2], p, n, zcap);
        arith::ct_assign(zn2, &r[..n + n2], Choice::from(neg as u8));
    } else if neg == 0 {
        karatsuba_add(zn2, p, n, zcap);
    } else {
        karatsuba_sub(zn2, p, n, zcap);
    }
}
