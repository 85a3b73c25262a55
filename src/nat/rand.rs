//! Random number generator support.

use crate::{Limb, Nat, Word};
use core::cmp::Ordering;
use rand_core::RngCore;

impl Nat {
    /// Generate a uniformly random value in `[0, limit)` by rejection
    /// sampling: fill `limit`'s limb count from the RNG, mask the top limb
    /// down to `limit`'s bit length, and resample while the draw is out of
    /// range.
    ///
    /// Rejection sampling is unbiased but variable-time; with a CSRNG the
    /// timing reveals nothing about the accepted value.
    ///
    /// Panics if `limit` is zero.
    pub fn random_below(rng: &mut (impl RngCore + ?Sized), limit: &Nat) -> Nat {
        assert!(bool::from(limit.is_nonzero()), "random_below of zero limit");

        let n = limit.bit_len();
        let len = limit.limbs.len();
        let mut z = Nat::zero();
        z.resize_for(len, 0);

        let msw_bits = match n % Limb::BITS {
            0 => Limb::BITS,
            r => r,
        };
        let mask = Limb(((1 as Word) << (msw_bits - 1) << 1).wrapping_sub(1));

        loop {
            match Limb::BITS {
                32 => {
                    for zi in z.limbs.iter_mut() {
                        *zi = Limb(rng.next_u32() as Word);
                    }
                }
                64 => {
                    for zi in z.limbs.iter_mut() {
                        *zi = Limb(rng.next_u64() as Word);
                    }
                }
                _ => panic!("unknown word size"),
            }
            z.limbs[len - 1].0 &= mask.0;
            if z.cmp_nat(limit) == Ordering::Less {
                break;
            }
        }

        z.cnorm(0);
        z
    }
}

#[cfg(test)]
mod tests {
    use crate::Nat;
    use rand_core::SeedableRng;

    #[test]
    fn stays_below_small_limit() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
        let limit = Nat::from_u64(42);
        for _ in 0..100 {
            let r = Nat::random_below(&mut rng, &limit);
            assert!(r.cmp_nat(&limit).is_lt());
        }
    }

    #[test]
    fn stays_below_wide_limit() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(2);
        // limit just above a limb boundary makes the mask bite
        let limit = Nat::one().shl(64).add_nat(&Nat::one());
        for _ in 0..50 {
            let r = Nat::random_below(&mut rng, &limit);
            assert!(r.cmp_nat(&limit).is_lt());
        }
    }

    #[test]
    fn produces_full_range_values() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(3);
        let limit = Nat::one().shl(256);
        let mut saw_top_half = false;
        for _ in 0..32 {
            let r = Nat::random_below(&mut rng, &limit);
            if r.bit_len() == 256 {
                saw_top_half = true;
            }
        }
        assert!(saw_top_half);
    }

    #[test]
    #[should_panic(expected = "random_below of zero limit")]
    fn zero_limit_rejected() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(4);
        let _ = Nat::random_below(&mut rng, &Nat::zero());
    }
}
