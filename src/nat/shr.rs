//! [`Nat`] right shift.

use crate::{arith, Limb, Nat};
use core::ops::{Shr, ShrAssign};

impl Nat {
    /// Computes `self >> shift`, normalized. Shifting past the top returns
    /// zero.
    pub fn shr(&self, shift: u32) -> Nat {
        let m = self.limbs.len();
        let whole = (shift / Limb::BITS) as usize;
        if whole >= m {
            return Nat::zero();
        }
        let n = m - whole;
        // n > 0

        let mut z = Nat::zero();
        z.resize_for(n, 0);
        arith::shr_vu(&mut z.limbs, &self.limbs[m - n..], shift % Limb::BITS);

        z.cnorm(0);
        z
    }
}

impl Shr<u32> for Nat {
    type Output = Nat;

    fn shr(self, shift: u32) -> Nat {
        Nat::shr(&self, shift)
    }
}

impl Shr<u32> for &Nat {
    type Output = Nat;

    fn shr(self, shift: u32) -> Nat {
        Nat::shr(self, shift)
    }
}

impl ShrAssign<u32> for Nat {
    fn shr_assign(&mut self, shift: u32) {
        *self = Nat::shr(self, shift);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Nat, Word};

    #[test]
    fn shr_past_top_is_zero() {
        let x = Nat::from_u64(u64::MAX);
        assert!(bool::from(x.shr(64).is_zero()));
        assert!(bool::from(x.shr(1000).is_zero()));
    }

    #[test]
    fn shl_shr_round_trip() {
        let x = Nat::from_u64(0x0123_4567_89ab_cdef);
        assert_eq!(x.shl(Word::BITS + 11).shr(Word::BITS + 11), x);
    }

    #[test]
    fn shr_discards_low_bits() {
        let x = Nat::from_u64(0b1011_0110);
        assert_eq!(x.shr(4), Nat::from_u64(0b1011));
    }
}
