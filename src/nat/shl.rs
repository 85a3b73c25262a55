//! [`Nat`] left shift.

use crate::{arith, Limb, Nat};
use core::ops::{Shl, ShlAssign};

impl Nat {
    /// Computes `self << shift`, normalized.
    pub fn shl(&self, shift: u32) -> Nat {
        let m = self.limbs.len();
        if m == 0 {
            return Nat::zero();
        }
        // m > 0

        let n = m + (shift / Limb::BITS) as usize;
        let mut z = Nat::zero();
        z.resize_for(n + 1, 0);
        let carry = arith::shl_vu(&mut z.limbs[n - m..n], &self.limbs, shift % Limb::BITS);
        z.limbs[n] = carry;
        arith::clear(&mut z.limbs[..n - m]);

        z.cnorm(0);
        z
    }
}

impl Shl<u32> for Nat {
    type Output = Nat;

    fn shl(self, shift: u32) -> Nat {
        Nat::shl(&self, shift)
    }
}

impl Shl<u32> for &Nat {
    type Output = Nat;

    fn shl(self, shift: u32) -> Nat {
        Nat::shl(self, shift)
    }
}

impl ShlAssign<u32> for Nat {
    fn shl_assign(&mut self, shift: u32) {
        *self = Nat::shl(self, shift);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Nat, Word};

    #[test]
    fn shl_zero_is_zero() {
        assert!(bool::from(Nat::zero().shl(1000).is_zero()));
    }

    #[test]
    fn shl_by_zero_is_identity() {
        let x = Nat::from_u64(0x0123_4567_89ab_cdef);
        assert_eq!(x.shl(0), x);
    }

    #[test]
    fn shl_crosses_limb_boundary() {
        let x = Nat::one();
        let z = x.shl(Word::BITS + 3);
        assert_eq!(z.nlimbs(), 2);
        assert_eq!(z.as_limbs()[1].0, 8);
        assert_eq!(z.as_limbs()[0].0, 0);
    }

    #[test]
    fn shl_is_mul_by_power_of_two() {
        let x = Nat::from_u64(0xdead_beef);
        assert_eq!(x.shl(5), x.mul_nat(&Nat::from_word(32)));
    }
}
