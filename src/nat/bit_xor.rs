//! [`Nat`] bitwise XOR.

use crate::{Limb, Nat};
use core::ops::{BitXor, BitXorAssign};

impl Nat {
    pub(crate) fn xor_nat(&self, rhs: &Nat) -> Nat {
        let (long, short) = if self.limbs.len() >= rhs.limbs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let m = long.limbs.len();
        let n = short.limbs.len();
        // m >= n

        let mut z = Nat::zero();
        z.resize_for(m, 0);
        for i in 0..n {
            z.limbs[i] = Limb(long.limbs[i].0 ^ short.limbs[i].0);
        }
        z.limbs[n..m].copy_from_slice(&long.limbs[n..m]);

        z.cnorm(0);
        z
    }
}

impl BitXor<&Nat> for &Nat {
    type Output = Nat;

    fn bitxor(self, rhs: &Nat) -> Nat {
        self.xor_nat(rhs)
    }
}

impl BitXor<&Nat> for Nat {
    type Output = Nat;

    fn bitxor(self, rhs: &Nat) -> Nat {
        self.xor_nat(rhs)
    }
}

impl BitXor<Nat> for Nat {
    type Output = Nat;

    fn bitxor(self, rhs: Nat) -> Nat {
        self.xor_nat(&rhs)
    }
}

impl BitXorAssign<&Nat> for Nat {
    fn bitxor_assign(&mut self, rhs: &Nat) {
        *self = self.xor_nat(rhs);
    }
}

#[cfg(test)]
mod tests {
    use crate::Nat;

    #[test]
    fn xor_self_is_zero() {
        let x = Nat::from_u64(u64::MAX).shl(32);
        assert!(bool::from((&x ^ &x).is_zero()));
    }

    #[test]
    fn xor_commutes_and_round_trips() {
        let x = Nat::one().shl(200).add_nat(&Nat::from_u64(0xff00));
        let y = Nat::from_u64(0x0ff0);
        let z = &x ^ &y;
        assert_eq!(&y ^ &x, z);
        assert_eq!(&z ^ &y, x);
    }
}
