//! Bit-level accessors.

use crate::{Limb, Nat};

impl Nat {
    /// Length of the value in bits; `0` for zero. The value need not be
    /// normalized.
    pub fn bit_len(&self) -> u32 {
        for i in (0..self.limbs.len()).rev() {
            let xi = self.limbs[i];
            if xi.0 != 0 {
                return i as u32 * Limb::BITS + (Limb::BITS - xi.leading_zeros());
            }
        }
        0
    }

    /// Number of consecutive least significant zero bits; `0` for zero.
    pub fn trailing_zeros(&self) -> u32 {
        if self.limbs.is_empty() {
            return 0;
        }
        let mut i = 0;
        while self.limbs[i].0 == 0 {
            i += 1;
        }
        // limbs[i] != 0
        i as u32 * Limb::BITS + self.limbs[i].trailing_zeros()
    }

    /// The value of bit `i`, with the least significant bit at index 0.
    /// Bits beyond the top are zero.
    pub fn bit(&self, i: u32) -> bool {
        let j = (i / Limb::BITS) as usize;
        if j >= self.limbs.len() {
            return false;
        }
        // 0 <= j < nlimbs
        self.limbs[j].0 >> (i % Limb::BITS) & 1 == 1
    }

    /// Copy of `self` with bit `i` set to `b`, growing as needed for a set
    /// bit beyond the top.
    pub fn set_bit(&self, i: u32, b: bool) -> Nat {
        let j = (i / Limb::BITS) as usize;
        let m = Limb(1 << (i % Limb::BITS));
        let n = self.limbs.len();
        let mut z = self.clone();
        if b {
            if j >= n {
                z.limbs.resize(j + 1, Limb::ZERO);
            }
            z.limbs[j].0 |= m.0;
            // no need to normalize
            z
        } else {
            if j >= n {
                // no need to grow
                return z;
            }
            z.limbs[j].0 &= !m.0;
            z.cnorm(0);
            z
        }
    }

    /// Reports whether any of the `i` least significant bits is set.
    pub fn sticky(&self, i: u32) -> bool {
        let j = (i / Limb::BITS) as usize;
        if j >= self.limbs.len() {
            return !self.limbs.is_empty();
        }
        // 0 <= j < nlimbs
        for x in &self.limbs[..j] {
            if x.0 != 0 {
                return true;
            }
        }
        let r = i % Limb::BITS;
        r != 0 && self.limbs[j].0 << (Limb::BITS - r) != 0
    }
}
