//! Heap-allocated unsigned arbitrary-precision natural numbers.

pub(crate) mod add;
pub(crate) mod bit_and;
pub(crate) mod bit_or;
pub(crate) mod bit_xor;
pub(crate) mod bits;
pub(crate) mod cmp;
pub(crate) mod ct;
pub(crate) mod div;
pub(crate) mod encoding;
pub(crate) mod exp;
pub(crate) mod karatsuba;
pub(crate) mod montgomery;
pub(crate) mod mul;
pub(crate) mod shl;
pub(crate) mod shr;
pub(crate) mod sqrt;
pub(crate) mod sub;

#[cfg(feature = "rand_core")]
mod rand;

use crate::{arith, Limb, Word};
use core::fmt;
use core::hash::{Hash, Hasher};
use subtle::{Choice, ConstantTimeEq};

/// Unsigned arbitrary-precision natural number, stored as a vector of limbs
/// in little-endian order.
///
/// A `Nat` tracks a logical length (the limb count currently in use) on top
/// of its allocated capacity. In normalized form the most significant limb is
/// non-zero, and zero is uniquely the empty vector. Operations come in pairs:
/// a variable-time form (`add`, `mul`, ...) producing normalized results, and
/// a constant-time form (`ct_add`, `ct_mul`, ...) taking an explicit output
/// length `zcap` that the result is padded to. In constant-time mode a result
/// that cannot fit `zcap` limbs is a caller-contract breach and panics.
#[derive(Clone, Default)]
pub struct Nat {
    /// Limbs in use, least significant first. The vector's spare capacity is
    /// the reuse reservoir for in-place resizing.
    pub(crate) limbs: Vec<Limb>,
}

/// Extra limbs allocated beyond the requested length when a buffer has to
/// grow, improving the chance the allocation can be reused.
const SLACK: usize = 4;

impl Nat {
    /// The value `0`.
    pub fn zero() -> Self {
        Nat { limbs: Vec::new() }
    }

    /// The value `1`.
    pub fn one() -> Self {
        Nat {
            limbs: vec![Limb::ONE],
        }
    }

    /// Construct from a single [`Word`].
    pub fn from_word(w: Word) -> Self {
        Self::from_word_zcap(w, 0)
    }

    /// Constant-time [`Nat::from_word`], padded to `zcap` limbs.
    pub fn ct_from_word(w: Word, zcap: usize) -> Self {
        Self::from_word_zcap(w, zcap)
    }

    pub(crate) fn from_word_zcap(w: Word, zcap: usize) -> Self {
        let mut z = Nat::zero();
        z.resize_for(1, zcap);
        z.limbs[0] = Limb(w);
        z.cnorm(zcap);
        z
    }

    /// Construct from a `u64`.
    pub fn from_u64(u: u64) -> Self {
        Self::from_u64_zcap(u, 0)
    }

    /// Constant-time [`Nat::from_u64`], padded to `zcap` limbs.
    pub fn ct_from_u64(u: u64, zcap: usize) -> Self {
        Self::from_u64_zcap(u, zcap)
    }

    #[cfg(target_pointer_width = "64")]
    pub(crate) fn from_u64_zcap(u: u64, zcap: usize) -> Self {
        Self::from_word_zcap(u, zcap)
    }

    #[cfg(target_pointer_width = "32")]
    pub(crate) fn from_u64_zcap(u: u64, zcap: usize) -> Self {
        if let Ok(w) = Word::try_from(u) {
            return Self::from_word_zcap(w, zcap);
        }
        let mut z = Nat::zero();
        z.resize_for(2, zcap);
        z.limbs[0] = Limb(u as Word);
        z.limbs[1] = Limb((u >> 32) as Word);
        z.cnorm(zcap);
        z
    }

    /// Copy of `x`, padded to `zcap` limbs.
    pub fn ct_set(x: &Nat, zcap: usize) -> Self {
        let mut z = x.clone();
        z.resize_for(x.limbs.len(), zcap);
        z.cnorm(zcap);
        z
    }

    /// Is this value zero? Inspects every limb; never short-circuits.
    pub fn is_zero(&self) -> Choice {
        Choice::from(arith::czero_slice(&self.limbs) as u8)
    }

    /// Is this value non-zero?
    pub fn is_nonzero(&self) -> Choice {
        !self.is_zero()
    }

    /// Is this value one?
    pub fn is_one(&self) -> Choice {
        let mut iter = self.limbs.iter();
        let first = iter.next().copied().unwrap_or(Limb::ZERO).ct_eq(&Limb::ONE);
        iter.fold(first, |acc, limb| acc & limb.is_zero())
    }

    /// Number of limbs currently in use. For normalized values this is the
    /// number of significant limbs; constant-time values stay padded to
    /// their `zcap`.
    pub fn nlimbs(&self) -> usize {
        self.limbs.len()
    }

    /// Borrow the limbs of this [`Nat`].
    pub fn as_limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Whether the representation is normalized: empty, or a non-zero top
    /// limb.
    pub(crate) fn normalized(&self) -> bool {
        match self.limbs.last() {
            None => true,
            Some(top) => top.0 != 0,
        }
    }

    /// Resize the limb vector to `max(n, zcap)` limbs, reusing the existing
    /// allocation when its capacity suffices and clearing any padding limbs
    /// above `n`. Fresh allocations carry [`SLACK`] limbs of extra capacity.
    pub(crate) fn resize_for(&mut self, n: usize, zcap: usize) {
        let l = n.max(zcap);
        if l <= self.limbs.capacity() {
            self.limbs.resize(l, Limb::ZERO);
            if l > n {
                arith::clear(&mut self.limbs[n..l]);
            }
        } else {
            let mut limbs = Vec::with_capacity(l + SLACK);
            limbs.resize(l, Limb::ZERO);
            self.limbs = limbs;
        }
    }

    /// Normalize to exactly `zcap` limbs, or to the minimal length when
    /// `zcap == 0`.
    ///
    /// Panics if a constant-time result does not fit `zcap` limbs, or if the
    /// limb vector is shorter than `zcap`.
    pub(crate) fn cnorm(&mut self, zcap: usize) {
        if zcap == 0 {
            while let Some(top) = self.limbs.last() {
                if top.0 != 0 {
                    break;
                }
                self.limbs.pop();
            }
            return;
        }
        if self.limbs.len() > zcap {
            if arith::nonzero(&self.limbs[zcap..]) != 0 {
                panic!("constant-time result too large");
            }
            self.limbs.truncate(zcap);
        } else if self.limbs.len() < zcap {
            panic!("constant-time result too small");
        }
    }

    /// Zero all limbs in use, keeping the length.
    pub(crate) fn clear(&mut self) {
        arith::clear(&mut self.limbs);
    }

    /// The significant prefix of the limbs: the representation with trailing
    /// zero limbs ignored, without reallocating.
    pub(crate) fn significant_limbs(&self) -> &[Limb] {
        arith::significant(&self.limbs)
    }
}

impl From<u8> for Nat {
    fn from(n: u8) -> Nat {
        Nat::from_word(n.into())
    }
}

impl From<u16> for Nat {
    fn from(n: u16) -> Nat {
        Nat::from_word(n.into())
    }
}

impl From<u32> for Nat {
    fn from(n: u32) -> Nat {
        Nat::from_word(n.into())
    }
}

impl From<u64> for Nat {
    fn from(n: u64) -> Nat {
        Nat::from_u64(n)
    }
}

impl From<u128> for Nat {
    fn from(n: u128) -> Nat {
        let lo = Nat::from_u64(n as u64);
        let hi = Nat::from_u64((n >> 64) as u64);
        hi.shl(64).add_nat(&lo)
    }
}

impl From<Limb> for Nat {
    fn from(l: Limb) -> Nat {
        Nat::from_word(l.0)
    }
}

impl Hash for Nat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash only the significant limbs so that a padded constant-time
        // value hashes like its normalized equal.
        for limb in self.significant_limbs() {
            limb.0.hash(state);
        }
    }
}

impl num_traits::Zero for Nat {
    fn zero() -> Self {
        Nat::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero().into()
    }
}

impl num_traits::One for Nat {
    fn one() -> Self {
        Nat::one()
    }

    fn is_one(&self) -> bool {
        self.is_one().into()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for Nat {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl fmt::Debug for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nat(0x{self:X})")
    }
}

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limbs.is_empty() {
            return fmt::LowerHex::fmt(&Limb::ZERO, f);
        }
        for limb in self.limbs.iter().rev() {
            fmt::LowerHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limbs.is_empty() {
            return fmt::UpperHex::fmt(&Limb::ZERO, f);
        }
        for limb in self.limbs.iter().rev() {
            fmt::UpperHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

impl fmt::Binary for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limbs.is_empty() {
            return write!(f, "{:0width$b}", 0, width = Limb::BITS as usize);
        }
        for limb in self.limbs.iter().rev() {
            write!(f, "{:0width$b}", limb.0, width = Limb::BITS as usize)?;
        }
        Ok(())
    }
}
