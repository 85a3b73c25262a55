//! Big integers are represented as an array of smaller CPU word-size integers
//! called "limbs".
//!
//! The scalar carry, borrow, widening-multiply and narrowing-divide
//! primitives that the vector layer in [`crate::arith`] builds on all live
//! here, next to the type they operate on.

use crate::{word, WideWord, Word};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Big integers are represented as a vector of smaller CPU word-size integers
/// called "limbs".
///
/// The [`Limb`] type uses a 32-bit or 64-bit saturated representation,
/// depending on the target. All bits of the inner [`Word`] are significant.
// Our PartialEq impl only differs from the default one by being constant-time,
// so deriving Hash is safe.
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Default, Hash)]
#[repr(transparent)]
pub struct Limb(pub Word);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Maximum value this [`Limb`] can express.
    pub const MAX: Self = Limb(Word::MAX);

    /// Size of the inner integer in bits.
    pub const BITS: u32 = Word::BITS;

    /// Size of the inner integer in bytes.
    pub const BYTES: usize = (Word::BITS / 8) as usize;

    /// Highest bit in a [`Limb`].
    pub(crate) const HI_BIT: u32 = Limb::BITS - 1;

    /// Is this limb equal to zero?
    #[inline]
    pub fn is_zero(&self) -> Choice {
        Choice::from(word::czero(self.0) as u8)
    }

    /// Is this limb non-zero?
    #[inline]
    pub fn is_nonzero(&self) -> Choice {
        !self.is_zero()
    }

    /// Number of leading zero bits.
    #[inline(always)]
    pub const fn leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }

    /// Number of trailing zero bits.
    #[inline(always)]
    pub const fn trailing_zeros(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Computes `self + rhs + carry`, returning the result along with the new
    /// carry (`0` or `1`).
    #[inline(always)]
    pub const fn carrying_add(self, rhs: Limb, carry: Limb) -> (Limb, Limb) {
        let ret = self.0 as WideWord + rhs.0 as WideWord + carry.0 as WideWord;
        (Limb(ret as Word), Limb((ret >> Word::BITS) as Word))
    }

    /// Computes `self - (rhs + borrow)`, returning the result along with the
    /// new borrow (`0` or `1`).
    #[inline(always)]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let ret = (self.0 as WideWord)
            .wrapping_sub(rhs.0 as WideWord + borrow.0 as WideWord);
        (Limb(ret as Word), Limb((ret >> Word::BITS) as Word & 1))
    }

    /// Computes `self + (b * c) + carry`, returning the result along with the
    /// new carry.
    ///
    /// Cannot overflow: `(2^W - 1)^2 + 2*(2^W - 1) = 2^(2W) - 1`.
    #[inline(always)]
    pub const fn carrying_mul_add(self, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
        let ret = (b.0 as WideWord * c.0 as WideWord)
            + self.0 as WideWord
            + carry.0 as WideWord;
        (Limb(ret as Word), Limb((ret >> Word::BITS) as Word))
    }

    /// Compute "wide" multiplication: a product twice the size of the inputs,
    /// returned as `(lo, hi)`.
    #[inline(always)]
    pub const fn mul_wide(self, rhs: Limb) -> (Limb, Limb) {
        let ret = self.0 as WideWord * rhs.0 as WideWord;
        (Limb(ret as Word), Limb((ret >> Word::BITS) as Word))
    }

    /// Divide the double-limb `(hi, lo)` by `divisor`, returning the quotient
    /// and remainder.
    ///
    /// The quotient must fit in a single limb: `hi < divisor`.
    #[inline(always)]
    pub const fn div_wide(hi: Limb, lo: Limb, divisor: Limb) -> (Limb, Limb) {
        debug_assert!(hi.0 < divisor.0);
        let dividend = ((hi.0 as WideWord) << Word::BITS) | lo.0 as WideWord;
        let divisor = divisor.0 as WideWord;
        (
            Limb((dividend / divisor) as Word),
            Limb((dividend % divisor) as Word),
        )
    }

    /// Perform wrapping addition, discarding overflow.
    #[inline(always)]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Limb(self.0.wrapping_add(rhs.0))
    }

    /// Perform wrapping subtraction, discarding underflow.
    #[inline(always)]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Limb(self.0.wrapping_mul(rhs.0))
    }

    /// Perform wrapping negation.
    #[inline(always)]
    pub const fn wrapping_neg(self) -> Self {
        Limb(self.0.wrapping_neg())
    }
}

impl ConditionallySelectable for Limb {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Limb(Word::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Limb {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Limb {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Limb {}

impl From<u8> for Limb {
    #[inline]
    fn from(n: u8) -> Limb {
        Limb(n.into())
    }
}

impl From<u16> for Limb {
    #[inline]
    fn from(n: u16) -> Limb {
        Limb(n.into())
    }
}

impl From<u32> for Limb {
    #[inline]
    fn from(n: u32) -> Limb {
        Limb(n.into())
    }
}

#[cfg(target_pointer_width = "64")]
impl From<u64> for Limb {
    #[inline]
    fn from(n: u64) -> Limb {
        Limb(n)
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{self:X})")
    }
}

impl fmt::Display for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", &self.0, width = Self::BYTES * 2)
    }
}

impl fmt::UpperHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$X}", &self.0, width = Self::BYTES * 2)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Limb {}

#[cfg(test)]
mod tests {
    use super::Limb;

    #[test]
    fn carrying_add_no_carry() {
        let (res, carry) = Limb::ZERO.carrying_add(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::ONE);
        assert_eq!(carry, Limb::ZERO);
    }

    #[test]
    fn carrying_add_with_carry() {
        let (res, carry) = Limb::MAX.carrying_add(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::ZERO);
        assert_eq!(carry, Limb::ONE);

        let (res, carry) = Limb::MAX.carrying_add(Limb::MAX, Limb::ONE);
        assert_eq!(res, Limb::MAX);
        assert_eq!(carry, Limb::ONE);
    }

    #[test]
    fn borrowing_sub_no_borrow() {
        let (res, borrow) = Limb::ONE.borrowing_sub(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::ZERO);
        assert_eq!(borrow, Limb::ZERO);
    }

    #[test]
    fn borrowing_sub_with_borrow() {
        let (res, borrow) = Limb::ZERO.borrowing_sub(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::MAX);
        assert_eq!(borrow, Limb::ONE);
    }

    #[test]
    fn carrying_mul_add_cannot_overflow() {
        let (res, carry) = Limb::MAX.carrying_mul_add(Limb::MAX, Limb::MAX, Limb::MAX);
        assert_eq!(res, Limb::MAX);
        assert_eq!(carry, Limb::MAX);
    }

    #[test]
    fn mul_wide_max() {
        let (lo, hi) = Limb::MAX.mul_wide(Limb::MAX);
        assert_eq!(lo, Limb::ONE);
        assert_eq!(hi, Limb(Limb::MAX.0 - 1));
    }

    #[test]
    fn div_wide_round_trip() {
        let d = Limb(12345);
        let (q, r) = Limb::div_wide(Limb(42), Limb(987654321), d);
        let (lo, hi) = q.mul_wide(d);
        let (lo, carry) = lo.carrying_add(r, Limb::ZERO);
        assert_eq!(lo, Limb(987654321));
        assert_eq!(hi.wrapping_add(carry), Limb(42));
    }

    #[test]
    fn is_zero() {
        assert!(bool::from(Limb::ZERO.is_zero()));
        assert!(!bool::from(Limb::ONE.is_zero()));
        assert!(!bool::from(Limb::MAX.is_zero()));
    }
}
