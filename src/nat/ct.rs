//! Constant-time helpers for [`Nat`].

use crate::{arith, Nat};
use subtle::Choice;

impl Nat {
    /// Conditionally replace `self` with `other`, limb by limb and without
    /// branching. Both values must have the same limb count.
    pub fn ct_assign(&mut self, other: &Nat, choice: Choice) {
        arith::ct_assign(&mut self.limbs, &other.limbs, choice);
    }

    /// Return `b` when `choice` is set and `a` otherwise. Both values must
    /// have the same limb count.
    pub fn ct_select(a: &Nat, b: &Nat, choice: Choice) -> Nat {
        let mut ret = a.clone();
        ret.ct_assign(b, choice);
        ret
    }
}

#[cfg(test)]
mod tests {
    use crate::Nat;
    use subtle::Choice;

    #[test]
    fn select_between_padded_values() {
        let a = Nat::ct_from_word(11, 3);
        let b = Nat::ct_from_word(22, 3);
        assert_eq!(Nat::ct_select(&a, &b, Choice::from(0)), a);
        assert_eq!(Nat::ct_select(&a, &b, Choice::from(1)), b);
    }

    #[test]
    fn assign_keeps_length() {
        let mut a = Nat::ct_from_word(5, 4);
        let b = Nat::ct_from_word(9, 4);
        a.ct_assign(&b, Choice::from(1));
        assert_eq!(a.nlimbs(), 4);
        assert_eq!(a, Nat::from_word(9));
    }
}
