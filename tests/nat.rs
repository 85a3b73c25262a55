//! End-to-end tests for `bignat::Nat`: the concrete arithmetic scenarios and
//! the constant-time/variable-time equivalence contract.

use bignat::{Limb, Nat, Word};

/// 10^e by repeated scalar multiply.
fn pow10(e: u32) -> Nat {
    let mut z = Nat::one();
    for _ in 0..e {
        z = z.mul_add_word(Limb(10), Limb::ZERO);
    }
    z
}

/// Bit-at-a-time modular exponentiation used as the reference oracle.
fn exp_mod_reference(x: &Nat, y: &Nat, m: &Nat) -> Nat {
    let mut z = Nat::one();
    for i in (0..y.bit_len()).rev() {
        z = z.mul_nat(&z).div_rem(m).1;
        if y.bit(i) {
            z = z.mul_nat(x).div_rem(m).1;
        }
    }
    z
}

#[test]
fn carry_propagates_across_word_boundary() {
    let sum = Nat::from_word(Word::MAX).add_nat(&Nat::one());
    assert_eq!(sum.as_limbs(), &[Limb::ZERO, Limb::ONE][..]);
}

#[test]
fn karatsuba_square_of_dense_operand() {
    // (2^4096 - 1)^2 is big enough to exercise the recursive multiplier
    let ones = Nat::one().shl(4096).sub_nat(&Nat::one());
    let square = ones.mul_nat(&ones);
    let expect = Nat::one()
        .shl(8192)
        .sub_nat(&Nat::one().shl(4097))
        .add_nat(&Nat::one());
    assert_eq!(square, expect);
    // and the product of a value with itself matches the shifted identity
    assert_eq!(square.sqrt(), ones);
}

#[test]
fn powers_of_ten_divide_evenly() {
    let (q, r) = pow10(50).div_rem(&pow10(25));
    assert_eq!(q, pow10(25));
    assert!(bool::from(r.is_zero()));
}

#[test]
fn division_identity_holds() {
    let u = pow10(50).add_nat(&pow10(13)).add_nat(&Nat::from_u64(7));
    let v = pow10(25).sub_nat(&Nat::from_u64(3));
    let (q, r) = u.div_rem(&v);
    assert_eq!(q.mul_nat(&v).add_nat(&r), u);
    assert!(r.cmp_nat(&v).is_lt());
}

#[test]
fn rsa_shaped_exponentiation_odd_modulus() {
    // 3^65537 mod (2^2048 - 1): odd modulus takes the Montgomery path
    let x = Nat::from_u64(3);
    let y = Nat::one().shl(16).add_nat(&Nat::one());
    let m = Nat::one().shl(2048).sub_nat(&Nat::one());
    assert_eq!(x.exp_mod(&y, &m), exp_mod_reference(&x, &y, &m));
}

#[test]
fn single_limb_exponent_even_modulus() {
    // 7^1234567 mod 2^100: a single-limb exponent stays on the plain
    // square-and-multiply route
    let x = Nat::from_u64(7);
    let y = Nat::from_u64(1_234_567);
    let m = Nat::one().shl(100);
    assert_eq!(x.exp_mod(&y, &m), exp_mod_reference(&x, &y, &m));
}

#[test]
fn windowed_exponentiation_even_modulus() {
    // a multi-limb exponent with an even modulus takes the windowed path
    let x = Nat::from_u64(7);
    let y = Nat::from_u64(1_234_567).shl(90).add_nat(&Nat::from_u64(99));
    let m = Nat::one().shl(100);
    assert_eq!(x.exp_mod(&y, &m), exp_mod_reference(&x, &y, &m));
}

#[test]
fn sqrt_of_powers_of_ten() {
    assert_eq!(pow10(100).sqrt(), pow10(50));
    assert_eq!(
        pow10(100).sub_nat(&Nat::one()).sqrt(),
        pow10(50).sub_nat(&Nat::one())
    );
}

#[test]
fn sqrt_brackets_its_argument() {
    let x = pow10(37);
    let r = x.sqrt();
    let r1 = r.add_nat(&Nat::one());
    assert!(r.mul_nat(&r).cmp_nat(&x).is_le());
    assert!(x.cmp_nat(&r1.mul_nat(&r1)).is_lt());
}

#[test]
fn byte_round_trip_through_big_endian() {
    let x = pow10(61).add_nat(&Nat::from_u64(0x0102_0304));
    assert_eq!(Nat::from_be_slice(&x.to_be_bytes()), x);

    let mut buf = vec![0u8; x.nlimbs() * Limb::BYTES + 3];
    let i = x.write_be_bytes(&mut buf);
    assert_eq!(Nat::from_be_slice(&buf[i..]), x);
}

#[test]
fn normalization_after_variable_time_ops() {
    let a = pow10(30);
    let b = pow10(30).sub_nat(&Nat::one());
    for z in [
        a.add_nat(&b),
        a.sub_nat(&b),
        a.mul_nat(&b),
        a.div_rem(&b).1,
        a.shr(13),
        &a ^ &b,
    ] {
        let n = z.nlimbs();
        assert!(n == 0 || z.as_limbs()[n - 1] != Limb::ZERO);
    }
}

#[test]
fn subtract_round_trip() {
    let x = pow10(40);
    let y = pow10(22).add_nat(&Nat::from_u64(5));
    assert_eq!(x.sub_nat(&y).add_nat(&y), x);
}

#[test]
fn distributivity() {
    let x = pow10(20);
    let y = pow10(15);
    let z = Nat::from_u64(0xdead_beef);
    assert_eq!(
        x.mul_nat(&y.add_nat(&z)),
        x.mul_nat(&y).add_nat(&x.mul_nat(&z))
    );
}

#[test]
fn shift_divide_duality() {
    let x = pow10(41).add_nat(&Nat::from_u64(0b1011));
    for s in [1u32, 7, 64, 65, 130] {
        let pow2 = Nat::one().shl(s);
        assert_eq!(x.shr(s), x.div_rem(&pow2).0);
        // shl(shr(x, s), s) == x - (x mod 2^s)
        assert_eq!(x.shr(s).shl(s), x.sub_nat(&x.div_rem(&pow2).1));
    }
}

mod constant_time_equivalence {
    use super::*;

    /// zcap large enough for every result in these cases.
    const ZCAP: usize = 40;

    fn cases() -> Vec<Nat> {
        vec![
            Nat::one(),
            Nat::from_u64(2),
            Nat::from_word(Word::MAX),
            pow10(19),
            pow10(40).sub_nat(&Nat::one()),
            Nat::one().shl(512).sub_nat(&Nat::from_u64(0x1234_5678)),
        ]
    }

    #[test]
    fn add_matches() {
        for x in cases() {
            for y in cases() {
                let ct = x.ct_add(&y, ZCAP);
                assert_eq!(ct.nlimbs(), ZCAP);
                assert_eq!(ct, x.add_nat(&y), "x={x}, y={y}");
            }
        }
    }

    #[test]
    fn sub_matches() {
        for x in cases() {
            for y in cases() {
                if x.cmp_nat(&y).is_lt() {
                    continue;
                }
                let ct = x.ct_sub(&y, ZCAP);
                assert_eq!(ct.nlimbs(), ZCAP);
                assert_eq!(ct, x.sub_nat(&y), "x={x}, y={y}");
            }
        }
    }

    #[test]
    fn mul_matches() {
        for x in cases() {
            for y in cases() {
                let ct = x.ct_mul(&y, ZCAP);
                assert_eq!(ct.nlimbs(), ZCAP);
                assert_eq!(ct, x.mul_nat(&y), "x={x}, y={y}");
            }
        }
    }

    #[test]
    fn mul_matches_with_padded_operands() {
        // constant-time callers keep their operands padded too
        for x in cases() {
            for y in cases() {
                let xp = Nat::ct_set(&x, 16);
                let yp = Nat::ct_set(&y, 16);
                assert_eq!(xp.ct_mul(&yp, ZCAP), x.mul_nat(&y), "x={x}, y={y}");
            }
        }
    }

    #[test]
    fn karatsuba_sized_ct_mul_matches() {
        // operands above the Karatsuba threshold, still equal values
        let x = Nat::one().shl(Limb::BITS * 96).sub_nat(&Nat::from_u64(12345));
        let y = Nat::one().shl(Limb::BITS * 96).sub_nat(&Nat::from_u64(67890));
        let ct = x.ct_mul(&y, 2 * 96 + 2);
        assert_eq!(ct, x.mul_nat(&y));
    }

    #[test]
    fn set_and_bytes_match() {
        for x in cases() {
            assert_eq!(Nat::ct_set(&x, ZCAP), x);
            let bytes = x.to_be_bytes();
            let ct = Nat::ct_from_be_slice(&bytes, ZCAP);
            assert_eq!(ct.nlimbs(), ZCAP);
            assert_eq!(ct, x);
        }
        assert_eq!(Nat::ct_from_word(7, 3), Nat::from_word(7));
        assert_eq!(Nat::ct_from_u64(u64::MAX, 3), Nat::from_u64(u64::MAX));
    }

    #[test]
    fn exp_matches() {
        let m_odd = Nat::one().shl(256).sub_nat(&Nat::from_u64(189));
        let m_even = Nat::one().shl(200);
        let y = Nat::one().shl(80).add_nat(&Nat::from_u64(0x10001));
        for x in cases() {
            for m in [&m_odd, &m_even] {
                let zcap = m.nlimbs();
                let vt = x.exp_mod(&y, m);
                let ct = x.ct_exp_mod(&y, m, zcap);
                assert_eq!(ct.nlimbs(), zcap);
                assert_eq!(ct, vt, "x={x}");
            }
        }
    }

    #[test]
    fn exp_with_padded_exponent() {
        // a padded exponent must not change the result
        let x = Nat::from_u64(3);
        let m = Nat::one().shl(128).sub_nat(&Nat::from_u64(159));
        let y = Nat::from_u64(0x10001);
        let y_padded = Nat::ct_set(&y, 4);
        assert_eq!(
            x.ct_exp_mod(&y_padded, &m, m.nlimbs()),
            x.exp_mod(&y, &m)
        );
    }
}
