// Whole-library tests to be included by lib.rs

mod calculator_scenarios {
    use super::*;

    #[test]
    fn multiply_keeps_operand_scale() {
        let a = Number::parse("1.5", 10);
        let b = Number::parse("2", 10);
        assert_eq!(a.mul(&b, 10).to_string(), "3.0");
    }

    #[test]
    fn divide_one_by_three() {
        let a = Number::parse("1", 10);
        let b = Number::parse("3", 10);
        assert_eq!(a.div(&b, 10).unwrap().to_string(), ".3333333333");
    }

    #[test]
    fn negative_modulo_truncates_toward_zero() {
        let a = Number::parse("-7", 0);
        let b = Number::parse("3", 0);
        assert_eq!(a.rem(&b, 0).unwrap().to_string(), "-1");
    }

    #[test]
    fn square_root_of_two() {
        let mut n = Number::parse("2", 0);
        n.sqrt(20).unwrap();
        assert_eq!(n.to_string(), "1.41421356237309504880");
    }

    #[test]
    fn integer_powers() {
        let two = Number::parse("2", 0);
        let ten = Number::parse("10", 0);
        assert_eq!(two.power(&ten, 0).unwrap().to_string(), "1024");

        let neg_two = Number::parse("-2", 0);
        assert_eq!(two.power(&neg_two, 6).unwrap().to_string(), ".250000");
    }

    #[test]
    fn hexadecimal_output() {
        let n = Number::parse("255.5", 1);
        let mut text = String::new();
        n.write_radix(16, &mut |ch| text.push(ch));
        assert_eq!(text, "FF.8");
    }

    #[test]
    fn modular_exponentiation() {
        let base = Number::parse("4", 0);
        let expo = Number::parse("13", 0);
        let modulus = Number::parse("497", 0);
        assert_eq!(
            base.power_mod(&expo, &modulus, 0).unwrap().to_string(),
            "445"
        );
    }
}

mod handle_lifecycle {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn clone_shares_storage() {
        let a = Number::parse("42.5", 10);
        let b = a.clone();
        assert!(Rc::ptr_eq(&a.inner, &b.inner));
        assert_eq!(a, b);
    }

    #[test]
    fn singletons_hand_out_shares() {
        init_numbers();
        let a = Number::zero();
        let b = Number::zero();
        assert!(Rc::ptr_eq(&a.inner, &b.inner));

        assert_eq!(Number::one().to_string(), "1");
        assert_eq!(Number::two().to_string(), "2");
        assert_eq!(Number::zero().to_string(), "0");
    }

    #[test]
    fn negate_in_place_when_uniquely_held() {
        let mut a = Number::parse("5", 0);
        let before = Rc::as_ptr(&a.inner);
        a.negate();
        assert_eq!(Rc::as_ptr(&a.inner), before);
        assert_eq!(a.to_string(), "-5");
    }

    #[test]
    fn negate_leaves_other_shares_untouched() {
        let mut a = Number::parse("5", 0);
        let b = a.clone();
        a.negate();
        assert!(!Rc::ptr_eq(&a.inner, &b.inner));
        assert_eq!(a.to_string(), "-5");
        assert_eq!(b.to_string(), "5");
    }

    #[test]
    fn negating_a_shared_singleton_does_not_poison_it() {
        let mut z = Number::one();
        z.negate();
        assert_eq!(z.to_string(), "-1");
        assert_eq!(Number::one().to_string(), "1");
    }

    #[test]
    fn double_negation_restores() {
        let mut a = Number::parse("-3.25", 10);
        a.negate();
        a.negate();
        assert_eq!(a.to_string(), "-3.25");
    }

    #[test]
    fn neg_operator_matches_negate() {
        let a = Number::parse("7.5", 10);
        let by_ref = -&a;
        let by_val = -a.clone();
        assert_eq!(by_ref, by_val);
        assert_eq!(by_ref.to_string(), "-7.5");
    }

    #[test]
    fn negating_zero_stays_canonical() {
        let mut z = Number::parse("0.00", 10);
        z.negate();
        assert!(z.is_zero());
        assert!(!z.is_negative());
    }
}

mod queries {
    use super::*;

    #[test]
    fn digit_counts() {
        let vals = vec![
            ("0", 1),
            ("7", 1),
            ("-7", 1),
            ("255.5", 4),
            ("0.001", 1),
            ("1024", 4),
        ];
        for (s, expected) in vals {
            assert_eq!(Number::parse(s, 10).digits(), expected, "digits of {}", s);
        }
    }

    #[test]
    fn sign_tests() {
        assert!(Number::parse("0", 0).is_zero());
        assert!(!Number::parse("0", 0).is_negative());
        assert!(Number::parse("-0.5", 1).is_negative());
        assert!(!Number::parse("0.5", 1).is_negative());
    }

    #[test]
    fn abs_and_truncated() {
        let n = Number::parse("-12.75", 10);
        assert_eq!(n.abs().to_string(), "12.75");
        assert_eq!(n.truncated().to_string(), "-12");
        assert_eq!(n.truncated().scale(), 0);

        let p = Number::parse("12.75", 10);
        assert_eq!(p.abs(), p);
    }

    #[test]
    fn default_is_zero() {
        assert!(Number::default().is_zero());
    }
}
