// Property tests to be included by lib.rs (if enabled)

prop_compose! {
    fn arb_number()(value in any::<i128>(), scale in 0u64..=100) -> Number {
        Number::from_bigint(BigInt::from(value), scale)
    }
}

prop_compose! {
    fn arb_nonzero()(n in arb_number().prop_filter("nonzero", |n| !n.is_zero())) -> Number {
        n
    }
}

proptest! {
    #[test]
    fn add_commutes(a in arb_number(), b in arb_number(), scale_min in 0u64..=100) {
        prop_assert_eq!(a.add(&b, scale_min), b.add(&a, scale_min));
    }

    #[test]
    fn mul_commutes(a in arb_number(), b in arb_number(), scale in 0u64..=100) {
        prop_assert_eq!(a.mul(&b, scale), b.mul(&a, scale));
    }

    #[test]
    fn self_difference_is_zero(a in arb_number(), scale_min in 0u64..=100) {
        prop_assert!(a.sub(&a, scale_min).is_zero());
    }

    #[test]
    fn negated_addend_cancels(a in arb_number()) {
        prop_assert!(a.add(&-&a, 0).is_zero());
    }

    #[test]
    fn sum_scale_law(a in arb_number(), b in arb_number(), scale_min in 0u64..=100) {
        let sum = a.add(&b, scale_min);
        prop_assert_eq!(sum.scale(), a.scale().max(b.scale()).max(scale_min));
    }

    #[test]
    fn division_identity(a in arb_number(), b in arb_nonzero(), scale in 0u64..=50) {
        // a = q*b + r at the remainder scale, with a truncated to that scale
        let rem_scale = a.scale().max(b.scale() + scale);
        let quot = a.div(&b, scale).unwrap();
        let rem = a.rem(&b, scale).unwrap();
        let rebuilt = quot.mul(&b, rem_scale).add(&rem, rem_scale);
        prop_assert_eq!(rebuilt, a);
    }

    #[test]
    fn remainder_sign_follows_dividend(a in arb_number(), b in arb_nonzero(), scale in 0u64..=50) {
        let rem = a.rem(&b, scale).unwrap();
        prop_assert!(rem.is_zero() || rem.is_negative() == a.is_negative());
    }

    #[test]
    fn to_string_round_trips(a in arb_number()) {
        let text = a.to_string();
        let reparsed = Number::parse(&text, a.scale());
        prop_assert_eq!(&reparsed, &a);
        prop_assert_eq!(reparsed.to_string(), text);
    }

    #[test]
    fn compare_is_antisymmetric(a in arb_number(), b in arb_number()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn equal_rationals_compare_equal(a in arb_number(), pad in 0u64..=20) {
        // the same rational at a padded scale is the same number
        let padded = a.add(&Number::zero(), a.scale() + pad);
        prop_assert_eq!(a.cmp(&padded), std::cmp::Ordering::Equal);
    }

    #[test]
    fn digit_count_matches_stringification(a in arb_number()) {
        let digits = a.significand().magnitude().to_string().len() as u64;
        prop_assert_eq!(a.digits(), digits);
    }

    #[test]
    fn sqrt_brackets_the_radicand(a in arb_number(), scale in 0u64..=50) {
        prop_assume!(!a.is_negative());
        let mut root = a.clone();
        root.sqrt(scale).unwrap();

        let rscale = root.scale();
        let squared = root.mul(&root, 2 * rscale);
        prop_assert!(squared.cmp(&a) != std::cmp::Ordering::Greater);

        let next = root.add(&Number::from_bigint(BigInt::one(), rscale), 0);
        let next_squared = next.mul(&next, 2 * rscale);
        prop_assert_eq!(next_squared.cmp(&a), std::cmp::Ordering::Greater);
    }
}
