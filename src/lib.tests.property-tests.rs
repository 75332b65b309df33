// Property tests to be included by lib.rs


mod arithmetic {
    use super::*;

    proptest! {
        #[test]
        fn add_matches_u128(a: u64, b: u64) {
            configure();
            let expected = a as u128 + b as u128;

            let sum = BigInteger::from(a) + BigInteger::from(b);
            prop_assert_eq!(sum.to_decimal_string(), expected.to_string());

            let mut s = BigInteger::from(b);
            s += BigInteger::from(a);
            prop_assert_eq!(s, sum);
        }

        #[test]
        fn mul_matches_u128(a: u64, b: u64) {
            configure();
            let expected = a as u128 * b as u128;

            let product = BigInteger::from(a) * BigInteger::from(b);
            prop_assert_eq!(product.to_decimal_string(), expected.to_string());
            prop_assert_eq!(product, BigInteger::from(b) * BigInteger::from(a));
        }

        #[test]
        fn mul_matches_biguint(a in "[1-9][0-9]{0,60}", b in "[1-9][0-9]{0,60}") {
            configure();
            let x: BigInteger = a.parse().unwrap();
            let y: BigInteger = b.parse().unwrap();
            let expected = BigUint::from_str(&a).unwrap() * BigUint::from_str(&b).unwrap();

            let product = &x * &y;
            prop_assert_eq!(product.to_biguint(), Some(expected.clone()));
            prop_assert_eq!(product.to_decimal_string(), expected.to_string());
        }

        #[test]
        fn add_then_mul_distributes(a: u32, b: u32, c: u32) {
            configure();
            let (a, b, c) = (BigInteger::from(a), BigInteger::from(b), BigInteger::from(c));

            let lhs = &a * &(&b + &c);
            let rhs = &a * &b + &a * &c;
            prop_assert_eq!(lhs, rhs);
        }
    }
}

mod text {
    use super::*;

    proptest! {
        #[test]
        fn parse_display_round_trip(s in "[1-9][0-9]{0,80}") {
            let n: BigInteger = s.parse().unwrap();
            prop_assert_eq!(n.to_string(), s.clone());
            prop_assert_eq!(n.digit_count(), s.len());
            prop_assert_eq!(n.to_biguint().map(|v| v.to_string()), Some(s));
        }

        #[test]
        fn arbitrary_bytes_never_render_non_digits(v in prop::collection::vec(any::<u8>(), 0..40)) {
            let valid = v.iter().all(|&d| d <= 9);
            match BigInteger::try_from(v.as_slice()) {
                Ok(n) => {
                    prop_assert!(valid);
                    prop_assert!(n.to_decimal_string().bytes().all(|c| c.is_ascii_digit()));
                }
                Err(err) => {
                    prop_assert!(!valid);
                    prop_assert!(v[err.index] > 9);
                }
            }
        }

        #[test]
        fn from_biguint_matches_parse(n: u128) {
            let expected = BigInteger::from(n);
            prop_assert_eq!(BigInteger::from(BigUint::from(n)), expected);
        }
    }
}
