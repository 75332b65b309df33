// Tests for BigInteger and its interaction with the registry, to be
// included by lib.rs

use std::panic;

/// Strategy running the registered `inner` strategy, then doubling
/// the result with the default sum
struct Doubling {
    inner: Box<dyn Calculate>,
}

impl Calculate for Doubling {
    fn calculate(&self, destination: &mut DigitBuffer, source: &DigitBuffer) {
        self.inner.calculate(destination, source);
        let copy = destination.clone();
        arithmetic::Sum.calculate(destination, &copy);
    }

    fn name(&self) -> &'static str {
        "doubling"
    }
}

fn only_sum_registered() {
    let registry = registry();
    registry.clear();
    registry.register(Operation::Sum, || Box::new(arithmetic::Sum) as Box<dyn Calculate>);
}

#[test]
fn test_defaults() {
    let n = BigInteger::new();
    assert!(n.is_empty());
    assert_eq!(n.digit_count(), 0);
    assert_eq!(n.to_decimal_string(), "");
    assert!(BigInteger::default().is_empty());
}

#[test]
fn test_from_digits() {
    let n = BigInteger::from_digits(DigitBuffer::from_vec(vec![4, 2, 0, 1]));
    assert!(!n.is_empty());
    assert_eq!(n.digit_count(), 4);
    assert_eq!(n.to_decimal_string(), "1024");
    assert_eq!(format!("{:?}", n), "BigInteger(1024)");
}

#[test]
fn test_assign_native_integer() {
    let mut n = BigInteger::from(1234567890u64);
    assert_eq!(n.to_decimal_string(), "1234567890");

    n.assign(42u8);
    assert_eq!(n.to_decimal_string(), "42");
    assert_eq!(n.digit_count(), 2);

    n.assign(0u32);
    assert_eq!(n.to_decimal_string(), "0");
    assert_eq!(n.digit_count(), 1);
}

#[test]
fn test_add_with_only_sum_registered() {
    only_sum_registered();

    let mut n = BigInteger::from(vec![4, 2, 0, 1]);
    let copy = n.clone();
    n += &copy;
    assert_eq!(n.to_decimal_string(), "2048");

    let a = BigInteger::from(vec![4, 2, 0, 1]);
    let b = BigInteger::from(vec![1, 0, 2, 4]);
    assert_eq!((&a + &b).to_decimal_string(), "5225");
}

#[test]
fn test_mul_with_only_multiplication_registered() {
    let registry = registry();
    registry.clear();
    registry.register(Operation::Multiplication, || Box::new(arithmetic::Multiplication) as Box<dyn Calculate>);

    let a = BigInteger::from(123456789u32);
    let b = BigInteger::from(987654321u32);
    assert_eq!((a * b).to_decimal_string(), "121932631112635269");
}

#[test]
fn test_configure_all() {
    configure();
    let n = BigInteger::from(32u32) * BigInteger::from(32u32) + BigInteger::from(1024u32);
    assert_eq!(n.to_decimal_string(), "2048");
}

#[test]
fn test_unregistered_after_clear() {
    configure();
    registry().clear();

    let mut n = BigInteger::from(5u8);
    let result = n.checked_add_assign(&BigInteger::from(7u8));
    assert_eq!(result, Err(ArithmeticError::Unregistered(Operation::Sum)));
    assert_eq!(n.to_decimal_string(), "5");

    let result = n.checked_mul(&BigInteger::from(7u8));
    assert_eq!(result, Err(ArithmeticError::Unregistered(Operation::Multiplication)));
}

#[test]
fn test_placeholder_operations_fail_cleanly() {
    configure();
    let mut n = BigInteger::from(10u8);
    let rhs = BigInteger::from(3u8);

    assert_eq!(
        n.apply(Operation::Difference, &rhs),
        Err(ArithmeticError::Unregistered(Operation::Difference))
    );
    assert_eq!(
        n.apply(Operation::Division, &rhs),
        Err(ArithmeticError::Unregistered(Operation::Division))
    );
    assert_eq!(n.to_decimal_string(), "10");
}

#[test]
fn test_error_message() {
    let err = ArithmeticError::Unregistered(Operation::Sum);
    assert_eq!(err.to_string(), "missing SUM implementation");
}

#[test]
fn test_explicit_registry() {
    // ambient registry stays empty
    let registry = ArithmeticRegistry::new();
    Configurator::new().configure(&registry);

    let mut n = BigInteger::from(32u8);
    n.mul_assign_with(&BigInteger::from(32u8), &registry).unwrap();
    n.add_assign_with(&BigInteger::from(1024u32), &registry).unwrap();
    assert_eq!(n.to_decimal_string(), "2048");

    assert!(self::registry().is_empty());
    assert!(n.checked_add(&BigInteger::from(1u8)).is_err());
}

#[test]
fn test_override_round_trip() {
    configure();
    let registry = registry();
    let before = BigInteger::from(2u8) + BigInteger::from(3u8);

    {
        let original = registry.find(&Operation::Sum).unwrap();
        let _guard = ScopedOverride::with(&registry, Operation::Sum, move || {
            Box::new(Doubling { inner: original.create() }) as Box<dyn Calculate>
        });

        let n = BigInteger::from(2u8) + BigInteger::from(3u8);
        assert_eq!(n.to_decimal_string(), "10");
    }

    let after = BigInteger::from(2u8) + BigInteger::from(3u8);
    assert_eq!(before, after);
    assert_eq!(after.to_decimal_string(), "5");
}

#[test]
fn test_override_restored_after_failed_arithmetic() {
    configure();
    let registry = registry();

    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        let _guard = ScopedOverride::with(&registry, Operation::Multiplication, || {
            Box::new(arithmetic::Sum) as Box<dyn Calculate>
        });
        assert_eq!((BigInteger::from(3u8) * BigInteger::from(4u8)).to_decimal_string(), "7");

        // leave the scope through an arithmetic failure
        registry.clear();
        BigInteger::from(1u8) + BigInteger::from(1u8)
    }));
    assert!(result.is_err());

    // the guard's restore call finds no entry and inserts nothing
    assert!(registry.is_empty());

    configure();
    assert_eq!((BigInteger::from(3u8) * BigInteger::from(4u8)).to_decimal_string(), "12");
}

#[test]
fn test_override_of_missing_key_leaves_no_trace() {
    configure();
    let registry = registry();
    {
        let guard = ScopedOverride::with(&registry, Operation::Difference, || {
            Box::new(arithmetic::Sum) as Box<dyn Calculate>
        });
        assert!(!guard.is_active());
    }
    assert!(!registry.contains(&Operation::Difference));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_power_of_two_by_addition() {
    configure();
    let mut n = BigInteger::from(1u8);
    for _ in 0..300 {
        let copy = n.clone();
        n += copy;
    }
    assert_eq!(
        n.to_decimal_string(),
        "2037035976334486086268445688409378161051468393665936250636140449354381299763336706183397376"
    );
    assert_eq!(n.digit_count(), 91);
}

#[test]
fn test_factorial_100() {
    configure();
    let mut n = BigInteger::from(1u8);
    for i in 2..=100u32 {
        n *= BigInteger::from(i);
    }
    assert_eq!(n.digit_count(), 158);
    assert!(n.to_decimal_string().starts_with("93326215443944152681"));
    assert!(n.to_decimal_string().ends_with("000000000000000000000000"));
}

macro_rules! impl_case {
    ($name:ident: $a:literal + $b:literal = $c:literal) => {
        paste! {
            #[test]
            fn [< add_ $name >]() {
                configure();
                let a: BigInteger = $a.parse().unwrap();
                let b: BigInteger = $b.parse().unwrap();
                assert_eq!((&a + &b).to_decimal_string(), $c);
                assert_eq!((&b + &a).to_decimal_string(), $c);
            }
        }
    };
    ($name:ident: $a:literal * $b:literal = $c:literal) => {
        paste! {
            #[test]
            fn [< mul_ $name >]() {
                configure();
                let a: BigInteger = $a.parse().unwrap();
                let b: BigInteger = $b.parse().unwrap();
                assert_eq!((&a * &b).to_decimal_string(), $c);
                assert_eq!((&b * &a).to_decimal_string(), $c);
            }
        }
    };
}

impl_case!(case_1024_4201: "1024" + "4201" = "5225");
impl_case!(case_0_0: "0" + "0" = "0");
impl_case!(case_carry_chain: "99999999999999999999" + "1" = "100000000000000000000");
impl_case!(case_1234_56789: "1234" * "56789" = "70077626");
impl_case!(case_zeros: "0" * "0" = "0");
impl_case!(case_123456789_987654321: "123456789" * "987654321" = "121932631112635269");
impl_case!(case_10e20_10e20: "100000000000000000000" * "100000000000000000000" = "10000000000000000000000000000000000000000");
