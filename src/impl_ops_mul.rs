//! Multiplication operator trait implementation
//!

use super::*;


impl MulAssign<&BigInteger> for BigInteger {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigInteger) {
        if let Err(err) = self.checked_mul_assign(rhs) {
            panic!("{}", err);
        }
    }
}

impl MulAssign<BigInteger> for BigInteger {
    #[inline]
    fn mul_assign(&mut self, rhs: BigInteger) {
        self.mul_assign(&rhs);
    }
}

forward_binop_to_assign!(impl Mul::mul via mul_assign);


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mul_refs() {
        configure();
        let a = BigInteger::from(123456789u32);
        let b = BigInteger::from(987654321u32);
        assert_eq!((&a * &b).to_decimal_string(), "121932631112635269");
        assert_eq!((&b * &a).to_decimal_string(), "121932631112635269");
    }

    #[test]
    fn mul_assign_primitive() {
        configure();
        let mut n = BigInteger::from(1u8);
        for i in 2..=30u32 {
            n *= i;
        }
        assert_eq!(n.to_decimal_string(), "265252859812191058636308480000000");
    }

    #[test]
    fn mul_by_zero_is_single_zero() {
        configure();
        let n = BigInteger::from(1234u32) * 0u8;
        assert_eq!(n.to_decimal_string(), "0");
        assert_eq!(n.digit_count(), 1);
    }

    #[test]
    #[should_panic(expected = "missing MULTIPLICATION implementation")]
    fn mul_without_strategy_panics() {
        let registry = registry();
        registry.clear();
        registry.register(Operation::Sum, || Box::new(arithmetic::Sum) as Box<dyn Calculate>);
        let _ = BigInteger::from(2u8) * BigInteger::from(3u8);
    }
}
