//! Implement math operations: Add, Mul, etc for primitives and iterators

use crate::*;


macro_rules! impl_ops_for_primitive {
    ($($t:ty),*) => {$(
        impl_binop_for_primitive!(impl Add::add, AddAssign::add_assign for $t);
        impl_binop_for_primitive!(impl Mul::mul, MulAssign::mul_assign for $t);
    )*};
}

impl_ops_for_primitive!(u8, u16, u32, u64, u128, usize);


impl Sum for BigInteger {
    #[inline]
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> BigInteger {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    #[inline]
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> BigInteger {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl Product for BigInteger {
    #[inline]
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> BigInteger {
        iter.fold(One::one(), |a, b| a * b)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    #[inline]
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> BigInteger {
        iter.fold(One::one(), |a, b| a * b)
    }
}
