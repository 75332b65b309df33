//! Implementation of num_traits for BigInteger

use crate::*;


impl Zero for BigInteger {
    #[inline]
    fn zero() -> BigInteger {
        BigInteger::from(0u8)
    }

    /// True for any non-empty buffer holding only zero digits
    #[inline]
    fn is_zero(&self) -> bool {
        self.significant_digits() == [0]
    }

    fn set_zero(&mut self) {
        self.digits.clear();
        self.digits.push(0);
    }
}

impl One for BigInteger {
    #[inline]
    fn one() -> BigInteger {
        BigInteger::from(1u8)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.significant_digits() == [1]
    }

    fn set_one(&mut self) {
        self.digits.clear();
        self.digits.push(1);
    }
}
