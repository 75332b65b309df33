//! Code for implementing From/To BigIntegers

use crate::*;


macro_rules! impl_from_int_primitive {
    ($t:ty) => {
        impl From<$t> for BigInteger {
            fn from(n: $t) -> Self {
                BigInteger {
                    digits: DigitBuffer::from_u128(n as u128),
                }
            }
        }

        impl From<&$t> for BigInteger {
            fn from(n: &$t) -> Self {
                BigInteger::from(*n)
            }
        }
    };
}

impl_from_int_primitive!(u8);
impl_from_int_primitive!(u16);
impl_from_int_primitive!(u32);
impl_from_int_primitive!(u64);
impl_from_int_primitive!(u128);
impl_from_int_primitive!(usize);


impl From<DigitBuffer> for BigInteger {
    fn from(digits: DigitBuffer) -> Self {
        BigInteger::from_digits(digits)
    }
}

/// Panics on elements above 9
impl From<Vec<Digit>> for BigInteger {
    fn from(digits: Vec<Digit>) -> Self {
        BigInteger::from_digits(DigitBuffer::from_vec(digits))
    }
}

impl TryFrom<&[Digit]> for BigInteger {
    type Error = InvalidDigitValue;

    fn try_from(digits: &[Digit]) -> Result<Self, InvalidDigitValue> {
        DigitBuffer::try_from_vec(digits.to_vec()).map(BigInteger::from_digits)
    }
}

impl From<&BigUint> for BigInteger {
    fn from(n: &BigUint) -> Self {
        // little-endian radix digits are exactly our storage order
        BigInteger::from(n.to_radix_le(RADIX as u32))
    }
}

impl From<BigUint> for BigInteger {
    fn from(n: BigUint) -> Self {
        BigInteger::from(&n)
    }
}

impl BigInteger {
    /// Convert to `num_bigint::BigUint`
    ///
    /// Returns `None` for the empty (valueless) integer.
    ///
    pub fn to_biguint(&self) -> Option<BigUint> {
        if self.is_empty() {
            return None;
        }
        BigUint::from_radix_le(self.digits.as_slice(), RADIX as u32)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $t:ty, $input:expr => [$($digits:literal),*]) => {
            #[test]
            fn $name() {
                let value: $t = $input;
                let n = BigInteger::from(value);
                let expected: &[Digit] = &[$($digits),*];
                assert_eq!(n.digits().as_slice(), expected);
            }
        };
    }

    impl_case!(case_u8_0: u8, 0 => [0]);
    impl_case!(case_u8_255: u8, 255 => [5, 5, 2]);
    impl_case!(case_u16_1024: u16, 1024 => [4, 2, 0, 1]);
    impl_case!(case_u32_1234567890: u32, 1234567890 => [0, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
    impl_case!(case_u64_10: u64, 10 => [0, 1]);
    impl_case!(case_usize_7: usize, 7 => [7]);

    #[test]
    fn from_u128_max() {
        let n = BigInteger::from(u128::MAX);
        assert_eq!(n.to_decimal_string(), u128::MAX.to_string());
    }

    #[test]
    fn from_ref() {
        let value = 42u64;
        assert_eq!(BigInteger::from(&value), BigInteger::from(42u8));
    }

    #[test]
    fn from_digit_vec() {
        let n = BigInteger::from(vec![4, 2, 0, 1]);
        assert_eq!(n.to_decimal_string(), "1024");
    }

    #[test]
    #[should_panic(expected = "value 12 at index 0 is not a decimal digit")]
    fn from_digit_vec_rejects_large_elements() {
        let _ = BigInteger::from(vec![12, 1]);
    }

    #[test]
    fn try_from_digit_slice() {
        let digits: &[Digit] = &[4, 2, 0, 1];
        let n = BigInteger::try_from(digits).unwrap();
        assert_eq!(n.to_decimal_string(), "1024");

        let digits: &[Digit] = &[1, 208];
        let err = BigInteger::try_from(digits).unwrap_err();
        assert_eq!(err, InvalidDigitValue { index: 1, value: 208 });
    }

    #[test]
    fn biguint_round_trip() {
        let big = BigUint::from(2u8).pow(200);
        let n = BigInteger::from(&big);
        assert_eq!(n.to_decimal_string(), big.to_str_radix(10));
        assert_eq!(n.to_biguint(), Some(big));
    }

    #[test]
    fn empty_has_no_biguint() {
        assert_eq!(BigInteger::new().to_biguint(), None);
    }

    #[test]
    fn zero_biguint() {
        let n = BigInteger::from(BigUint::from(0u8));
        assert_eq!(n.digits().as_slice(), &[0]);
        assert_eq!(n.to_biguint(), Some(BigUint::from(0u8)));
    }
}
