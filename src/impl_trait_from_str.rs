use crate::*;


impl FromStr for BigInteger {
    type Err = ParseBigIntegerError;

    /// Parse decimal string
    ///
    /// Underscores are ignored as digit separators, and leading zeros
    /// are dropped.
    ///
    fn from_str(s: &str) -> Result<BigInteger, ParseBigIntegerError> {
        let mut digits = Vec::with_capacity(s.len());
        for (position, character) in s.char_indices() {
            match character {
                '0'..='9' => digits.push(character as u8 - b'0'),
                '_' => {}
                _ => return Err(ParseBigIntegerError::InvalidDigit { position, character }),
            }
        }

        if digits.is_empty() {
            return Err(ParseBigIntegerError::Empty);
        }

        digits.reverse();
        let mut digits = DigitBuffer::from_vec(digits);
        digits.trim_high_zeros();
        Ok(BigInteger::from_digits(digits))
    }
}




#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $err:expr) => {
            #[test]
            fn $name() {
                let result = BigInteger::from_str($input);
                assert_eq!(result, Err($err));
            }
        };
    }

    impl_case!(case_empty: "" => ParseBigIntegerError::Empty);
    impl_case!(case_underscores: "___" => ParseBigIntegerError::Empty);
    impl_case!(case_negative: "-12" => ParseBigIntegerError::InvalidDigit { position: 0, character: '-' });
    impl_case!(case_plus: "+1" => ParseBigIntegerError::InvalidDigit { position: 0, character: '+' });
    impl_case!(case_decimal_point: "1.5" => ParseBigIntegerError::InvalidDigit { position: 1, character: '.' });
    impl_case!(case_space: "12 3" => ParseBigIntegerError::InvalidDigit { position: 2, character: ' ' });

    #[test]
    fn error_message() {
        let err = BigInteger::from_str("12x").unwrap_err();
        assert_eq!(err.to_string(), "invalid digit 'x' at position 2");
    }
}
