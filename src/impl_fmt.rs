//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;


// const DEBUG_DIGIT_LIMIT: usize = ${RUST_DECIMAL_BIGINT_DEBUG_DIGIT_LIMIT} or 64;
include!(concat!(env!("OUT_DIR"), "/debug_digit_limit.rs"));

/// Number of leading digits shown by an abbreviated `Debug` output
const DEBUG_PREFIX_DIGITS: usize = 16;


impl BigInteger {
    /// Decimal representation, most significant digit first
    ///
    /// Contains only ASCII digits, no sign or grouping characters, and
    /// no leading zeros except for zero itself. The empty integer
    /// renders as the empty string.
    ///
    pub fn to_decimal_string(&self) -> String {
        let digits = self.significant_digits();
        let mut result = String::with_capacity(digits.len());
        result.extend(digits.iter().rev().map(|&d| char::from(b'0' + d)));
        return result;
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "", &self.to_decimal_string())
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_debug(self, f, DEBUG_DIGIT_LIMIT)
    }
}

fn format_debug(this: &BigInteger, f: &mut fmt::Formatter, limit: usize) -> fmt::Result {
    let count = this.significant_digits().len();
    if count <= limit {
        return write!(f, "BigInteger({})", this.to_decimal_string());
    }

    let repr = this.to_decimal_string();
    let prefix_len = DEBUG_PREFIX_DIGITS.min(limit).max(1);
    write!(f, "BigInteger({}...; {} digits)", &repr[..prefix_len], count)
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($digits:literal),*] => $expected:literal) => {
            #[test]
            fn $name() {
                let n = BigInteger::from(vec![$($digits),*]);
                assert_eq!(n.to_decimal_string(), $expected);
                assert_eq!(format!("{}", n), $expected);
            }
        };
    }

    impl_case!(case_1024: [4, 2, 0, 1] => "1024");
    impl_case!(case_0: [0] => "0");
    impl_case!(case_000: [0, 0, 0] => "0");
    impl_case!(case_high_zeros: [7, 0, 0] => "7");
    impl_case!(case_empty: [] => "");

    #[test]
    fn display_honours_width() {
        let n = BigInteger::from(42u8);
        assert_eq!(format!("{:>6}", n), "    42");
        assert_eq!(format!("{:06}", n), "000042");
    }

    #[test]
    fn debug_short() {
        let n = BigInteger::from(1024u32);
        assert_eq!(format!("{:?}", n), "BigInteger(1024)");
        assert_eq!(format!("{:?}", BigInteger::new()), "BigInteger()");
    }

    struct Limited<'a>(&'a BigInteger, usize);

    impl fmt::Display for Limited<'_> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            format_debug(self.0, f, self.1)
        }
    }

    #[test]
    fn debug_abbreviates_long_values() {
        let n = BigInteger::from(u128::MAX);
        assert_eq!(
            Limited(&n, 20).to_string(),
            "BigInteger(3402823669209384...; 39 digits)"
        );
        assert_eq!(
            Limited(&n, 4).to_string(),
            "BigInteger(3402...; 39 digits)"
        );
    }
}
