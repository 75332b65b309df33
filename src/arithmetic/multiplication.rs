//!
//! Schoolbook multiplication of decimal digit buffers
//!

use num_integer::div_rem;

use crate::digits::{Digit, DigitBuffer, RADIX};
use crate::operation::Calculate;


/// Default strategy for [`Operation::Multiplication`](crate::Operation::Multiplication)
///
/// Long multiplication, one row per source digit:
///
/// ```text
///     1234 * 56789
///     ------------
///       6170
///     +  7404
///     +   8638
///     +    9872
///     +    11106
///     ==========
///       70077626
/// ```
///
#[derive(Clone, Copy, Debug, Default)]
pub struct Multiplication;

impl Calculate for Multiplication {
    fn calculate(&self, destination: &mut DigitBuffer, source: &DigitBuffer) {
        let product = multiply_digits(destination.as_slice(), source.as_slice());
        *destination = product;
    }

    fn name(&self) -> &'static str {
        "multiplication"
    }
}


/// Product of two digit slices (least significant first)
///
/// If either operand is empty the product is empty. Otherwise high
/// zero digits are removed, keeping at least one digit.
///
pub(crate) fn multiply_digits(a: &[Digit], b: &[Digit]) -> DigitBuffer {
    let mut result = DigitBuffer::with_capacity(a.len() + b.len());
    multiply_digits_into(a, b, &mut result);
    return result;
}

/// Fill `result` with the product of `a` and `b`
#[inline]
pub(crate) fn multiply_digits_into(a: &[Digit], b: &[Digit], result: &mut DigitBuffer) {
    result.clear();
    if a.is_empty() || b.is_empty() {
        return;
    }

    for (offset, &digit_b) in b.iter().enumerate() {
        let mut carry: Digit = 0;

        for (ia, &digit_a) in a.iter().enumerate() {
            let idx = offset + ia;
            // 9 * 9 + 9 + 9 = 99, fits within one digit plus carry
            match result.get(idx) {
                Some(accumulated) => {
                    let (q, r) = div_rem(digit_a * digit_b + accumulated + carry, RADIX);
                    result.as_mut_slice()[idx] = r;
                    carry = q;
                }
                None => {
                    let (q, r) = div_rem(digit_a * digit_b + carry, RADIX);
                    result.push(r);
                    carry = q;
                }
            }
        }

        // leftover carry lands directly above this row
        result.add_value_at(offset + a.len(), carry as u32);
    }

    result.trim_high_zeros();
}
