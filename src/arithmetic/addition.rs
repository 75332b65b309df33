//!
//! Addition of decimal digit buffers
//!

use num_integer::div_rem;

use crate::digits::{Digit, DigitBuffer, RADIX};
use crate::operation::Calculate;


/// Default strategy for [`Operation::Sum`](crate::Operation::Sum)
///
/// Adds digit by digit from the least significant end, appending to
/// the destination when the source is longer.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum;

impl Calculate for Sum {
    fn calculate(&self, destination: &mut DigitBuffer, source: &DigitBuffer) {
        add_digits_into(destination, source.as_slice());
    }

    fn name(&self) -> &'static str {
        "sum"
    }
}


/// Add `source` into `destination`, in place
///
/// An empty operand contributes no digits; the result has
/// `max(len(a), len(b))` digits, plus one if a final carry remains.
///
#[inline]
pub(crate) fn add_digits_into(destination: &mut DigitBuffer, source: &[Digit]) {
    let mut carry: Digit = 0;

    for (idx, &b_digit) in source.iter().enumerate() {
        match destination.get(idx) {
            Some(a_digit) => {
                let (q, r) = div_rem(a_digit + b_digit + carry, RADIX);
                destination.as_mut_slice()[idx] = r;
                carry = q;
            }
            None => {
                let (q, r) = div_rem(b_digit + carry, RADIX);
                destination.push(r);
                carry = q;
            }
        }
    }

    // source exhausted; push remaining carry through destination
    let mut idx = source.len();
    while carry != 0 {
        match destination.get(idx) {
            Some(a_digit) => {
                let (q, r) = div_rem(a_digit + carry, RADIX);
                destination.as_mut_slice()[idx] = r;
                carry = q;
                idx += 1;
            }
            None => {
                // carry is not zero and destination has ended
                destination.push(carry);
                return;
            }
        }
    }
}
