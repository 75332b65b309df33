//! Decimal digit buffers
//!
//! A [`DigitBuffer`] stores one decimal digit per element, least
//! significant digit first. The empty buffer means "no value" and is
//! distinct from zero, which is the single digit `[0]`.

use std::ops::Index;
use std::slice;

use num_integer::div_rem;
use thiserror::Error;

/// A single decimal digit, always in `0..=9`
pub type Digit = u8;

/// Radix of every digit in a [`DigitBuffer`]
pub const RADIX: Digit = 10;


/// An element of a digit vector is not a decimal digit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("value {value} at index {index} is not a decimal digit")]
pub struct InvalidDigitValue {
    pub index: usize,
    pub value: u8,
}


/// Vector of decimal digits, least-significant digit first
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DigitBuffer {
    digits: Vec<Digit>,
}

impl DigitBuffer {
    /// Create new, empty buffer
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create new, empty buffer with room for `n` digits
    pub fn with_capacity(n: usize) -> Self {
        Self::from_vec(Vec::with_capacity(n))
    }

    /// Construct from vector of digits (least significant first)
    ///
    /// Panics if any element is outside `0..=9`; see
    /// [`try_from_vec`](Self::try_from_vec) for the fallible version.
    ///
    pub fn from_vec(v: Vec<Digit>) -> Self {
        match Self::try_from_vec(v) {
            Ok(buffer) => buffer,
            Err(err) => panic!("{}", err),
        }
    }

    /// Construct from vector of digits, rejecting values above 9
    pub fn try_from_vec(v: Vec<Digit>) -> Result<Self, InvalidDigitValue> {
        match v.iter().position(|&d| d >= RADIX) {
            Some(index) => Err(InvalidDigitValue { index, value: v[index] }),
            None => Ok(Self { digits: v }),
        }
    }

    /// Decompose unsigned integer into its decimal digits
    ///
    /// Zero is stored as a single `0` digit.
    ///
    pub fn from_u128(n: u128) -> Self {
        let mut v = Vec::with_capacity(39);
        let mut remaining = n;
        loop {
            let (q, r) = div_rem(remaining, RADIX as u128);
            v.push(r as Digit);
            remaining = q;
            if remaining == 0 {
                break;
            }
        }
        Self::from_vec(v)
    }

    /// Number of digits in the buffer
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True if there are no digits at all
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// True if every element is a valid decimal digit
    pub fn is_valid(&self) -> bool {
        self.digits.iter().all(|&d| d < RADIX)
    }

    /// Digit at `index` (counted from least significant), if any
    pub fn get(&self, index: usize) -> Option<Digit> {
        self.digits.get(index).copied()
    }

    /// Iterate from least to most significant digit
    pub fn iter(&self) -> slice::Iter<'_, Digit> {
        self.digits.iter()
    }

    /// Borrow digits as slice
    pub fn as_slice(&self) -> &[Digit] {
        &self.digits
    }

    /// Borrow digits as mutable slice
    ///
    /// Callers must keep every element in `0..=9`.
    ///
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Digit] {
        &mut self.digits
    }

    /// Overwrite the digit at `index`
    ///
    /// Panics if `index` is out of bounds or `digit` is above 9.
    ///
    pub fn set(&mut self, index: usize, digit: Digit) {
        assert!(digit < RADIX, "{}", InvalidDigitValue { index, value: digit });
        self.digits[index] = digit;
    }

    /// Append new most-significant digit
    ///
    /// Panics if `digit` is above 9.
    ///
    pub fn push(&mut self, digit: Digit) {
        assert!(digit < RADIX, "{}", InvalidDigitValue { index: self.digits.len(), value: digit });
        self.digits.push(digit);
    }

    /// Remove all digits
    pub fn clear(&mut self) {
        self.digits.clear()
    }

    /// Add `value` into the digit at `index`, carrying upwards
    ///
    /// Positions past the end of the buffer are appended, so `index`
    /// may be at most `len()`.
    ///
    pub fn add_value_at(&mut self, index: usize, value: u32) {
        debug_assert!(index <= self.digits.len());

        let mut idx = index;
        let mut carry = value;
        while carry != 0 {
            let current = self.digits.get(idx).map_or(0, |&d| d as u32);
            let (q, r) = div_rem(current + carry, RADIX as u32);
            if idx < self.digits.len() {
                self.digits[idx] = r as Digit;
            } else {
                self.digits.push(r as Digit);
            }
            carry = q;
            idx += 1;
        }
    }

    /// Remove zero digits from the most significant end
    ///
    /// At least one digit is kept, so a non-empty buffer never
    /// becomes empty.
    ///
    pub fn trim_high_zeros(&mut self) {
        let nonzero_index = self.digits.iter().rposition(|&d| d != 0).unwrap_or(0);
        self.digits.truncate(nonzero_index + 1);
    }

    /// Convert to inner vector
    pub fn into_vec(self) -> Vec<Digit> {
        self.digits
    }
}

impl From<Vec<Digit>> for DigitBuffer {
    fn from(v: Vec<Digit>) -> Self {
        Self::from_vec(v)
    }
}

impl From<&[Digit]> for DigitBuffer {
    fn from(v: &[Digit]) -> Self {
        Self::from_vec(v.to_vec())
    }
}

impl AsRef<[Digit]> for DigitBuffer {
    fn as_ref(&self) -> &[Digit] {
        &self.digits
    }
}

impl Index<usize> for DigitBuffer {
    type Output = Digit;

    fn index(&self, index: usize) -> &Digit {
        &self.digits[index]
    }
}

impl<'a> IntoIterator for &'a DigitBuffer {
    type Item = &'a Digit;
    type IntoIter = slice::Iter<'a, Digit>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.iter()
    }
}
