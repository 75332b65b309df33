// Copyright 2015-2020 Thomas Lehmann
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Big Integers with swappable arithmetic
//!
//! `BigInteger` stores a non-negative integer of any size as a vector
//! of decimal digits, least significant digit first.
//!
//! The arithmetic itself is not hard-wired into the type. Each `+=` or
//! `*=` looks up a strategy for the requested [`Operation`] in a
//! [`Registry`], creates a fresh instance, and lets it rewrite the
//! digits in place. The [`Configurator`] installs the default
//! [`Sum`](arithmetic::Sum) and [`Multiplication`](arithmetic::Multiplication)
//! strategies, and a [`ScopedOverride`] can swap one of them out for
//! the duration of a scope; handy for testing with fake or decorated
//! strategies.
//!
//! The operators use an ambient registry owned by the current thread;
//! it is empty until [`configure`] runs, and arithmetic without a
//! registered strategy fails.
//!
//! # Example
//!
//! ```
//! use decimal_bigint::{configure, BigInteger};
//!
//! configure();
//!
//! let n = BigInteger::from(32u32) * BigInteger::from(32u32) + BigInteger::from(1024u32);
//! assert_eq!(n.to_decimal_string(), "2048");
//! ```
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]
#![allow(clippy::redundant_field_names)]

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign};
use std::str::FromStr;

use num_bigint::BigUint;
pub use num_traits::{One, Zero};

use thiserror::Error;
use tracing::trace;

#[macro_use]
mod macros;

pub mod digits;
pub use digits::{Digit, DigitBuffer, InvalidDigitValue, RADIX};

mod operation;
pub use operation::{Calculate, Operation};

mod registry;
pub use registry::{Constructor, Registry};

mod scoped;
pub use scoped::ScopedOverride;

pub mod arithmetic;

mod configurator;
pub use configurator::{configure, registry, ArithmeticRegistry, Configurator};

// From<T>, to_biguint impls
mod impl_convert;
// Add<T>, Mul<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_mul;

// PartialEq, Ord, Hash
mod impl_cmp;

// Display, Debug
mod impl_fmt;

// Implementations of num_traits
mod impl_num;

mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;


/// Arithmetic on a `BigInteger` could not be carried out
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The registry holds no strategy for the requested operation
    #[error("missing {0} implementation")]
    Unregistered(Operation),
}

/// A string could not be parsed as `BigInteger`
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseBigIntegerError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid digit '{character}' at position {position}")]
    InvalidDigit {
        position: usize,
        character: char,
    },
}


/// A non-negative integer of arbitrary size, stored in decimal digits
///
/// The default value is *empty*, which is distinct from zero.
///
#[derive(Clone, Default)]
pub struct BigInteger {
    digits: DigitBuffer,
}

impl BigInteger {
    /// Creates an empty `BigInteger` (no digits, no value)
    ///
    #[inline]
    pub fn new() -> BigInteger {
        BigInteger {
            digits: DigitBuffer::new(),
        }
    }

    /// Creates `BigInteger` owning the given digits
    ///
    #[inline]
    pub fn from_digits(digits: DigitBuffer) -> BigInteger {
        BigInteger { digits: digits }
    }

    /// Replace value with the decimal digits of `value`
    pub fn assign<T: Into<u128>>(&mut self, value: T) {
        self.digits = DigitBuffer::from_u128(value.into());
    }

    /// Borrow the underlying digit buffer
    #[inline]
    pub fn digits(&self) -> &DigitBuffer {
        &self.digits
    }

    /// Take the underlying digit buffer
    #[inline]
    pub fn into_digits(self) -> DigitBuffer {
        self.digits
    }

    /// Number of digits in the buffer
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// True if there are no digits, i.e. no value
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digits without zeros at the most significant end
    ///
    /// A non-empty buffer always keeps at least one digit.
    ///
    pub(crate) fn significant_digits(&self) -> &[Digit] {
        let digits = self.digits.as_slice();
        match digits.iter().rposition(|&d| d != 0) {
            Some(idx) => &digits[..=idx],
            None => &digits[..digits.len().min(1)],
        }
    }

    /// Apply the strategy registered for `operation` in `registry`
    ///
    /// Calculates `self := self <operation> rhs`.
    ///
    pub fn apply_with(
        &mut self,
        operation: Operation,
        rhs: &BigInteger,
        registry: &ArithmeticRegistry,
    ) -> Result<(), ArithmeticError> {
        let strategy = registry
            .resolve(&operation)
            .ok_or(ArithmeticError::Unregistered(operation))?;

        trace!(%operation, strategy = strategy.name(), "calculating");
        strategy.calculate(&mut self.digits, &rhs.digits);

        debug_assert!(
            self.digits.is_valid(),
            "strategy '{}' left digits out of range: {:?}",
            strategy.name(),
            self.digits
        );
        Ok(())
    }

    /// Apply the strategy registered for `operation` in this thread's
    /// registry
    pub fn apply(&mut self, operation: Operation, rhs: &BigInteger) -> Result<(), ArithmeticError> {
        self.apply_with(operation, rhs, &registry())
    }

    /// `self += rhs` using strategies of the given registry
    #[inline]
    pub fn add_assign_with(&mut self, rhs: &BigInteger, registry: &ArithmeticRegistry) -> Result<(), ArithmeticError> {
        self.apply_with(Operation::Sum, rhs, registry)
    }

    /// `self *= rhs` using strategies of the given registry
    #[inline]
    pub fn mul_assign_with(&mut self, rhs: &BigInteger, registry: &ArithmeticRegistry) -> Result<(), ArithmeticError> {
        self.apply_with(Operation::Multiplication, rhs, registry)
    }

    /// `self += rhs`, reporting a missing strategy instead of panicking
    #[inline]
    pub fn checked_add_assign(&mut self, rhs: &BigInteger) -> Result<(), ArithmeticError> {
        self.apply(Operation::Sum, rhs)
    }

    /// `self *= rhs`, reporting a missing strategy instead of panicking
    #[inline]
    pub fn checked_mul_assign(&mut self, rhs: &BigInteger) -> Result<(), ArithmeticError> {
        self.apply(Operation::Multiplication, rhs)
    }

    /// Sum of `self` and `rhs`, or error if no strategy is registered
    pub fn checked_add(&self, rhs: &BigInteger) -> Result<BigInteger, ArithmeticError> {
        let mut result = self.clone();
        result.checked_add_assign(rhs)?;
        Ok(result)
    }

    /// Product of `self` and `rhs`, or error if no strategy is registered
    pub fn checked_mul(&self, rhs: &BigInteger) -> Result<BigInteger, ArithmeticError> {
        let mut result = self.clone();
        result.checked_mul_assign(rhs)?;
        Ok(result)
    }
}



#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
