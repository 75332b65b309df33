//! arithmetic routines
//!
//! Default strategies for the operations resolved through the
//! registry. Both work on [`DigitBuffer`](crate::DigitBuffer)s in place.

pub(crate) mod addition;
pub(crate) mod multiplication;

pub use self::addition::Sum;
pub use self::multiplication::Multiplication;
