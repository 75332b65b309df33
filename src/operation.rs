//! Operation keys and the strategy interface implemented by every
//! arithmetic algorithm

use std::fmt;

use crate::digits::DigitBuffer;


/// Arithmetic operations a [`BigInteger`](crate::BigInteger) can request
/// from the registry
///
/// Only `Sum` and `Multiplication` have default strategies; the other
/// keys exist so callers can register their own.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Sum,
    Difference,
    Multiplication,
    Division,
}

impl Operation {
    /// All operation keys, in declaration order
    pub const ALL: [Operation; 4] = [
        Operation::Sum,
        Operation::Difference,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Upper-case key name
    pub fn name(self) -> &'static str {
        match self {
            Operation::Sum => "SUM",
            Operation::Difference => "DIFFERENCE",
            Operation::Multiplication => "MULTIPLICATION",
            Operation::Division => "DIVISION",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// An arithmetic strategy working directly on digit buffers
///
/// `calculate` computes `destination := destination <op> source` in
/// place. Implementations must leave every digit of `destination` in
/// `0..=9`.
///
pub trait Calculate {
    /// Apply the operation, storing the result in `destination`
    fn calculate(&self, destination: &mut DigitBuffer, source: &DigitBuffer);

    /// Human readable name, used in log output
    fn name(&self) -> &'static str;
}

impl fmt::Debug for dyn Calculate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Calculate({})", self.name())
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_uses_key_names() {
        let names: Vec<String> = Operation::ALL.iter().map(|op| op.to_string()).collect();
        assert_eq!(names, ["SUM", "DIFFERENCE", "MULTIPLICATION", "DIVISION"]);
    }
}
