//! Addition operator trait implementation
//!
//! Every operator resolves [`Operation::Sum`] from this thread's
//! registry and panics if no strategy is registered.

use super::*;


impl AddAssign<&BigInteger> for BigInteger {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInteger) {
        if let Err(err) = self.checked_add_assign(rhs) {
            panic!("{}", err);
        }
    }
}

impl AddAssign<BigInteger> for BigInteger {
    #[inline]
    fn add_assign(&mut self, rhs: BigInteger) {
        self.add_assign(&rhs);
    }
}

forward_binop_to_assign!(impl Add::add via add_assign);
