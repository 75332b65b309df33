//! Implementation of comparison & hashing traits
//!
//! Values compare numerically: high zero digits a strategy may have
//! left behind are ignored. The empty integer equals only itself and
//! sorts before every number.

use crate::*;


impl PartialEq for BigInteger {
    #[inline]
    fn eq(&self, rhs: &BigInteger) -> bool {
        self.significant_digits() == rhs.significant_digits()
    }
}

impl Eq for BigInteger {}

impl Ord for BigInteger {
    fn cmp(&self, rhs: &BigInteger) -> Ordering {
        let a = self.significant_digits();
        let b = rhs.significant_digits();

        // digit count first, then most significant digit downwards
        a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
    }
}

impl PartialOrd for BigInteger {
    #[inline]
    fn partial_cmp(&self, rhs: &BigInteger) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_digits().hash(state);
    }
}
