// \file src/macros.rs
//! macros for operator implementations

/// Implement `Op<&BigInteger>` for owned and borrowed receivers, in
/// terms of the matching `*Assign` implementation
macro_rules! forward_binop_to_assign {
    (impl $imp:ident::$method:ident via $assign_method:ident) => {
        impl<'a> $imp<&'a BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(mut self, rhs: &BigInteger) -> BigInteger {
                self.$assign_method(rhs);
                self
            }
        }

        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                // forward to val-ref
                $imp::$method(self, &rhs)
            }
        }

        impl<'a> $imp<&'a BigInteger> for &'_ BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $imp::$method(self.clone(), rhs)
            }
        }

        impl $imp<BigInteger> for &'_ BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                $imp::$method(self.clone(), &rhs)
            }
        }
    };
}

/// Implement `Op<$t>` and `OpAssign<$t>` for unsigned primitives by
/// converting them to `BigInteger` first
macro_rules! impl_binop_for_primitive {
    (impl $imp:ident::$method:ident, $imp_assign:ident::$assign_method:ident for $t:ty) => {
        impl $imp_assign<$t> for BigInteger {
            #[inline]
            fn $assign_method(&mut self, rhs: $t) {
                self.$assign_method(&BigInteger::from(rhs));
            }
        }

        impl $imp<$t> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(mut self, rhs: $t) -> BigInteger {
                self.$assign_method(rhs);
                self
            }
        }

        impl $imp<$t> for &'_ BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: $t) -> BigInteger {
                $imp::$method(self.clone(), rhs)
            }
        }

        impl $imp<BigInteger> for $t {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                $imp::$method(BigInteger::from(self), &rhs)
            }
        }
    };
}
