//!
//! Support for serde implementations
//!
//! Integers serialize as decimal strings and deserialize from strings
//! or unsigned integers.
//!
use crate::*;
use serde::{de, ser};


impl ser::Serialize for BigInteger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a BigInteger
struct BigIntegerVisitor;

impl<'de> de::Visitor<'de> for BigIntegerVisitor {
    type Value = BigInteger;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non-negative integer or decimal string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        BigInteger::from_str(value).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        Ok(BigInteger::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        Ok(BigInteger::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(BigInteger::from)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }
}

impl<'de> de::Deserialize<'de> for BigInteger {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(BigIntegerVisitor)
    }
}
