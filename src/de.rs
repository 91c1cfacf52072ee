//! Deserialize a `LargeInteger` from any integer primitive or from a
//! decimal string.

use crate::integer::LargeInteger;
use core::fmt;
use serde::de::{self, Deserialize, Deserializer, Visitor};

impl<'de> Deserialize<'de> for LargeInteger {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<LargeInteger, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LargeIntegerVisitor;

        impl<'de> Visitor<'de> for LargeIntegerVisitor {
            type Value = LargeInteger;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string of decimal digits")
            }

            #[inline]
            fn visit_i64<E>(self, value: i64) -> Result<LargeInteger, E> {
                Ok(value.into())
            }

            #[inline]
            fn visit_u64<E>(self, value: u64) -> Result<LargeInteger, E> {
                Ok(value.into())
            }

            #[inline]
            fn visit_i128<E>(self, value: i128) -> Result<LargeInteger, E> {
                Ok(value.into())
            }

            #[inline]
            fn visit_u128<E>(self, value: u128) -> Result<LargeInteger, E> {
                Ok(value.into())
            }

            fn visit_str<E>(self, value: &str) -> Result<LargeInteger, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(LargeIntegerVisitor)
    }
}
