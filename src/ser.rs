//! Serialize a `LargeInteger` as a native integer when it fits, otherwise as
//! its decimal string.

use crate::integer::LargeInteger;
use serde::ser::{Serialize, Serializer};

impl Serialize for LargeInteger {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(n) = self.as_i64() {
            serializer.serialize_i64(n)
        } else if let Some(n) = self.as_u64() {
            serializer.serialize_u64(n)
        } else {
            serializer.collect_str(self)
        }
    }
}
