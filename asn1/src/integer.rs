use std::fmt::Display;

use mixder_der::{Class, Field, Tag};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

// ASN.1 INTEGER is arbitrary sized and signed. Election moduli are far
// wider than any machine word, so everything goes through BigInt.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer {
    inner: BigInt,
}

impl Integer {
    pub fn new(inner: BigInt) -> Self {
        Integer { inner }
    }

    pub fn as_bigint(&self) -> &BigInt {
        &self.inner
    }

    pub fn into_bigint(self) -> BigInt {
        self.inner
    }

    /// Minimal two's-complement big-endian content octets.
    pub fn to_der_content(&self) -> Vec<u8> {
        // num-bigint already produces the shortest form, including a single
        // 0x00 for zero and a 0x00 pad for positives with the top bit set.
        self.inner.to_signed_bytes_be()
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.inner.to_i64()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.inner.to_u64()
    }
}

/// Decodes INTEGER content octets as a signed big-endian number.
pub fn decode_integer(content: &[u8]) -> Result<BigInt> {
    if content.is_empty() {
        return Err(Error::IntegerNoData);
    }
    Ok(BigInt::from_signed_bytes_be(content))
}

impl TryFrom<&[u8]> for Integer {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        decode_integer(value).map(Integer::new)
    }
}

impl TryFrom<&Field> for Integer {
    type Error = Error;

    fn try_from(field: &Field) -> Result<Self> {
        match (field.class(), field.tag(), field.leaf()) {
            (Class::Universal, Tag::Integer, Some(content)) => Integer::try_from(content),
            (_, tag, _) => Err(Error::UnsupportedTag(tag)),
        }
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Integer { inner: value }
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer {
            inner: BigInt::from(value),
        }
    }
}

impl From<Integer> for BigInt {
    fn from(value: Integer) -> Self {
        value.inner
    }
}

impl AsRef<BigInt> for Integer {
    fn as_ref(&self) -> &BigInt {
        &self.inner
    }
}

impl Serialize for Integer {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.inner.to_string())
    }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let inner = s.parse::<BigInt>().map_err(serde::de::Error::custom)?;
        Ok(Integer { inner })
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
