use std::{fmt::Display, str::FromStr};

use mixder_der::{Class, Field, Tag};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Object identifier as a list of arcs.
///
/// Arcs after the first two may be arbitrarily large. The first two share
/// one content octet (`40 * arc0 + arc1`) and are recovered with `/ 40` and
/// `% 40`, which only round-trips for `arc0 <= 2` and `arc1 < 40`;
/// [`ObjectIdentifier::new`] refuses anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectIdentifier {
    arcs: Vec<BigUint>,
}

impl ObjectIdentifier {
    pub fn new(arcs: Vec<BigUint>) -> Result<Self> {
        if arcs.len() < 2 {
            return Err(Error::ObjectIdentifierTooFewComponents);
        }
        if arcs[0] > BigUint::from(2u8) || arcs[1] >= BigUint::from(40u8) {
            return Err(Error::ObjectIdentifierInvalidFirstArcs(format!(
                "{}.{}",
                arcs[0], arcs[1]
            )));
        }
        Ok(ObjectIdentifier { arcs })
    }

    pub fn arcs(&self) -> &[BigUint] {
        &self.arcs
    }

    /// Content octets of the DER encoding.
    pub fn to_der_content(&self) -> Vec<u8> {
        let mut content = Vec::new();
        let first = &self.arcs[0] * 40u32 + &self.arcs[1];
        push_base128(&mut content, &first);
        for arc in &self.arcs[2..] {
            push_base128(&mut content, arc);
        }
        content
    }
}

// Most significant group first; every group but the last has the high bit set.
fn push_base128(out: &mut Vec<u8>, value: &BigUint) {
    if value.is_zero() {
        out.push(0);
        return;
    }
    let groups = value.to_radix_be(128);
    let last = groups.len() - 1;
    for (i, group) in groups.into_iter().enumerate() {
        if i < last {
            out.push(group | 0x80);
        } else {
            out.push(group);
        }
    }
}

/// Decodes OBJECT IDENTIFIER content octets.
pub fn decode_oid(content: &[u8]) -> Result<ObjectIdentifier> {
    let (&first, rest) = content
        .split_first()
        .ok_or(Error::ObjectIdentifierNoData)?;
    if first & 0x80 != 0 {
        return Err(Error::ObjectIdentifierInvalidFirstArcs(format!(
            "0x{:02x}",
            first
        )));
    }

    let mut arcs = vec![BigUint::from(first / 40), BigUint::from(first % 40)];
    let mut arc = BigUint::zero();
    let mut pending = false;
    for &b in rest {
        arc = (arc << 7u32) | BigUint::from(b & 0x7f);
        pending = b & 0x80 != 0;
        if !pending {
            arcs.push(std::mem::take(&mut arc));
        }
    }
    if pending {
        // the last group still announced a continuation
        return Err(Error::ObjectIdentifierIncompleteEncoding);
    }

    Ok(ObjectIdentifier { arcs })
}

impl TryFrom<&[u8]> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        decode_oid(value)
    }
}

impl TryFrom<&Field> for ObjectIdentifier {
    type Error = Error;

    fn try_from(field: &Field) -> Result<Self> {
        match (field.class(), field.tag(), field.leaf()) {
            (Class::Universal, Tag::ObjectIdentifier, Some(content)) => decode_oid(content),
            (_, tag, _) => Err(Error::UnsupportedTag(tag)),
        }
    }
}

impl TryFrom<&[u64]> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &[u64]) -> Result<Self> {
        ObjectIdentifier::new(value.iter().map(|&arc| BigUint::from(arc)).collect())
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let arcs = s
            .split('.')
            .map(|c| {
                c.parse::<BigUint>()
                    .map_err(|_| Error::ObjectIdentifierInvalidComponent(c.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        ObjectIdentifier::new(arcs)
    }
}

impl Display for ObjectIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self
            .arcs
            .iter()
            .map(|arc| arc.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}", s)
    }
}

impl PartialEq<&str> for ObjectIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl Serialize for ObjectIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ObjectIdentifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectIdentifier::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use mixder_der::{Tag, parse};
    use num_bigint::BigUint;
    use rstest::rstest;

    use super::{ObjectIdentifier, decode_oid};
    use crate::error::Error;

    fn oid(arcs: &[u64]) -> ObjectIdentifier {
        ObjectIdentifier::try_from(arcs).unwrap()
    }

    #[rstest(input, expected,
    // Test case for ISO/ITU-T joint standards (1.2)
    case(vec![0x2a], vec![1, 2]),
    // Test case for ISO/IEC standard (1.3.6.1.4.1)
    case(vec![0x2b, 0x06, 0x01, 0x04, 0x01], vec![1, 3, 6, 1, 4, 1]),
    // Test case for ITU-T standard (0.9.2342.19200300.100.1.1)
    case(vec![0x09, 0x92, 0x26, 0x89, 0x93, 0xf2, 0x2c, 0x64, 0x01, 0x01], vec![0, 9, 2342, 19200300, 100, 1, 1]),
    // Test case for multi-byte encoding (1.2.840.113549.1.1.5)
    case(vec![0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x05], vec![1, 2, 840, 113549, 1, 1, 5]),
    // ballot scheme (1.3.6.1.4.1.3029.2.1)
    case(vec![0x2b, 0x06, 0x01, 0x04, 0x01, 0x97, 0x55, 0x02, 0x01], vec![1, 3, 6, 1, 4, 1, 3029, 2, 1]),
    )]
    fn test_decode_oid(input: Vec<u8>, expected: Vec<u64>) {
        assert_eq!(oid(&expected), decode_oid(&input).unwrap());
        assert_eq!(input, oid(&expected).to_der_content());
    }

    #[rstest(input, expected,
        case(vec![], Error::ObjectIdentifierNoData),
        case(vec![0x2a, 0x86], Error::ObjectIdentifierIncompleteEncoding),
        case(vec![0x2a, 0x86, 0x48, 0x80], Error::ObjectIdentifierIncompleteEncoding),
    )]
    fn test_decode_oid_error(input: Vec<u8>, expected: Error) {
        assert_eq!(Err(expected), decode_oid(&input));
    }

    #[test]
    fn test_oid_arc_wider_than_u64() {
        let big = BigUint::from_str("340282366920938463463374607431768211457").unwrap();
        let oid = ObjectIdentifier::new(vec![
            BigUint::from(2u8),
            BigUint::from(25u8),
            big.clone(),
        ])
        .unwrap();
        let content = oid.to_der_content();
        assert_eq!(0x69, content[0]);
        assert_eq!(&big, decode_oid(&content).unwrap().arcs().last().unwrap());
    }

    #[rstest(arcs,
        case(vec![1]),
        case(vec![3, 1]),
        case(vec![1, 40]),
        case(vec![2, 100, 3]),
    )]
    fn test_oid_new_rejects(arcs: Vec<u64>) {
        assert!(ObjectIdentifier::try_from(arcs.as_slice()).is_err());
    }

    #[rstest(input, expected,
        case("1.2.3.4", vec![1, 2, 3, 4]),
        case("1.3.6.1.4.1.3029.2.1", vec![1, 3, 6, 1, 4, 1, 3029, 2, 1]),
    )]
    fn test_oid_from_str(input: &str, expected: Vec<u64>) {
        let actual = ObjectIdentifier::from_str(input).unwrap();
        assert_eq!(oid(&expected), actual);
        assert_eq!(input, actual.to_string());
        assert!(actual == input);
    }

    #[test]
    fn test_oid_from_str_invalid_component() {
        assert_eq!(
            Err(Error::ObjectIdentifierInvalidComponent("x".to_string())),
            ObjectIdentifier::from_str("1.2.x")
        );
    }

    #[rstest(input, expected,
        case(vec![0x06, 0x01, 0x2a], Ok(vec![1, 2])),
        case(vec![0x46, 0x01, 0x2a], Err(Error::UnsupportedTag(Tag::ObjectIdentifier))),
        case(vec![0xc6, 0x01, 0x2a], Err(Error::UnsupportedTag(Tag::ObjectIdentifier))),
        case(vec![0x04, 0x01, 0x2a], Err(Error::UnsupportedTag(Tag::OctetString))),
    )]
    fn test_oid_from_field(input: Vec<u8>, expected: Result<Vec<u64>, Error>) {
        let forest = parse(&input).unwrap();
        assert_eq!(
            expected.map(|arcs| oid(&arcs)),
            ObjectIdentifier::try_from(&forest[0])
        );
    }

    #[test]
    fn test_oid_serde() {
        let oid = oid(&[1, 2, 840, 113549]);
        let json = serde_json::to_string(&oid).unwrap();
        assert_eq!(r#""1.2.840.113549""#, json);
        let back: ObjectIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(oid, back);
    }
}
