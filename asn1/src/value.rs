use mixder::decoder::{DecodableFrom, Decoder};
use mixder_der::{Class, Field, Tag};
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::integer::Integer;
use crate::oid::{ObjectIdentifier, decode_oid};

/// Scalar carried by a primitive field.
///
/// Tags without a scalar meaning keep their content octets untouched in
/// `Raw`; nothing is guessed from the bytes themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Value {
    Boolean(bool),
    Integer(Integer),
    Enumerated(Integer),
    ObjectIdentifier(ObjectIdentifier),
    Null,
    Raw(#[serde(serialize_with = "serialize_hex")] Vec<u8>),
}

impl TryFrom<&Field> for Value {
    type Error = Error;

    fn try_from(field: &Field) -> Result<Self> {
        let Some(content) = field.leaf() else {
            return Err(Error::UnsupportedTag(field.tag()));
        };
        // application, context and private tags only share the number
        if field.class() != Class::Universal {
            return Ok(Value::Raw(content.to_vec()));
        }
        match field.tag() {
            Tag::Boolean => match content {
                [0x00] => Ok(Value::Boolean(false)),
                [0xff] => Ok(Value::Boolean(true)),
                _ => Err(Error::InvalidBoolean),
            },
            Tag::Integer => Ok(Value::Integer(Integer::try_from(content)?)),
            Tag::Enumerated => Ok(Value::Enumerated(Integer::try_from(content)?)),
            Tag::ObjectIdentifier => Ok(Value::ObjectIdentifier(decode_oid(content)?)),
            Tag::Null => {
                if content.is_empty() {
                    Ok(Value::Null)
                } else {
                    Err(Error::InvalidNull)
                }
            }
            _ => Ok(Value::Raw(content.to_vec())),
        }
    }
}

impl DecodableFrom<Field> for Value {}

impl Decoder<Field, Value> for Field {
    type Error = Error;

    fn decode(&self) -> Result<Value> {
        Value::try_from(self)
    }
}

/// The scalar value of `field`, selected by its tag.
pub fn unpacked_value(field: &Field) -> Result<Value> {
    Value::try_from(field)
}

fn serialize_hex<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let hex_string = data.iter().map(|b| format!("{:02x}", b)).collect::<String>();
    serializer.serialize_str(&hex_string)
}

#[cfg(test)]
mod tests {
    use mixder::decoder::Decoder;
    use mixder_der::{Tag, parse};
    use num_bigint::BigInt;
    use rstest::rstest;

    use super::{Value, unpacked_value};
    use crate::error::Error;
    use crate::integer::Integer;
    use crate::oid::ObjectIdentifier;

    #[rstest(input, expected,
        case(vec![0x01, 0x01, 0xff], Value::Boolean(true)),
        case(vec![0x01, 0x01, 0x00], Value::Boolean(false)),
        case(vec![0x02, 0x02, 0xff, 0x7f], Value::Integer(Integer::from(-129))),
        case(vec![0x0a, 0x01, 0x03], Value::Enumerated(Integer::from(3))),
        case(vec![0x05, 0x00], Value::Null),
        case(vec![0x06, 0x03, 0x2a, 0x86, 0x48], Value::ObjectIdentifier(ObjectIdentifier::try_from([1u64, 2, 840].as_slice()).unwrap())),
        case(vec![0x04, 0x02, 0x02, 0x01], Value::Raw(vec![0x02, 0x01])),
        case(vec![0x13, 0x02, 0x68, 0x69], Value::Raw(vec![0x68, 0x69])),
        case(vec![0x1b, 0x02, 0x45, 0x50], Value::Raw(vec![0x45, 0x50])),
        case(vec![0x82, 0x01, 0x07], Value::Raw(vec![0x07])),
        case(vec![0x42, 0x01, 0x05], Value::Raw(vec![0x05])),
        case(vec![0xc1, 0x01, 0x01], Value::Raw(vec![0x01])),
        case(vec![0x45, 0x01, 0x00], Value::Raw(vec![0x00])),
    )]
    fn test_unpacked_value(input: Vec<u8>, expected: Value) {
        let forest = parse(&input).unwrap();
        assert_eq!(expected, unpacked_value(&forest[0]).unwrap());

        let decoded: Value = forest[0].decode().unwrap();
        assert_eq!(expected, decoded);
    }

    #[rstest(input, expected,
        case(vec![0x30, 0x00], Error::UnsupportedTag(Tag::Sequence)),
        case(vec![0xa0, 0x02, 0x05, 0x00], Error::UnsupportedTag(Tag::Context(0))),
        case(vec![0x01, 0x01, 0x01], Error::InvalidBoolean),
        case(vec![0x01, 0x00], Error::InvalidBoolean),
        case(vec![0x05, 0x01, 0x00], Error::InvalidNull),
        case(vec![0x02, 0x00], Error::IntegerNoData),
        case(vec![0x06, 0x00], Error::ObjectIdentifierNoData),
    )]
    fn test_unpacked_value_error(input: Vec<u8>, expected: Error) {
        let forest = parse(&input).unwrap();
        assert_eq!(Err(expected), unpacked_value(&forest[0]));
    }

    #[test]
    fn test_value_serialize() {
        let values = vec![
            Value::Integer(Integer::new(BigInt::from(65537))),
            Value::Raw(vec![0xde, 0xad]),
            Value::Null,
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(r#"[{"Integer":"65537"},{"Raw":"dead"},"Null"]"#, json);
    }
}
