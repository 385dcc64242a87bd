use std::fmt::Display;

use nom::IResult;

use crate::error::Error;
use crate::length::octet;

pub const TAG_CONSTRUCTED: u8 = 0x20;
pub const TAG_CONTEXT_SPECIFIC: u8 = 0x80;
const CLASS_MASK: u8 = 0xc0;
const TAG_NUMBER_MASK: u8 = 0x1f;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

impl Class {
    /// The class bits as they appear in the identifier octet.
    pub fn bits(&self) -> u8 {
        match self {
            Class::Universal => 0x00,
            Class::Application => 0x40,
            Class::ContextSpecific => 0x80,
            Class::Private => 0xc0,
        }
    }
}

impl From<u8> for Class {
    fn from(identifier: u8) -> Self {
        match identifier & CLASS_MASK {
            0x00 => Class::Universal,
            0x40 => Class::Application,
            0x80 => Class::ContextSpecific,
            _ => Class::Private,
        }
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Class::Universal => write!(f, "universal"),
            Class::Application => write!(f, "application"),
            Class::ContextSpecific => write!(f, "context-specific"),
            Class::Private => write!(f, "private"),
        }
    }
}

/// Tag of a field.
///
/// Context-specific tags keep their bare number. Every other class goes
/// through the symbolic table below, falling back to `Unknown` which is
/// rendered as `[n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    Enumerated,
    UTF8String,
    Sequence,
    Set,
    PrintableString,
    IA5String,
    UTCTime,
    GeneralizedTime,
    Unknown(u8),
    Context(u8),
}

impl Tag {
    /// Maps an identifier octet to its tag. Only the class and the low five
    /// bits are looked at.
    pub fn from_identifier(identifier: u8) -> Self {
        let number = identifier & TAG_NUMBER_MASK;
        if Class::from(identifier) == Class::ContextSpecific {
            return Tag::Context(number);
        }
        match number {
            0x01 => Tag::Boolean,
            0x02 => Tag::Integer,
            0x03 => Tag::BitString,
            0x04 => Tag::OctetString,
            0x05 => Tag::Null,
            0x06 => Tag::ObjectIdentifier,
            0x0a => Tag::Enumerated,
            0x0c => Tag::UTF8String,
            0x10 => Tag::Sequence,
            0x11 => Tag::Set,
            0x13 => Tag::PrintableString,
            0x16 => Tag::IA5String,
            0x17 => Tag::UTCTime,
            0x18 => Tag::GeneralizedTime,
            n => Tag::Unknown(n),
        }
    }

    /// The tag number (low five bits of the identifier octet).
    pub fn number(&self) -> u8 {
        match self {
            Tag::Boolean => 0x01,
            Tag::Integer => 0x02,
            Tag::BitString => 0x03,
            Tag::OctetString => 0x04,
            Tag::Null => 0x05,
            Tag::ObjectIdentifier => 0x06,
            Tag::Enumerated => 0x0a,
            Tag::UTF8String => 0x0c,
            Tag::Sequence => 0x10,
            Tag::Set => 0x11,
            Tag::PrintableString => 0x13,
            Tag::IA5String => 0x16,
            Tag::UTCTime => 0x17,
            Tag::GeneralizedTime => 0x18,
            Tag::Unknown(n) | Tag::Context(n) => *n,
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Boolean => write!(f, "BOOLEAN"),
            Tag::Integer => write!(f, "INTEGER"),
            Tag::BitString => write!(f, "BIT STRING"),
            Tag::OctetString => write!(f, "OCTET STRING"),
            Tag::Null => write!(f, "NULL"),
            Tag::ObjectIdentifier => write!(f, "OBJECT IDENTIFIER"),
            Tag::Enumerated => write!(f, "ENUMERATED"),
            Tag::UTF8String => write!(f, "UTF8String"),
            Tag::Sequence => write!(f, "SEQUENCE"),
            Tag::Set => write!(f, "SET"),
            Tag::PrintableString => write!(f, "PrintableString"),
            Tag::IA5String => write!(f, "IA5String"),
            Tag::UTCTime => write!(f, "UTCTime"),
            Tag::GeneralizedTime => write!(f, "GeneralizedTime"),
            Tag::Unknown(n) => write!(f, "[{}]", n),
            Tag::Context(n) => write!(f, "{}", n),
        }
    }
}

/// Decoded identifier octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Identifier {
    pub(crate) class: Class,
    pub(crate) constructed: bool,
    pub(crate) tag: Tag,
}

pub(crate) fn parse_identifier(input: &[u8]) -> IResult<&[u8], Identifier, Error> {
    let (input, n) = octet(input)?;
    if n & TAG_NUMBER_MASK == TAG_NUMBER_MASK {
        return Err(nom::Err::Failure(Error::UnsupportedTagForm(n)));
    }
    Ok((
        input,
        Identifier {
            class: Class::from(n),
            constructed: n & TAG_CONSTRUCTED == TAG_CONSTRUCTED,
            tag: Tag::from_identifier(n),
        },
    ))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Class, Identifier, Tag, parse_identifier};
    use crate::error::Error;

    #[rstest(input, expected,
        case(vec![0x02], Identifier { class: Class::Universal, constructed: false, tag: Tag::Integer }),
        case(vec![0x02, 0x01], Identifier { class: Class::Universal, constructed: false, tag: Tag::Integer }),
        case(vec![0x30, 0x01], Identifier { class: Class::Universal, constructed: true, tag: Tag::Sequence }),
        case(vec![0x31], Identifier { class: Class::Universal, constructed: true, tag: Tag::Set }),
        case(vec![0x0a], Identifier { class: Class::Universal, constructed: false, tag: Tag::Enumerated }),
        case(vec![0xa0], Identifier { class: Class::ContextSpecific, constructed: true, tag: Tag::Context(0) }),
        case(vec![0x83], Identifier { class: Class::ContextSpecific, constructed: false, tag: Tag::Context(3) }),
        case(vec![0x1b], Identifier { class: Class::Universal, constructed: false, tag: Tag::Unknown(27) }),
        case(vec![0x42], Identifier { class: Class::Application, constructed: false, tag: Tag::Integer }),
        case(vec![0xe1], Identifier { class: Class::Private, constructed: true, tag: Tag::Boolean }),
    )]
    fn test_parse_identifier(input: Vec<u8>, expected: Identifier) {
        let (_, actual) = parse_identifier(&input).unwrap();
        assert_eq!(expected, actual);
    }

    #[rstest(input, expected,
        case(vec![], Error::TruncatedInput),
        case(vec![0x1f, 0x81, 0x00], Error::UnsupportedTagForm(0x1f)),
        case(vec![0xbf, 0x01], Error::UnsupportedTagForm(0xbf)),
    )]
    fn test_parse_identifier_error(input: Vec<u8>, expected: Error) {
        let err = parse_identifier(&input).unwrap_err();
        assert_eq!(expected, Error::from(err));
    }

    #[rstest(tag, expected,
        case(Tag::Integer, "INTEGER"),
        case(Tag::BitString, "BIT STRING"),
        case(Tag::ObjectIdentifier, "OBJECT IDENTIFIER"),
        case(Tag::Unknown(27), "[27]"),
        case(Tag::Context(2), "2"),
    )]
    fn test_tag_to_string(tag: Tag, expected: &str) {
        assert_eq!(expected, tag.to_string());
    }

    #[test]
    fn test_tag_number_roundtrip() {
        for n in 0u8..0x1f {
            assert_eq!(n, Tag::from_identifier(n).number());
            assert_eq!(n, Tag::from_identifier(0x80 | n).number());
        }
    }
}
