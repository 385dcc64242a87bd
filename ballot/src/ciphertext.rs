use mixder::decoder::{DecodableFrom, Decoder};
use mixder::encoder::{EncodableTo, Encoder};
use mixder_asn1::{Integer, encode_integer};
use mixder_der::{Class, Field, Tag, encode_sequence, parse};
use num_bigint::BigInt;

use crate::error::{Error, Result};

/// Returns the children of `field` if it is a universal constructed SEQUENCE.
pub(crate) fn sequence_children(field: &Field) -> Option<&[Field]> {
    match (field.class(), field.tag()) {
        (Class::Universal, Tag::Sequence) => field.children(),
        _ => None,
    }
}

/// Whether `field` carries the universal tag `tag`.
pub(crate) fn is_universal(field: &Field, tag: Tag) -> bool {
    field.class() == Class::Universal && field.tag() == tag
}

/// One ElGamal ciphertext: an ordered tuple of group elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ciphertext {
    components: Vec<BigInt>,
}

impl Ciphertext {
    pub fn new(components: Vec<BigInt>) -> Self {
        Ciphertext { components }
    }

    pub fn components(&self) -> &[BigInt] {
        &self.components
    }

    pub fn into_components(self) -> Vec<BigInt> {
        self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn to_der(&self) -> Vec<u8> {
        pack_ciphertext(&self.components)
    }
}

impl From<Vec<BigInt>> for Ciphertext {
    fn from(components: Vec<BigInt>) -> Self {
        Ciphertext::new(components)
    }
}

impl From<Ciphertext> for Vec<BigInt> {
    fn from(ciphertext: Ciphertext) -> Self {
        ciphertext.components
    }
}

impl TryFrom<&Field> for Ciphertext {
    type Error = Error;

    fn try_from(field: &Field) -> Result<Self> {
        let children = sequence_children(field).ok_or_else(|| {
            Error::MalformedBallot(format!("expected SEQUENCE for ciphertext, got {}", field.tag()))
        })?;
        let components = children
            .iter()
            .enumerate()
            .map(|(i, child)| {
                if !is_universal(child, Tag::Integer) {
                    return Err(Error::MalformedBallot(format!(
                        "expected INTEGER for ciphertext component {}, got {} {}",
                        i,
                        child.class(),
                        child.tag()
                    )));
                }
                Ok(Integer::try_from(child)?.into_bigint())
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Ciphertext { components })
    }
}

impl DecodableFrom<Field> for Ciphertext {}

impl Decoder<Field, Ciphertext> for Field {
    type Error = Error;

    fn decode(&self) -> Result<Ciphertext> {
        Ciphertext::try_from(self)
    }
}

impl EncodableTo<Ciphertext> for Vec<u8> {}

impl Encoder<Ciphertext, Vec<u8>> for Ciphertext {
    type Error = Error;

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.to_der())
    }
}

/// SEQUENCE of the components encoded as INTEGERs, in order.
pub fn pack_ciphertext(components: &[BigInt]) -> Vec<u8> {
    let content = components
        .iter()
        .flat_map(encode_integer)
        .collect::<Vec<u8>>();
    encode_sequence(&content)
}

/// Inverse of [`pack_ciphertext`]. The input must hold exactly one SEQUENCE.
pub fn unpack_ciphertext(der: &[u8]) -> Result<Vec<BigInt>> {
    let forest = parse(der)?;
    let [field] = forest.fields() else {
        return Err(Error::MalformedBallot(format!(
            "expected a single ciphertext, got {} top-level fields",
            forest.len()
        )));
    };
    Ciphertext::try_from(field).map(Ciphertext::into_components)
}
