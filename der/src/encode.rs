//! Constructed and explicitly tagged encodings over pre-encoded content.

use mixder::encoder::{EncodableTo, Encoder};

use crate::error::{Error, Result};
use crate::field::{Field, Forest};
use crate::length::encode_length;
use crate::tag::{TAG_CONSTRUCTED, TAG_CONTEXT_SPECIFIC, Tag};

const MAX_LOW_TAG_NUMBER: u8 = 30;

/// Prefixes `content` with `identifier` and its length octets.
pub fn encode_tlv(identifier: u8, content: &[u8]) -> Vec<u8> {
    let length = encode_length(content.len());
    let mut encoded = Vec::with_capacity(1 + length.len() + content.len());
    encoded.push(identifier);
    encoded.extend_from_slice(&length);
    encoded.extend_from_slice(content);
    encoded
}

/// SEQUENCE over already encoded children, kept in the given order.
pub fn encode_sequence(content: &[u8]) -> Vec<u8> {
    encode_tlv(Tag::Sequence.number() | TAG_CONSTRUCTED, content)
}

/// SET over already encoded children. Members are not sorted.
pub fn encode_set(content: &[u8]) -> Vec<u8> {
    encode_tlv(Tag::Set.number() | TAG_CONSTRUCTED, content)
}

/// `[n]` in primitive form: `0x80 | n`, length, content.
pub fn encode_explicit_primitive(tag_number: u8, content: &[u8]) -> Result<Vec<u8>> {
    check_tag_number(tag_number)?;
    Ok(encode_tlv(TAG_CONTEXT_SPECIFIC | tag_number, content))
}

/// `[n]` in constructed form: `0xa0 | n`, length, one or more child TLVs.
pub fn encode_explicit_constructed(tag_number: u8, content: &[u8]) -> Result<Vec<u8>> {
    check_tag_number(tag_number)?;
    Ok(encode_tlv(
        TAG_CONTEXT_SPECIFIC | TAG_CONSTRUCTED | tag_number,
        content,
    ))
}

fn check_tag_number(tag_number: u8) -> Result<()> {
    if tag_number > MAX_LOW_TAG_NUMBER {
        return Err(Error::InvalidTagNumber(tag_number));
    }
    Ok(())
}

impl EncodableTo<Field> for Vec<u8> {}

impl Encoder<Field, Vec<u8>> for Field {
    type Error = Error;

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.raw().to_vec())
    }
}

impl EncodableTo<Forest> for Vec<u8> {}

impl Encoder<Forest, Vec<u8>> for Forest {
    type Error = Error;

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.iter().flat_map(|f| f.raw().iter().copied()).collect())
    }
}
