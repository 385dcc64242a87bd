//! Primitive DER encoders. Each returns a complete TLV.

use chrono::NaiveDateTime;
use mixder_der::{Tag, encode_tlv};
use num_bigint::BigInt;

use crate::bit_string::BitString;
use crate::error::{Error, Result};
use crate::integer::Integer;
use crate::oid::ObjectIdentifier;

const UTC_TIME_FORMAT: &str = "%y%m%d%H%M%SZ";
const GENERALIZED_TIME_FORMAT: &str = "%Y%m%d%H%M%SZ";

pub fn encode_boolean(value: bool) -> Vec<u8> {
    encode_tlv(Tag::Boolean.number(), &[if value { 0xff } else { 0x00 }])
}

pub fn encode_integer(value: &BigInt) -> Vec<u8> {
    encode_tlv(
        Tag::Integer.number(),
        &Integer::new(value.clone()).to_der_content(),
    )
}

/// ENUMERATED shares the INTEGER content encoding.
pub fn encode_enumerated(value: &BigInt) -> Vec<u8> {
    encode_tlv(
        Tag::Enumerated.number(),
        &Integer::new(value.clone()).to_der_content(),
    )
}

pub fn encode_bit_string(value: &BitString) -> Vec<u8> {
    encode_tlv(Tag::BitString.number(), &value.to_der_content())
}

/// BIT STRING over whole octets (zero unused bits).
pub fn encode_bit_string_bytes(data: &[u8]) -> Vec<u8> {
    encode_bit_string(&BitString::from_bytes(data))
}

pub fn encode_octet_string(data: &[u8]) -> Vec<u8> {
    encode_tlv(Tag::OctetString.number(), data)
}

pub fn encode_null() -> Vec<u8> {
    encode_tlv(Tag::Null.number(), &[])
}

pub fn encode_object_identifier(oid: &ObjectIdentifier) -> Vec<u8> {
    encode_tlv(Tag::ObjectIdentifier.number(), &oid.to_der_content())
}

/// Encodes an OID given as plain arcs, e.g. `&[1, 2, 840]`.
pub fn encode_oid(arcs: &[u64]) -> Result<Vec<u8>> {
    let oid = ObjectIdentifier::try_from(arcs)?;
    Ok(encode_object_identifier(&oid))
}

/// Only the PrintableString range 0x20..=0x7e is accepted.
pub fn encode_printable_string(value: &str) -> Result<Vec<u8>> {
    if let Some((position, &byte)) = value
        .as_bytes()
        .iter()
        .enumerate()
        .find(|(_, b)| !(0x20..=0x7e).contains(*b))
    {
        return Err(Error::InvalidCharacter { position, byte });
    }
    Ok(encode_tlv(Tag::PrintableString.number(), value.as_bytes()))
}

/// UTCTime over caller supplied text, written verbatim.
pub fn encode_utc_time(time: &str) -> Vec<u8> {
    encode_tlv(Tag::UTCTime.number(), time.as_bytes())
}

pub fn encode_utc_time_at(time: &NaiveDateTime) -> Vec<u8> {
    encode_utc_time(&time.format(UTC_TIME_FORMAT).to_string())
}

/// GeneralizedTime over caller supplied text, written verbatim.
pub fn encode_generalized_time(time: &str) -> Vec<u8> {
    encode_tlv(Tag::GeneralizedTime.number(), time.as_bytes())
}

pub fn encode_generalized_time_at(time: &NaiveDateTime) -> Vec<u8> {
    encode_generalized_time(&time.format(GENERALIZED_TIME_FORMAT).to_string())
}
