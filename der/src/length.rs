//! Definite-form DER length octets.
//!
//! Lengths below 128 use the short form (one octet). Anything larger uses
//! the long form: `0x80 | n` followed by `n` big-endian octets, `n` minimal.
//! The indefinite form (`0x80` alone) belongs to BER and is rejected.

use nom::{IResult, Parser, bytes::complete::take, number::complete::be_u8};

use crate::error::{Error, Result};

const LONG_FORM: u8 = 0x80;

/// Encodes the length octets for `len` bytes of content.
pub fn encode_length(len: usize) -> Vec<u8> {
    if len < usize::from(LONG_FORM) {
        return vec![len as u8];
    }
    let octets = len.to_be_bytes();
    let skip = octets.iter().take_while(|&&b| b == 0).count();
    let significant = &octets[skip..];

    let mut encoded = Vec::with_capacity(significant.len() + 1);
    encoded.push(LONG_FORM | significant.len() as u8);
    encoded.extend_from_slice(significant);
    encoded
}

/// Decodes the length octets starting at `bytes[pos]`.
///
/// Returns `(length, consumed)` where `consumed` counts the length octets
/// themselves, not the content.
pub fn decode_length(bytes: &[u8], pos: usize) -> Result<(usize, usize)> {
    let input = bytes.get(pos..).ok_or(Error::TruncatedInput)?;
    let (rest, length) = parse_length(input)?;
    Ok((length, input.len() - rest.len()))
}

pub(crate) fn parse_length(input: &[u8]) -> IResult<&[u8], usize, Error> {
    let (input, first) = octet(input)?;
    if first & LONG_FORM == 0 {
        // short form: 0-127
        return Ok((input, usize::from(first)));
    }

    // long form
    // The low 7 bits count the octets that follow.
    let count = usize::from(first & !LONG_FORM);
    if count == 0 || count > size_of::<usize>() {
        return Err(nom::Err::Failure(Error::MalformedLength));
    }
    let (input, octets) = octets(input, count)?;
    let length = octets
        .iter()
        .fold(0usize, |n, &b| (n << 8) | usize::from(b));
    Ok((input, length))
}

pub(crate) fn octet(input: &[u8]) -> IResult<&[u8], u8, Error> {
    be_u8(input)
}

pub(crate) fn octets(input: &[u8], count: usize) -> IResult<&[u8], &[u8], Error> {
    take(count).parse(input)
}
