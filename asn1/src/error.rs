//! Error types for ASN.1 value encoding and decoding.

use mixder_der::Tag;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning fields into scalars or scalars into DER.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    // Boolean errors
    #[error("BOOLEAN: content must be a single 0x00 or 0xff octet")]
    InvalidBoolean,

    // Null errors
    #[error("NULL: content must be empty")]
    InvalidNull,

    // Integer errors
    #[error("INTEGER: no data")]
    IntegerNoData,

    // ObjectIdentifier errors
    #[error("OBJECT IDENTIFIER: no data")]
    ObjectIdentifierNoData,
    #[error("OBJECT IDENTIFIER: incomplete encoding")]
    ObjectIdentifierIncompleteEncoding,
    #[error("OBJECT IDENTIFIER: too few components (need at least 2)")]
    ObjectIdentifierTooFewComponents,
    #[error("OBJECT IDENTIFIER: first arcs {0} cannot share one octet")]
    ObjectIdentifierInvalidFirstArcs(String),
    #[error("OBJECT IDENTIFIER: invalid component '{0}'")]
    ObjectIdentifierInvalidComponent(String),

    // BitString errors
    #[error("BIT STRING: no data")]
    BitStringNoData,
    #[error("BIT STRING: unused bits {0} out of range (must be 0-7)")]
    BitStringUnusedBitsOutOfRange(u8),

    // String type errors
    #[error("invalid character 0x{byte:02x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },

    #[error("no scalar value defined for {0}")]
    UnsupportedTag(Tag),

    #[error("invalid DER encoding: {0}")]
    Der(#[from] mixder_der::error::Error),
}
