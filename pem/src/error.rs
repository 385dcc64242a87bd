use base64::DecodeError;
use thiserror::Error;

/// Errors raised while reading a PEM envelope.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No `-----BEGIN ...-----` line was found
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// The input ended before `-----END ...-----`
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    #[error("invalid encapsulation boundary")]
    InvalidEncapsulationBoundary,

    /// Nothing between the boundaries
    #[error("missing PEM data")]
    MissingData,

    /// BEGIN and END carry different labels
    #[error("label doesn't match: BEGIN {begin}, END {end}")]
    LabelMismatch { begin: String, end: String },

    /// A body line holds characters outside the base64 alphabet
    #[error("invalid base64 line {0}")]
    InvalidBase64Line(usize),

    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
