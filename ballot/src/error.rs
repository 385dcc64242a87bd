use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("malformed ballot: {0}")]
    MalformedBallot(String),

    #[error("malformed public key: {0}")]
    MalformedKey(String),

    #[error("ASN.1 error: {0}")]
    Asn1(#[from] mixder_asn1::error::Error),

    #[error("Invalid PEM: {0}")]
    InvalidPem(#[from] mixder_pem::error::Error),

    #[error("Invalid DER: {0}")]
    InvalidDer(#[from] mixder_der::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
