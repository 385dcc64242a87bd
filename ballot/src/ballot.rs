//! Ballot container.
//!
//! ```asn1
//! Ballot ::= SEQUENCE {
//!     scheme       SEQUENCE { OBJECT IDENTIFIER },
//!     ciphertexts  SEQUENCE OF SEQUENCE OF INTEGER
//! }
//! ```

use mixder::decoder::{DecodableFrom, Decoder};
use mixder::encoder::{EncodableTo, Encoder};
use mixder_asn1::{ObjectIdentifier, encode_oid};
use mixder_der::{Field, Tag, encode_sequence, parse};
use num_bigint::BigInt;

use crate::ciphertext::{Ciphertext, is_universal, sequence_children};
use crate::error::{Error, Result};

/// ElGamal over a multiplicative subgroup of integers modulo a prime.
pub const SCHEME_OID: &str = "1.3.6.1.4.1.3029.2.1";
pub const SCHEME_OID_ARCS: [u64; 9] = [1, 3, 6, 1, 4, 1, 3029, 2, 1];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ballot {
    ciphertexts: Vec<Ciphertext>,
}

impl Ballot {
    pub fn new(ciphertexts: Vec<Ciphertext>) -> Self {
        Ballot { ciphertexts }
    }

    pub fn ciphertexts(&self) -> &[Ciphertext] {
        &self.ciphertexts
    }

    pub fn into_ciphertexts(self) -> Vec<Ciphertext> {
        self.ciphertexts
    }

    pub fn to_der(&self) -> Result<Vec<u8>> {
        let scheme = encode_sequence(&encode_oid(&SCHEME_OID_ARCS)?);
        let packed = self
            .ciphertexts
            .iter()
            .flat_map(Ciphertext::to_der)
            .collect::<Vec<u8>>();

        let mut content = scheme;
        content.extend(encode_sequence(&packed));
        Ok(encode_sequence(&content))
    }
}

impl From<Vec<Ciphertext>> for Ballot {
    fn from(ciphertexts: Vec<Ciphertext>) -> Self {
        Ballot::new(ciphertexts)
    }
}

impl TryFrom<&Field> for Ballot {
    type Error = Error;

    fn try_from(field: &Field) -> Result<Self> {
        let children = sequence_children(field).ok_or_else(|| {
            Error::MalformedBallot(format!("expected SEQUENCE for ballot, got {}", field.tag()))
        })?;
        let [scheme, ciphertexts] = children else {
            return Err(Error::MalformedBallot(format!(
                "expected 2 elements in ballot, got {}",
                children.len()
            )));
        };

        let scheme = match sequence_children(scheme) {
            Some([oid]) if is_universal(oid, Tag::ObjectIdentifier) => {
                ObjectIdentifier::try_from(oid)?
            }
            _ => {
                return Err(Error::MalformedBallot(
                    "expected SEQUENCE { OBJECT IDENTIFIER } for scheme".to_string(),
                ));
            }
        };
        if scheme != SCHEME_OID {
            return Err(Error::MalformedBallot(format!("unsupported scheme {}", scheme)));
        }

        let ciphertexts = sequence_children(ciphertexts)
            .ok_or_else(|| {
                Error::MalformedBallot(format!(
                    "expected SEQUENCE for ciphertexts, got {}",
                    ciphertexts.tag()
                ))
            })?
            .iter()
            .map(Ciphertext::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Ballot { ciphertexts })
    }
}

impl DecodableFrom<Field> for Ballot {}

impl Decoder<Field, Ballot> for Field {
    type Error = Error;

    fn decode(&self) -> Result<Ballot> {
        Ballot::try_from(self)
    }
}

impl EncodableTo<Ballot> for Vec<u8> {}

impl Encoder<Ballot, Vec<u8>> for Ballot {
    type Error = Error;

    fn encode(&self) -> Result<Vec<u8>> {
        self.to_der()
    }
}

/// Packs ciphertexts into a ballot tagged with [`SCHEME_OID`].
pub fn pack_ballot(ciphertexts: &[Vec<BigInt>]) -> Result<Vec<u8>> {
    Ballot::new(
        ciphertexts
            .iter()
            .cloned()
            .map(Ciphertext::new)
            .collect(),
    )
    .to_der()
}

/// Unpacks a ballot into the components of each ciphertext. Anything other
/// than exactly one well-formed ballot is rejected.
pub fn unpack_ballot(der: &[u8]) -> Result<Vec<Vec<BigInt>>> {
    let forest = parse(der)?;
    let [field] = forest.fields() else {
        return Err(Error::MalformedBallot(format!(
            "expected a single ballot, got {} top-level fields",
            forest.len()
        )));
    };
    Ok(Ballot::try_from(field)?
        .into_ciphertexts()
        .into_iter()
        .map(Ciphertext::into_components)
        .collect())
}
