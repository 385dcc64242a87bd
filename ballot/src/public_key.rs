//! Election public key file.
//!
//! ```asn1
//! SubjectPublicKeyInfo ::= SEQUENCE {
//!     algorithm  SEQUENCE {
//!         algorithm   OBJECT IDENTIFIER,
//!         parameters  SEQUENCE {
//!             p           INTEGER,
//!             g           INTEGER,
//!             electionId  GeneralString
//!         }
//!     },
//!     subjectPublicKey  BIT STRING
//! }
//! ```

use std::str::FromStr;

use mixder::decoder::{DecodableFrom, Decoder};
use mixder::encoder::{EncodableTo, Encoder};
use mixder_asn1::{Integer, ObjectIdentifier};
use mixder_der::{Class, Field, Tag, parse};
use mixder_pem::{PUBLIC_KEY_LABEL, Pem};
use serde::{Serialize, Serializer};

use crate::ciphertext::{is_universal, sequence_children};
use crate::error::{Error, Result};
use crate::sanitize::sanitize_bytes;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicKey {
    algorithm: ObjectIdentifier,
    modulus: Integer,
    generator: Integer,
    modulus_hex: String,
    generator_hex: String,
    election_id: String,
    #[serde(serialize_with = "serialize_hex")]
    raw_election_id: Vec<u8>,
    #[serde(skip)]
    der: Vec<u8>,
}

impl PublicKey {
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let forest = parse(der)?;
        let [info] = forest.fields() else {
            return Err(Error::MalformedKey(format!(
                "expected a single SubjectPublicKeyInfo, got {} top-level fields",
                forest.len()
            )));
        };
        let algorithm = sequence_children(info)
            .and_then(|children| children.first())
            .and_then(sequence_children)
            .ok_or_else(|| Error::MalformedKey("expected SEQUENCE { SEQUENCE, ... }".to_string()))?;
        let [oid, parameters, ..] = algorithm else {
            return Err(Error::MalformedKey(format!(
                "expected algorithm and parameters, got {} elements",
                algorithm.len()
            )));
        };
        if !is_universal(oid, Tag::ObjectIdentifier) {
            return Err(Error::MalformedKey(format!(
                "expected OBJECT IDENTIFIER for algorithm, got {} {}",
                oid.class(),
                oid.tag()
            )));
        }
        let algorithm = ObjectIdentifier::try_from(oid)?;

        let Some([p, g, election]) = sequence_children(parameters) else {
            return Err(Error::MalformedKey(
                "expected SEQUENCE { p, g, electionId } for parameters".to_string(),
            ));
        };
        let (modulus, modulus_hex) = integer_parameter(p, "p")?;
        let (generator, generator_hex) = integer_parameter(g, "g")?;
        let raw_election_id = election
            .leaf()
            .ok_or_else(|| {
                Error::MalformedKey(format!(
                    "expected a primitive election id, got {}",
                    election.tag()
                ))
            })?
            .to_vec();

        Ok(PublicKey {
            algorithm,
            modulus,
            generator,
            modulus_hex,
            generator_hex,
            election_id: sanitize_bytes(&raw_election_id),
            raw_election_id,
            der: der.to_vec(),
        })
    }

    pub fn algorithm(&self) -> &ObjectIdentifier {
        &self.algorithm
    }

    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    pub fn generator(&self) -> &Integer {
        &self.generator
    }

    /// Content octets of `p` as lowercase hex, leading zero octet included.
    pub fn modulus_hex(&self) -> &str {
        &self.modulus_hex
    }

    /// Content octets of `g` as lowercase hex.
    pub fn generator_hex(&self) -> &str {
        &self.generator_hex
    }

    /// Sanitized election identifier.
    pub fn election_id(&self) -> &str {
        &self.election_id
    }

    pub fn raw_election_id(&self) -> &[u8] {
        &self.raw_election_id
    }

    pub fn der(&self) -> &[u8] {
        &self.der
    }
}

fn integer_parameter(field: &Field, name: &str) -> Result<(Integer, String)> {
    match (field.class(), field.tag(), field.leaf()) {
        (Class::Universal, Tag::Integer, Some(content)) => {
            Ok((Integer::try_from(content)?, to_hex(content)))
        }
        (class, tag, _) => Err(Error::MalformedKey(format!(
            "expected INTEGER for {}, got {} {}",
            name, class, tag
        ))),
    }
}

fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect()
}

fn serialize_hex<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(data))
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let pem = Pem::from_str(s)?;
        pem.decode()
    }
}

impl DecodableFrom<Pem> for PublicKey {}

impl Decoder<Pem, PublicKey> for Pem {
    type Error = Error;

    fn decode(&self) -> Result<PublicKey> {
        let der: Vec<u8> = self.decode()?;
        PublicKey::from_der(&der)
    }
}

impl EncodableTo<PublicKey> for Pem {}

impl Encoder<PublicKey, Pem> for PublicKey {
    type Error = Error;

    fn encode(&self) -> Result<Pem> {
        Ok(Pem::from_bytes(PUBLIC_KEY_LABEL, &self.der))
    }
}

/// Reads a PEM key file. The label is not checked; the DER payload must be a
/// SubjectPublicKeyInfo carrying `p`, `g` and the election id.
pub fn unpack_public_key(pem_text: &str) -> Result<PublicKey> {
    PublicKey::from_str(pem_text)
}
