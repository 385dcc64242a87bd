//! PEM envelope (RFC 7468) as used by election public key files:
//! a `-----BEGIN <label>-----` line, base64 lines, and a matching
//! `-----END <label>-----` line.

pub mod error;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use base64::{Engine, engine::general_purpose::STANDARD};
use error::Error;
use mixder::decoder::{DecodableFrom, Decoder};
use mixder::encoder::{EncodableTo, Encoder};
use regex::Regex;

pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Begin,
    End,
}

fn boundary_pattern() -> Result<Regex, Error> {
    Regex::new(r"^-----(BEGIN|END) ([A-Z0-9 ]*)-----\s*$")
        .map_err(|_| Error::InvalidEncapsulationBoundary)
}

fn boundary<'a>(re: &Regex, line: &'a str) -> Option<(Boundary, &'a str)> {
    let captured = re.captures(line)?;
    let kind = match captured.get(1)?.as_str() {
        "BEGIN" => Boundary::Begin,
        _ => Boundary::End,
    };
    Some((kind, captured.get(2)?.as_str()))
}

fn is_base64_line(line: &str) -> bool {
    line.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'=')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pem {
    label: String,
    base64_data: String, // base64 body with line breaks removed
}

impl Pem {
    pub fn new(label: impl Into<String>, base64_data: String) -> Self {
        Pem {
            label: label.into(),
            base64_data,
        }
    }

    pub fn from_bytes(label: impl Into<String>, data: &[u8]) -> Self {
        Pem {
            label: label.into(),
            base64_data: STANDARD.encode(data),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn data(&self) -> &str {
        &self.base64_data
    }
}

impl Display for Pem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "-----BEGIN {}-----", self.label)?;
        // RFC 7468: base64 text is wrapped at 64 characters
        for chunk in self.base64_data.as_bytes().chunks(64) {
            let line = std::str::from_utf8(chunk).map_err(|_| std::fmt::Error)?;
            writeln!(f, "{}", line)?;
        }
        write!(f, "-----END {}-----", self.label)
    }
}

/*
* explanatory text -> pre-eb -> base64 lines -> post-eb
*       |_|                        |_|
 */
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
enum PemParsingState {
    #[default]
    Init,
    Body,
    PostEncapsulationBoundary,
}

impl FromStr for Pem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = boundary_pattern()?;
        let mut state = PemParsingState::default();
        let mut label = "";
        let mut body = Vec::new();
        let mut lines = s.lines().enumerate();
        while state != PemParsingState::PostEncapsulationBoundary {
            let Some((number, line)) = lines.next() else {
                return Err(match state {
                    PemParsingState::Init => Error::MissingPreEncapsulationBoundary,
                    _ => Error::MissingPostEncapsulationBoundary,
                });
            };
            let line = line.trim();
            match (state, boundary(&re, line)) {
                (PemParsingState::Init, Some((Boundary::Begin, l))) => {
                    label = l;
                    state = PemParsingState::Body;
                }
                // explanatory text before the boundary is ignored
                (PemParsingState::Init, _) => {}
                (PemParsingState::Body, Some((Boundary::End, l))) => {
                    if l != label {
                        return Err(Error::LabelMismatch {
                            begin: label.to_string(),
                            end: l.to_string(),
                        });
                    }
                    state = PemParsingState::PostEncapsulationBoundary;
                }
                (PemParsingState::Body, Some((Boundary::Begin, _))) => {
                    return Err(Error::MissingPostEncapsulationBoundary);
                }
                (PemParsingState::Body, None) => {
                    if !is_base64_line(line) {
                        return Err(Error::InvalidBase64Line(number + 1));
                    }
                    body.push(line);
                }
                (PemParsingState::PostEncapsulationBoundary, _) => break,
            }
        }

        let base64_data = body.concat();
        if base64_data.is_empty() {
            return Err(Error::MissingData);
        }
        Ok(Pem {
            label: label.to_string(),
            base64_data,
        })
    }
}

impl DecodableFrom<Pem> for Vec<u8> {}

impl Decoder<Pem, Vec<u8>> for Pem {
    type Error = Error;

    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        // The label is dropped; callers check it before decoding if needed.
        STANDARD.decode(self.data()).map_err(Error::Base64Decode)
    }
}

impl EncodableTo<Pem> for String {}

impl Encoder<Pem, String> for Pem {
    type Error = Error;

    fn encode(&self) -> Result<String, Self::Error> {
        Ok(self.to_string())
    }
}

impl DecodableFrom<String> for Pem {}

impl Decoder<String, Pem> for String {
    type Error = Error;

    fn decode(&self) -> Result<Pem, Self::Error> {
        Pem::from_str(self)
    }
}

impl DecodableFrom<&str> for Pem {}

impl Decoder<&str, Pem> for &str {
    type Error = Error;

    fn decode(&self) -> Result<Pem, Self::Error> {
        Pem::from_str(self)
    }
}
