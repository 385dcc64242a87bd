//! # mixder
//!
//! Conversion traits shared by the crates of the mix-net DER codec.
//!
//! Every step from an election artifact on disk to a typed value is a
//! `Decoder` implementation, and every step back is an `Encoder`:
//!
//! ```text
//! PEM text → Pem → Vec<u8> → Forest → Value → Ballot / PublicKey
//! ```
//!
//! Both traits are constrained by a marker trait (`DecodableFrom`,
//! `EncodableTo`) so that only conversions somebody actually implemented
//! can be requested.
//!
//! See `mixder_der` for an example of decoding bytes into a field tree.

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
