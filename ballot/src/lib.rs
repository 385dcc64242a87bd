//! Ballot and key formats of the mix-net.
//!
//! Ciphertexts are SEQUENCEs of INTEGERs, ballots wrap them together with the
//! scheme identifier, and public key files are PEM wrapped
//! SubjectPublicKeyInfo structures whose parameters carry the group and the
//! election identifier.
//!
//! ```
//! use mixder_ballot::{pack_ballot, unpack_ballot};
//! use num_bigint::BigInt;
//!
//! let ciphertexts = vec![vec![BigInt::from(2), BigInt::from(3)]];
//! let der = pack_ballot(&ciphertexts).unwrap();
//! assert_eq!(ciphertexts, unpack_ballot(&der).unwrap());
//! ```

mod ballot;
mod ciphertext;
pub mod error;
mod public_key;
mod sanitize;

pub use ballot::{Ballot, SCHEME_OID, SCHEME_OID_ARCS, pack_ballot, unpack_ballot};
pub use ciphertext::{Ciphertext, pack_ciphertext, unpack_ciphertext};
pub use error::{Error, Result};
pub use public_key::{PublicKey, unpack_public_key};
pub use sanitize::{sanitize, sanitize_bytes};
