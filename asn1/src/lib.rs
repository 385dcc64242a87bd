//! ASN.1 value layer on top of `mixder-der`.
//!
//! Encoders turn scalars into complete TLVs; decoders turn the leaf octets of
//! a parsed [`mixder_der::Field`] back into scalars.
//!
//! ```
//! use mixder_asn1::{Value, encode_integer, unpacked_value};
//! use mixder_der::parse;
//! use num_bigint::BigInt;
//!
//! let der = encode_integer(&BigInt::from(-129));
//! assert_eq!(vec![0x02, 0x02, 0xff, 0x7f], der);
//!
//! let forest = parse(&der).unwrap();
//! let Value::Integer(i) = unpacked_value(&forest[0]).unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(&BigInt::from(-129), i.as_bigint());
//! ```

mod bit_string;
pub mod encode;
pub mod error;
mod integer;
mod oid;
mod value;

pub use bit_string::BitString;
pub use encode::{
    encode_bit_string, encode_bit_string_bytes, encode_boolean, encode_enumerated,
    encode_generalized_time, encode_generalized_time_at, encode_integer, encode_null,
    encode_object_identifier, encode_octet_string, encode_oid, encode_printable_string,
    encode_utc_time, encode_utc_time_at,
};
pub use integer::{Integer, decode_integer};
pub use oid::{ObjectIdentifier, decode_oid};
pub use value::{Value, unpacked_value};
