//! DER structure layer: length octets, identifier octets, and the field
//! tree produced by parsing a buffered byte string.
//!
//! Parsing never interprets content beyond what is needed to find nested
//! TLVs; turning leaf octets into integers or object identifiers is done by
//! the `mixder-asn1` crate.
//!
//! ```
//! use mixder_der::{Tag, parse};
//!
//! let forest = parse(&[0x30, 0x03, 0x02, 0x01, 0x05]).unwrap();
//! let integer = forest[0].child(0).unwrap();
//! assert_eq!(Tag::Integer, integer.tag());
//! assert_eq!(Some([0x05u8].as_slice()), integer.leaf());
//! ```
//!
//! The same parse is available through the shared `Decoder` trait:
//!
//! ```
//! use mixder::decoder::Decoder;
//! use mixder_der::{Forest, Tag};
//!
//! let bytes = vec![0x30, 0x03, 0x02, 0x01, 0x05];
//! let forest: Forest = bytes.decode().unwrap();
//! assert_eq!(Tag::Sequence, forest[0].tag());
//! ```

pub mod encode;
pub mod error;
mod field;
pub mod length;
mod parser;
mod tag;

pub use encode::{
    encode_explicit_constructed, encode_explicit_primitive, encode_sequence, encode_set,
    encode_tlv,
};
pub use field::{Content, Field, Forest};
pub use length::{decode_length, encode_length};
pub use parser::{DEFAULT_MAX_DEPTH, Parser, parse, parse_at_depth};
pub use tag::{Class, TAG_CONSTRUCTED, TAG_CONTEXT_SPECIFIC, Tag};
