//! Decoding side of the conversion pattern.
//!
//! `Decoder<T, D>` is implemented on the source type `T` and produces `D`.
//! `D` has to opt in through `DecodableFrom<T>`, which keeps the set of
//! legal conversions explicit:
//!
//! ```no_run
//! use mixder::decoder::{DecodableFrom, Decoder};
//!
//! struct Hex(String);
//! struct Bytes(Vec<u8>);
//!
//! #[derive(Debug)]
//! struct OddLength;
//!
//! impl DecodableFrom<Hex> for Bytes {}
//!
//! impl Decoder<Hex, Bytes> for Hex {
//!     type Error = OddLength;
//!
//!     fn decode(&self) -> Result<Bytes, Self::Error> {
//!         if self.0.len() % 2 != 0 {
//!             return Err(OddLength);
//!         }
//!         Ok(Bytes(self.0.as_bytes().to_vec()))
//!     }
//! }
//! ```

/// Converts `self` (of type `T`) into `D`.
pub trait Decoder<T, D: DecodableFrom<T>> {
    type Error;

    /// Decodes `self` into `D`.
    ///
    /// # Errors
    ///
    /// Returns the implementation's error when the source is not a valid
    /// encoding of `D`.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker: `Self` may be decoded from `T`.
pub trait DecodableFrom<T> {}
