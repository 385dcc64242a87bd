//! Encoding side of the conversion pattern, mirroring [`crate::decoder`].

/// Converts `self` (of type `T`) into `E`.
pub trait Encoder<T, E: EncodableTo<T>> {
    type Error;

    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker: `Self` may be produced by encoding a `T`.
pub trait EncodableTo<T> {}
