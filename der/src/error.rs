use nom::error::{ErrorKind, ParseError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("malformed length octets")]
    MalformedLength,
    #[error("truncated input")]
    TruncatedInput,
    #[error("nesting deeper than {max} levels")]
    NestingTooDeep { max: usize },
    #[error("high tag number form is not supported (identifier 0x{0:02x})")]
    UnsupportedTagForm(u8),
    #[error("tag number {0} does not fit in a single identifier octet")]
    InvalidTagNumber(u8),
    /// Any other nom failure. `be_u8` and `take` only report `Eof`, so this
    /// is only reached by combinators added later.
    #[error("parser error {0:?}")]
    Parser(ErrorKind),
}

// Running out of bytes inside a complete parser surfaces as Eof.
impl<I> ParseError<I> for Error {
    fn from_error_kind(_input: I, kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Eof | ErrorKind::Complete => Error::TruncatedInput,
            kind => Error::Parser(kind),
        }
    }

    fn append(_input: I, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<nom::Err<Error>> for Error {
    fn from(err: nom::Err<Error>) -> Self {
        match err {
            nom::Err::Incomplete(_) => Error::TruncatedInput,
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use nom::error::{ErrorKind, ParseError};
    use rstest::rstest;

    use super::Error;

    #[rstest(kind, expected,
        case(ErrorKind::Eof, Error::TruncatedInput),
        case(ErrorKind::Complete, Error::TruncatedInput),
        case(ErrorKind::Tag, Error::Parser(ErrorKind::Tag)),
        case(ErrorKind::Verify, Error::Parser(ErrorKind::Verify)),
    )]
    fn test_error_from_kind(kind: ErrorKind, expected: Error) {
        let input: &[u8] = &[];
        assert_eq!(expected, Error::from_error_kind(input, kind));
    }

    #[test]
    fn test_error_from_incomplete() {
        let err = nom::Err::Incomplete(nom::Needed::Unknown);
        assert_eq!(Error::TruncatedInput, Error::from(err));
    }
}
