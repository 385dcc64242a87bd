//! Recursive descent over a fully buffered DER byte string.

use std::ops::Range;
use std::sync::Arc;

use mixder::decoder::{DecodableFrom, Decoder};

use crate::error::{Error, Result};
use crate::field::{Content, Field, Forest};
use crate::length::{octets, parse_length};
use crate::tag::parse_identifier;

/// Nesting limit used by [`parse`] and [`Parser::default`].
///
/// Election formats nest at most four levels deep; the limit only exists so
/// that hostile input cannot exhaust the stack.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Parser {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deepest level a field may be parsed at.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn parse(&self, input: &[u8]) -> Result<Forest> {
        self.parse_at_depth(input, 0)
    }

    /// Parses all sibling TLVs in `input`, treating them as living at
    /// `depth`. Constructed fields are descended into at `depth + 1`.
    pub fn parse_at_depth(&self, input: &[u8], depth: usize) -> Result<Forest> {
        let source: Arc<[u8]> = Arc::from(input);
        let fields = self.parse_span(&source, 0..source.len(), depth)?;
        Ok(Forest::new(fields))
    }

    fn parse_span(
        &self,
        source: &Arc<[u8]>,
        span: Range<usize>,
        depth: usize,
    ) -> Result<Vec<Field>> {
        let mut fields = Vec::new();
        let mut offset = span.start;
        while offset < span.end {
            let field = self.parse_field(source, offset..span.end, depth)?;
            offset = field.span.end;
            fields.push(field);
        }
        Ok(fields)
    }

    fn parse_field(&self, source: &Arc<[u8]>, span: Range<usize>, depth: usize) -> Result<Field> {
        if depth > self.max_depth {
            return Err(Error::NestingTooDeep {
                max: self.max_depth,
            });
        }

        let input = &source[span.clone()];
        let (rest, identifier) = parse_identifier(input)?;
        let (rest, length) = parse_length(rest)?;
        let (rest, data) = octets(rest, length)?;
        let end = span.end - rest.len();
        let content_start = end - length;

        let content = if identifier.constructed {
            let child_depth = depth.checked_add(1).ok_or(Error::NestingTooDeep {
                max: self.max_depth,
            })?;
            Content::Children(self.parse_span(source, content_start..end, child_depth)?)
        } else {
            Content::Leaf(data.to_vec())
        };

        Ok(Field {
            class: identifier.class,
            constructed: identifier.constructed,
            tag: identifier.tag,
            length,
            depth,
            source: Arc::clone(source),
            span: span.start..end,
            content,
        })
    }
}

/// Parses `input` with the default nesting limit.
pub fn parse(input: &[u8]) -> Result<Forest> {
    Parser::default().parse(input)
}

/// Parses `input` as siblings at `depth` with the default nesting limit.
pub fn parse_at_depth(input: &[u8], depth: usize) -> Result<Forest> {
    Parser::default().parse_at_depth(input, depth)
}

impl DecodableFrom<Vec<u8>> for Forest {}

impl Decoder<Vec<u8>, Forest> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Forest> {
        parse(self)
    }
}

impl<'a> DecodableFrom<&'a [u8]> for Forest {}

impl<'a> Decoder<&'a [u8], Forest> for &'a [u8] {
    type Error = Error;

    fn decode(&self) -> Result<Forest> {
        parse(self)
    }
}
