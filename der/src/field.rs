use std::fmt::{Debug, Display};
use std::ops::{Index, Range};
use std::sync::Arc;

use crate::tag::{Class, Tag};

/// Content of a field: raw octets for primitive encodings, child fields
/// for constructed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Leaf(Vec<u8>),
    Children(Vec<Field>),
}

/// One decoded TLV.
///
/// All fields of one parse share a single copy of the input; `span` locates
/// the exact header and content octets of this field in it, so
/// `raw().len() == header_len() + length()` always holds. For constructed
/// fields the children's raw spans concatenate to the content octets.
#[derive(Clone)]
pub struct Field {
    pub(crate) class: Class,
    pub(crate) constructed: bool,
    pub(crate) tag: Tag,
    pub(crate) length: usize,
    pub(crate) depth: usize,
    pub(crate) source: Arc<[u8]>,
    pub(crate) span: Range<usize>,
    pub(crate) content: Content,
}

impl Field {
    pub fn class(&self) -> Class {
        self.class
    }

    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Declared content length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Nesting level this field was parsed at.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Identifier and length octets plus content, exactly as read.
    pub fn raw(&self) -> &[u8] {
        &self.source[self.span.clone()]
    }

    pub fn header_len(&self) -> usize {
        self.span.len() - self.length
    }

    /// Content octets, regardless of whether the field is constructed.
    pub fn content_bytes(&self) -> &[u8] {
        &self.raw()[self.header_len()..]
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn leaf(&self) -> Option<&[u8]> {
        match &self.content {
            Content::Leaf(data) => Some(data),
            Content::Children(_) => None,
        }
    }

    pub fn children(&self) -> Option<&[Field]> {
        match &self.content {
            Content::Leaf(_) => None,
            Content::Children(fields) => Some(fields),
        }
    }

    pub fn child(&self, index: usize) -> Option<&Field> {
        self.children().and_then(|fields| fields.get(index))
    }

    fn write_indented(&self, f: &mut std::fmt::Formatter<'_>, indent: usize) -> std::fmt::Result {
        let form = if self.constructed {
            "constructed"
        } else {
            "primitive"
        };
        write!(
            f,
            "{:indent$}{} {} {} {}",
            "",
            self.class,
            form,
            self.tag,
            self.length,
            indent = indent * 2
        )?;
        match &self.content {
            Content::Leaf(data) => {
                if !data.is_empty() {
                    write!(f, " ")?;
                    for b in data {
                        write!(f, "{:02x}", b)?;
                    }
                }
                writeln!(f)
            }
            Content::Children(fields) => {
                writeln!(f)?;
                for field in fields {
                    field.write_indented(f, indent + 1)?;
                }
                Ok(())
            }
        }
    }
}

// Fields from different buffers are equal when their encodings are.
impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class
            && self.constructed == other.constructed
            && self.tag == other.tag
            && self.length == other.length
            && self.depth == other.depth
            && self.raw() == other.raw()
            && self.content == other.content
    }
}

impl Eq for Field {}

impl Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("class", &self.class)
            .field("constructed", &self.constructed)
            .field("tag", &self.tag)
            .field("length", &self.length)
            .field("depth", &self.depth)
            .field("raw", &self.raw())
            .field("content", &self.content)
            .finish()
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Ordered sibling fields produced by one parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    fields: Vec<Field>,
}

impl Forest {
    pub fn new(fields: Vec<Field>) -> Self {
        Forest { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}

impl Index<usize> for Forest {
    type Output = Field;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fields[index]
    }
}

impl IntoIterator for Forest {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl Display for Forest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for field in &self.fields {
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}
