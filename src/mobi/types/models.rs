//! Core data structures for MOBI dictionary extraction.
//!
//! This module defines the fundamental types used throughout the library:
//! - Index entries and their tagged value arrays (read-only views)
//! - Assembled dictionary entries handed to the exporters
//! - Dictionary metadata and text encoding

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::mobi::index;

/// MOBI code page value for UTF-8 text.
pub const CODE_PAGE_UTF8: u32 = 65001;

/// One `(tag id, values)` pair of an index entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagArray {
    pub tag_id: u32,
    pub values: Vec<u32>,
}

impl TagArray {
    pub fn new(tag_id: u32, values: impl Into<Vec<u32>>) -> Self {
        Self {
            tag_id,
            values: values.into(),
        }
    }
}

/// A node of the container's lookup structure.
///
/// The label is kept as raw bytes in the dictionary's text encoding: for
/// orthography entries it is the headword, for inflection rule entries it is
/// a binary edit script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexEntry {
    pub label: Vec<u8>,
    pub tags: Vec<TagArray>,
}

impl IndexEntry {
    pub fn new(label: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            tags: Vec::new(),
        }
    }

    /// Builder-style helper appending one tagged array.
    pub fn with_tag(mut self, tag_id: u32, values: impl Into<Vec<u32>>) -> Self {
        self.tags.push(TagArray::new(tag_id, values));
        self
    }

    /// Returns the values stored under `tag_id`, if present.
    pub fn tag_values(&self, tag_id: u32) -> Option<&[u32]> {
        index::lookup(Some(self), tag_id)
    }
}

/// An index (orthography or inflection) as exposed by the container library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    pub entries: Vec<IndexEntry>,
    /// Whether the index has its CNCX label record. Inflection labels live
    /// there, so an inflection index without it cannot be decoded.
    pub has_cncx: bool,
    /// Tag ids declared by the index TAGX table.
    pub tag_table: Vec<u32>,
}

impl Index {
    pub fn new(entries: Vec<IndexEntry>) -> Self {
        Self {
            entries,
            has_cncx: true,
            tag_table: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&IndexEntry> {
        self.entries.get(position)
    }

    pub fn declares_tag(&self, tag_id: u32) -> bool {
        self.tag_table.contains(&tag_id)
    }
}

/// A fully assembled dictionary article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub headword: String,
    /// Byte offset of the definition in the flow blob.
    pub definition_start: u32,
    /// Byte length of the definition in the flow blob.
    pub definition_length: u32,
    /// Definition HTML after link rewriting.
    pub definition: String,
    pub inflections: Vec<String>,
}

/// Book-level metadata used by the exporters.
#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub language: Option<String>,
    pub encoding: &'static Encoding,
}

impl DictionaryMetadata {
    pub fn new(title: impl Into<String>, encoding: &'static Encoding) -> Self {
        Self {
            title: title.into(),
            author: None,
            description: None,
            publisher: None,
            language: None,
            encoding,
        }
    }
}

impl Default for DictionaryMetadata {
    fn default() -> Self {
        Self::new("", UTF_8)
    }
}

/// Maps a MOBI header code page to its text encoding.
///
/// MOBI only knows UTF-8 (65001) and Windows-1252; anything else is treated
/// as Windows-1252.
pub fn encoding_for_code_page(code_page: u32) -> &'static Encoding {
    if code_page == CODE_PAGE_UTF8 {
        UTF_8
    } else {
        WINDOWS_1252
    }
}
