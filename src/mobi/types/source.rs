//! The seam between this crate and a container-reading library.

use super::models::{DictionaryMetadata, Index};

/// A parsed MOBI dictionary as exposed by a container library.
///
/// Implementors own the indexes and the flow blob; this crate only borrows
/// them for the duration of a conversion.
pub trait DictionarySource {
    /// Book-level metadata (title, author, text encoding).
    fn metadata(&self) -> &DictionaryMetadata;

    /// The orthography (headword) index. `None` means the book is not a dictionary.
    fn orthography_index(&self) -> Option<&Index>;

    /// The inflection rule index, if the dictionary carries one.
    fn inflection_index(&self) -> Option<&Index>;

    /// The decompressed text flow that definitions are sliced from.
    fn flow(&self) -> &[u8];

    /// Whether the container is DRM protected.
    fn is_encrypted(&self) -> bool {
        false
    }
}

/// An owned, in-memory [`DictionarySource`].
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    metadata: DictionaryMetadata,
    orthography: Option<Index>,
    inflections: Option<Index>,
    flow: Vec<u8>,
    encrypted: bool,
}

impl MemorySource {
    pub fn new(metadata: DictionaryMetadata, flow: impl Into<Vec<u8>>) -> Self {
        Self {
            metadata,
            orthography: None,
            inflections: None,
            flow: flow.into(),
            encrypted: false,
        }
    }

    pub fn with_orthography(mut self, index: Index) -> Self {
        self.orthography = Some(index);
        self
    }

    pub fn with_inflections(mut self, index: Index) -> Self {
        self.inflections = Some(index);
        self
    }

    pub fn encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = encrypted;
        self
    }
}

impl DictionarySource for MemorySource {
    fn metadata(&self) -> &DictionaryMetadata {
        &self.metadata
    }

    fn orthography_index(&self) -> Option<&Index> {
        self.orthography.as_ref()
    }

    fn inflection_index(&self) -> Option<&Index> {
        self.inflections.as_ref()
    }

    fn flow(&self) -> &[u8] {
        &self.flow
    }

    fn is_encrypted(&self) -> bool {
        self.encrypted
    }
}
