//! # mobi-dict
//!
//! Extracts dictionary content from Kindle MOBI dictionaries and re-emits it
//! as plain-text interchange formats (StarDict Textual XML, TSV, Babylon GLS).
//!
//! The container itself (PDB records, compression, DRM) is read by an external
//! library that implements [`DictionarySource`]. This crate decodes the
//! inflection index and assembles headwords, definitions and inflected forms.
pub mod mobi;

// Re-export the main types for convenience
pub use mobi::{
    assemble,
    DictionaryConverter,
    EntryIterator,
    config::{ConvertOptions, GroupEmission},
    export::ExportFormat,
    types::{
        error::{MobiDictError, Result},
        models::{DictionaryEntry, DictionaryMetadata, Index, IndexEntry, TagArray},
        source::{DictionarySource, MemorySource},
    },
};
