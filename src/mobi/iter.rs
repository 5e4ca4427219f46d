//! Lazy iteration over assembled dictionary records.
//!
//! [`EntryIterator`] walks the orthography index in order and yields the
//! records produced by [`Assembler::assemble_entry`]. A fatal error is yielded
//! once, after which the iterator is exhausted.
//!
//! # Example
//! ```
//! # use mobi_dict::{DictionaryConverter, ConvertOptions, MemorySource, DictionaryMetadata, Index};
//! # let source = MemorySource::new(DictionaryMetadata::default(), Vec::new())
//! #     .with_orthography(Index::default());
//! let converter = DictionaryConverter::new(&source, ConvertOptions::default()).unwrap();
//! for result in converter.iter_entries() {
//!     let entry = result.unwrap();
//!     println!("{}: {}", entry.headword, entry.definition);
//! }
//! ```

use std::iter::FusedIterator;
use std::vec::IntoIter;

use super::assembly::Assembler;
use super::types::error::Result;
use super::types::models::DictionaryEntry;

/// Iterator over dictionary records, in orthography index order.
pub struct EntryIterator<'a> {
    assembler: Assembler<'a>,
    position: usize,
    pending: IntoIter<DictionaryEntry>,
    failed: bool,
}

impl<'a> EntryIterator<'a> {
    pub fn new(assembler: Assembler<'a>) -> Self {
        Self {
            assembler,
            position: 0,
            pending: Vec::new().into_iter(),
            failed: false,
        }
    }

    /// Number of orthography entries consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a> Iterator for EntryIterator<'a> {
    type Item = Result<DictionaryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Drain records of the current headword first
            if let Some(record) = self.pending.next() {
                return Some(Ok(record));
            }
            if self.failed {
                return None;
            }

            let entry = self.assembler.orthography().get(self.position)?;
            self.position += 1;

            match self.assembler.assemble_entry(entry) {
                Ok(records) => self.pending = records.into_iter(),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl FusedIterator for EntryIterator<'_> {}
