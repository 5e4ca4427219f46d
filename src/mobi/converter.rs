use std::io::Write;

use log::info;

use super::assembly::{self, Assembler};
use super::config::ConvertOptions;
use super::export::{self, ExportFormat};
use super::iter::EntryIterator;
use super::types::error::{MobiDictError, Result};
use super::types::models::{DictionaryEntry, DictionaryMetadata, Index};
use super::types::source::DictionarySource;

/// Converts a parsed MOBI dictionary into interchange formats.
///
/// The converter borrows a [`DictionarySource`] supplied by a container
/// library; it never touches the physical file.
#[derive(Debug)]
pub struct DictionaryConverter<'a, S: DictionarySource> {
    source: &'a S,
    orthography: &'a Index,
    pub options: ConvertOptions,
}

impl<'a, S: DictionarySource> DictionaryConverter<'a, S> {
    /// Prepare a conversion of `source`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source is DRM protected
    /// - The source has no orthography index (not a dictionary)
    pub fn new(source: &'a S, options: ConvertOptions) -> Result<Self> {
        if source.is_encrypted() {
            return Err(MobiDictError::Encrypted);
        }
        let orthography = source.orthography_index().ok_or(MobiDictError::NotADictionary)?;

        let metadata = source.metadata();
        info!(
            "Dictionary opened: title='{}', encoding={}, entries={}, inflections={}",
            metadata.title,
            metadata.encoding.name(),
            orthography.len(),
            source.inflection_index().is_some()
        );

        Ok(Self {
            source,
            orthography,
            options,
        })
    }

    pub fn metadata(&self) -> &'a DictionaryMetadata {
        self.source.metadata()
    }

    /// Returns a lazy iterator over assembled records.
    pub fn iter_entries(&self) -> EntryIterator<'a> {
        EntryIterator::new(Assembler::new(
            self.orthography,
            self.source.inflection_index(),
            self.source.flow(),
            self.source.metadata().encoding,
            self.options,
        ))
    }

    /// Assembles every record, failing on the first fatal corruption.
    pub fn entries(&self) -> Result<Vec<DictionaryEntry>> {
        assembly::assemble(
            self.orthography,
            self.source.inflection_index(),
            self.source.flow(),
            self.source.metadata().encoding,
            self.options,
        )
    }

    /// Assembles all records, then writes them in `format`.
    ///
    /// Nothing is written if assembly fails. Returns the number of records written.
    pub fn export<W: Write>(&self, format: ExportFormat, writer: W) -> Result<usize> {
        let entries = self.entries()?;
        export::write_entries(format, self.metadata(), &entries, writer)?;
        info!("Exported {} records as {}", entries.len(), format);
        Ok(entries.len())
    }
}
