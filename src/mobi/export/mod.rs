//! Output layer: serializes assembled records.
//!
//! # Submodules
//!
//! - [`textual`][]: StarDict Textual XML (`quick-xml` writer)
//! - [`tsv`][]: Tab separated values
//! - [`glossary`][]: Babylon glossary source (`.gls`)

pub mod glossary;
pub mod textual;
pub mod tsv;

use std::io::Write;

use super::types::error::Result;
use super::types::models::{DictionaryEntry, DictionaryMetadata};
use super::utils;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Textual,
    Tsv,
    Glossary,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Textual => "xml",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Glossary => "gls",
        }
    }

    /// Output file name derived from the dictionary title.
    pub fn file_name(&self, title: &str) -> String {
        let stem = utils::safe_file_name(title);
        let stem = if stem.is_empty() { "dictionary" } else { stem.as_str() };
        format!("{}.{}", stem, self.extension())
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExportFormat::Textual => write!(f, "stardict-textual"),
            ExportFormat::Tsv => write!(f, "tsv"),
            ExportFormat::Glossary => write!(f, "babylon-gls"),
        }
    }
}

/// Writes `entries` to `writer` in the given format.
pub fn write_entries<W: Write>(
    format: ExportFormat,
    metadata: &DictionaryMetadata,
    entries: &[DictionaryEntry],
    writer: W,
) -> Result<()> {
    match format {
        ExportFormat::Textual => textual::write(metadata, entries, writer),
        ExportFormat::Tsv => tsv::write(entries, writer),
        ExportFormat::Glossary => glossary::write(metadata, entries, writer),
    }
}

/// Inflected forms worth listing as synonyms.
///
/// Drops forms equal to the headword and repeated forms, keeping the
/// original order.
pub fn synonyms(entry: &DictionaryEntry) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::with_capacity(entry.inflections.len());
    for form in &entry.inflections {
        if form != &entry.headword && !seen.contains(&form.as_str()) {
            seen.push(form);
        }
    }
    seen
}
