//! Tab separated output: `headword<TAB>form|form<TAB>definition`.

use std::io::{BufWriter, Write};

use super::synonyms;
use crate::mobi::types::error::Result;
use crate::mobi::types::models::DictionaryEntry;

pub fn write<W: Write>(entries: &[DictionaryEntry], writer: W) -> Result<()> {
    let mut out = BufWriter::new(writer);
    for entry in entries {
        writeln!(
            out,
            "{}\t{}\t{}",
            escape_field(entry.headword.trim()),
            escape_field(&synonyms(entry).join("|")),
            escape_field(&entry.definition)
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Keeps every record on one line.
fn escape_field(field: &str) -> String {
    field
        .replace('\\', "\\\\")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
        .replace('\r', "\\n")
        .replace('\t', "\\t")
}
