//! Babylon glossary source (`.gls`) writer.
//!
//! Each article is the `|`-separated headword list, the definition on the
//! next line, then a blank line.

use std::io::{BufWriter, Write};

use super::synonyms;
use crate::mobi::types::error::Result;
use crate::mobi::types::models::{DictionaryEntry, DictionaryMetadata};

pub fn write<W: Write>(
    metadata: &DictionaryMetadata,
    entries: &[DictionaryEntry],
    writer: W,
) -> Result<()> {
    let mut out = BufWriter::new(writer);
    write!(
        out,
        "\n#stripmethod=keep\n#sametypesequence=h\n#bookname={}\n#author={}\n\n",
        metadata.title,
        metadata.author.as_deref().unwrap_or_default()
    )?;

    for entry in entries {
        let mut headwords = vec![entry.headword.as_str()];
        headwords.extend(synonyms(entry));
        // Babylon articles are line oriented
        let body = entry.definition.replace("\r\n", " ").replace('\n', " ");
        write!(out, "{}\n{}\n\n", headwords.join("|"), body)?;
    }
    out.flush()?;
    Ok(())
}
