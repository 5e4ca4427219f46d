//! StarDict Textual Dictionary Format writer.
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <stardict>
//!   <info> version, bookname, author, description, ... </info>
//!   <article>
//!     <key>headword</key>
//!     <synonym>inflected form</synonym>
//!     <definition type="h"><![CDATA[html]]></definition>
//!   </article>
//! </stardict>
//! ```

use std::io::Write;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::synonyms;
use crate::mobi::types::error::Result;
use crate::mobi::types::models::{DictionaryEntry, DictionaryMetadata};

const STARDICT_VERSION: &str = "3.0.0";

pub fn write<W: Write>(
    metadata: &DictionaryMetadata,
    entries: &[DictionaryEntry],
    writer: W,
) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(BytesStart::new("stardict")))?;

    write_info(&mut xml, metadata)?;
    for entry in entries {
        write_article(&mut xml, entry)?;
    }

    xml.write_event(Event::End(BytesEnd::new("stardict")))?;
    let mut inner = xml.into_inner();
    inner.flush()?;
    Ok(())
}

fn write_info<W: Write>(xml: &mut Writer<W>, metadata: &DictionaryMetadata) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("info")))?;
    write_text_element(xml, "version", STARDICT_VERSION)?;
    write_text_element(xml, "bookname", &metadata.title)?;
    write_text_element(xml, "author", metadata.author.as_deref().unwrap_or_default())?;
    write_text_element(xml, "description", metadata.description.as_deref().unwrap_or_default())?;
    write_text_element(xml, "email", "")?;
    write_text_element(xml, "website", "")?;
    write_text_element(xml, "date", "")?;
    write_text_element(xml, "dicttype", "")?;
    xml.write_event(Event::End(BytesEnd::new("info")))?;
    Ok(())
}

fn write_article<W: Write>(xml: &mut Writer<W>, entry: &DictionaryEntry) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("article")))?;
    write_text_element(xml, "key", &entry.headword)?;
    for synonym in synonyms(entry) {
        write_text_element(xml, "synonym", synonym)?;
    }

    xml.write_event(Event::Start(
        BytesStart::new("definition").with_attributes([("type", "h")]),
    ))?;
    for section in cdata_sections(&entry.definition) {
        xml.write_event(Event::CData(BytesCData::new(section)))?;
    }
    xml.write_event(Event::End(BytesEnd::new("definition")))?;

    xml.write_event(Event::End(BytesEnd::new("article")))?;
    Ok(())
}

/// Writes `<name>text</name>`, or `<name/>` for empty text.
fn write_text_element<W: Write>(xml: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        xml.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Splits `text` so that no section contains the `]]>` terminator.
fn cdata_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut rest = text;
    while let Some(idx) = rest.find("]]>") {
        sections.push(&rest[..idx + 2]);
        rest = &rest[idx + 2..];
    }
    sections.push(rest);
    sections
}
