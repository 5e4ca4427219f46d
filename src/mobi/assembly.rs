//! # Entry Assembly
//!
//! Turns orthography index entries into [`DictionaryEntry`] records:
//!
//! 1.  **Locate Definition**: reads the start/length tags and slices the
//!     definition out of the flow blob.
//! 2.  **Rewrite Links**: replaces `filepos` anchors (optional).
//! 3.  **Resolve Inflections**: follows the entry's inflection groups into the
//!     inflection index and applies every rule part to the headword.
//!
//! ## Error policy
//! A malformed entry (no offset, no length, range outside the flow) and a
//! rule that cannot be applied are skipped. Anything that means the index
//! structure itself is broken (group offset out of range, missing CNCX,
//! missing or unequal group/part arrays) aborts the whole run.

use encoding_rs::Encoding;
use log::{debug, info, trace, warn};

use crate::mobi::codec::{inflection, links};
use crate::mobi::config::*;
use crate::mobi::index;
use crate::mobi::iter::EntryIterator;
use crate::mobi::types::error::{MobiDictError, Result};
use crate::mobi::types::models::{DictionaryEntry, Index, IndexEntry};
use crate::mobi::utils::{decode_text, trim_label};

/// Assembles dictionary records from a borrowed orthography index.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    orthography: &'a Index,
    inflections: Option<&'a Index>,
    flow: &'a [u8],
    encoding: &'static Encoding,
    options: ConvertOptions,
}

impl<'a> Assembler<'a> {
    pub fn new(
        orthography: &'a Index,
        inflections: Option<&'a Index>,
        flow: &'a [u8],
        encoding: &'static Encoding,
        options: ConvertOptions,
    ) -> Self {
        let inflections = match inflections {
            Some(index) if index.declares_tag(TAG_INFL_LEGACY_SCHEME) => {
                warn!("Obsolete inflection rule scheme, inflections will not be decoded");
                None
            }
            other => other,
        };

        Self {
            orthography,
            inflections,
            flow,
            encoding,
            options,
        }
    }

    pub fn orthography(&self) -> &'a Index {
        self.orthography
    }

    /// Whether rule parts will be decoded for entries that reference groups.
    pub fn decodes_inflections(&self) -> bool {
        self.inflections.is_some()
    }

    /// Builds the records for one orthography entry.
    ///
    /// Returns no record for a malformed entry, one record when there is
    /// nothing to inflect, and otherwise one record per inflection group
    /// ([`GroupEmission::PerGroup`]) or a single merged record.
    pub fn assemble_entry(&self, entry: &IndexEntry) -> Result<Vec<DictionaryEntry>> {
        let Some(mut record) = self.base_record(entry) else {
            return Ok(Vec::new());
        };

        let Some(inflections) = self.inflections else {
            return Ok(vec![record]);
        };

        let groups = match index::lookup(Some(entry), TAG_INFL_GROUPS) {
            Some(groups) if !groups.is_empty() => groups,
            _ => return Ok(vec![record]),
        };

        if !inflections.has_cncx {
            return Err(MobiDictError::DataCorrupt(
                "inflection index is missing its CNCX record".to_string(),
            ));
        }

        let seed = trim_label(&entry.label);
        let mut records = Vec::new();
        for &group_offset in groups {
            let forms = self.group_forms(inflections, group_offset, seed, &record.headword)?;
            debug!(
                "Inflection group {} of '{}': {} forms",
                group_offset,
                record.headword,
                forms.len()
            );

            match self.options.group_emission {
                GroupEmission::PerGroup => {
                    record.inflections.extend(forms);
                    records.push(record.clone());
                }
                GroupEmission::Merged => {
                    for form in forms {
                        if !record.inflections.contains(&form) {
                            record.inflections.push(form);
                        }
                    }
                }
            }
        }

        if self.options.group_emission == GroupEmission::Merged {
            records.push(record);
        }
        Ok(records)
    }

    /// Headword and definition, or `None` if the entry has no usable body.
    fn base_record(&self, entry: &IndexEntry) -> Option<DictionaryEntry> {
        let headword = decode_text(&entry.label, self.encoding);
        let start = index::first_value(Some(entry), TAG_ORTH_START_POS).unwrap_or(0);
        let length = index::first_value(Some(entry), TAG_ORTH_LENGTH).unwrap_or(0);

        if start == 0 || length == 0 {
            warn!(
                "Poorly formatted definition body for '{}' (offset={}, length={}), skipping",
                headword, start, length
            );
            return None;
        }

        let begin = start as usize;
        let body = begin
            .checked_add(length as usize)
            .and_then(|end| self.flow.get(begin..end));
        let Some(body) = body else {
            warn!(
                "Definition of '{}' [{}..+{}] lies outside the {} byte flow, skipping",
                headword,
                start,
                length,
                self.flow.len()
            );
            return None;
        };

        let mut definition = decode_text(body, self.encoding);
        if self.options.rewrite_links {
            definition = links::rewrite_links(&definition).into_owned();
        }

        Some(DictionaryEntry {
            headword,
            definition_start: start,
            definition_length: length,
            definition,
            inflections: Vec::new(),
        })
    }

    /// Decodes every rule part of one inflection group.
    fn group_forms(
        &self,
        inflections: &Index,
        group_offset: u32,
        seed: &[u8],
        headword: &str,
    ) -> Result<Vec<String>> {
        let group = inflections.get(group_offset as usize).ok_or_else(|| {
            MobiDictError::DataCorrupt(format!(
                "inflection group offset {} is out of range ({} entries)",
                group_offset,
                inflections.len()
            ))
        })?;

        let (rule_groups, parts) = match (
            index::lookup(Some(group), TAG_INFL_RULE_GROUPS),
            index::lookup(Some(group), TAG_INFL_RULE_PARTS),
        ) {
            (None, None) => {
                return Err(MobiDictError::DataCorrupt(format!(
                    "inflection group {} has neither rule groups nor rule parts",
                    group_offset
                )));
            }
            (rule_groups, parts) => (rule_groups.unwrap_or_default(), parts.unwrap_or_default()),
        };

        if rule_groups.len() != parts.len() {
            return Err(MobiDictError::CountMismatch {
                item_type: "inflection rule parts",
                expected: rule_groups.len() as u64,
                found: parts.len() as u64,
            });
        }

        let mut forms = Vec::with_capacity(parts.len());
        for &part in parts {
            let Some(rule) = inflections.get(part as usize) else {
                debug!("Inflection rule {} for '{}' not found, skipping", part, headword);
                continue;
            };
            match inflection::apply_rule(seed, &rule.label) {
                Ok(decoded) if !decoded.is_empty() => {
                    forms.push(decode_text(&decoded, self.encoding));
                }
                Ok(_) => trace!("Inflection rule {} for '{}' produced an empty form", part, headword),
                Err(e) => debug!("Skipping inflection rule {} for '{}': {}", part, headword, e),
            }
        }
        Ok(forms)
    }
}

/// Assembles all entries of `orthography` in index order.
///
/// Fatal corruption aborts the run; no partial result is returned.
pub fn assemble(
    orthography: &Index,
    inflections: Option<&Index>,
    flow: &[u8],
    encoding: &'static Encoding,
    options: ConvertOptions,
) -> Result<Vec<DictionaryEntry>> {
    info!(
        "Assembling {} orthography entries (inflection index: {})",
        orthography.len(),
        inflections.map_or(0, Index::len)
    );
    let assembler = Assembler::new(orthography, inflections, flow, encoding, options);
    let entries = EntryIterator::new(assembler).collect::<Result<Vec<_>>>()?;
    info!("Assembled {} dictionary records", entries.len());
    Ok(entries)
}
