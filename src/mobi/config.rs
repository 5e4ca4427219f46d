//! Fixed tag identifiers and conversion options.
//!
//! Tag ids are defined by the MOBI INDX format; they are collected here so
//! every lookup in the pipeline refers to a named constant.

/// Orthography entry: byte offset of the definition in the flow.
pub const TAG_ORTH_START_POS: u32 = 1;

/// Orthography entry: byte length of the definition.
pub const TAG_ORTH_LENGTH: u32 = 2;

/// Orthography entry: offsets of its inflection groups in the inflection index.
pub const TAG_INFL_GROUPS: u32 = 42;

/// Inflection group entry: rule group names (parallel to the parts array).
pub const TAG_INFL_RULE_GROUPS: u32 = 5;

/// Inflection group entry: positions of the rule entries (version 2 layout).
pub const TAG_INFL_RULE_PARTS: u32 = 26;

/// Declared by inflection indexes using the obsolete rule scheme.
pub const TAG_INFL_LEGACY_SCHEME: u32 = 7;

/// Fixed capacity of the buffer an inflection rule is applied to.
pub const RULE_BUFFER_CAPACITY: usize = 500;

/// How records are emitted when a headword has several inflection groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupEmission {
    /// One record per processed group, each carrying the forms collected so
    /// far. Matches the output of the reference converter.
    #[default]
    PerGroup,
    /// A single record per headword with the distinct forms of all groups.
    Merged,
}

/// Options controlling entry assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Rewrite `<a filepos=...>` links into `bword://` references.
    pub rewrite_links: bool,
    pub group_emission: GroupEmission,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            rewrite_links: true,
            group_emission: GroupEmission::default(),
        }
    }
}
