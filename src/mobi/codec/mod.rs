//! Codec layer for the byte-level transformations applied to entries.
//!
//! # Submodules
//!
//! - [`inflection`][]: Inflection rule interpreter (edit scripts to word forms)
//! - [`links`][]: Hyperlink rewriting inside definition bodies

pub mod inflection;
pub mod links;
