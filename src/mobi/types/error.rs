//! Custom error types for the mobi-dict crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum MobiDictError {
    /// An error originating from I/O operations (every exporter, including the XML writer).
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The source has no orthography index, so it is a book rather than a dictionary.
    #[error("Not a dictionary file: no orthography index present")]
    NotADictionary,

    /// The source is DRM protected. Decryption is left to the container library.
    #[error("File is encrypted; decrypt it before conversion")]
    Encrypted,

    /// The index structure cannot be trusted past this point.
    #[error("Data corrupt: {0}")]
    DataCorrupt(String),

    /// A declared count of items does not match a parallel array.
    #[error("Count mismatch for {item_type}: expected {expected}, but found {found}")]
    CountMismatch {
        item_type: &'static str,
        expected: u64,
        found: u64,
    },

    /// An inflection rule is inconsistent with the buffer it was applied to.
    #[error("Corrupt inflection rule: {0}")]
    CorruptRule(String),
}

impl MobiDictError {
    /// Returns `true` for the data-corrupt family of errors.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            MobiDictError::DataCorrupt(_)
                | MobiDictError::CountMismatch { .. }
                | MobiDictError::CorruptRule(_)
        )
    }
}

/// A convenience `Result` type alias using the crate's `MobiDictError` type.
pub type Result<T> = std::result::Result<T, MobiDictError>;
