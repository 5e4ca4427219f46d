//! Core MOBI dictionary extraction module

pub mod types;
pub mod config;
pub mod index;
pub mod codec;
pub mod assembly;
pub mod iter;
pub mod converter;
pub mod export;
mod utils;

pub use assembly::{assemble, Assembler};
pub use converter::DictionaryConverter;
pub use iter::EntryIterator;
