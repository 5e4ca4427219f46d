//! Foundational data structures, error types, and the container source seam.

pub mod error;
pub mod models;
pub mod source;
