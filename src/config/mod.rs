//! Configuration parsing and validation
//!
//! This module handles discovery and parsing of readme-sync.yml files
//! and validation of their contents.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
