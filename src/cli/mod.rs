//! CLI interface and argument parsing
//!
//! This module handles command-line parsing shared by the `sync-readme`
//! and `check-readme` binaries.

pub mod app;

// Re-export main types
pub use app::*;
