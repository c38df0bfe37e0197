//! readme-sync - keep a README's `--help` block honest
//!
//! Two tools live here. `sync-readme` captures a CLI's help output and splices
//! it between the `<!-- HELP_START -->` and `<!-- HELP_END -->` markers of a
//! README. `check-readme` runs the same sync in CI and fails when that changes
//! the README, or when the README was already modified before the run.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod readme;
pub mod runner;

// Re-export commonly used types
pub use error::{ReadmeSyncError, Result};

/// Current version of readme-sync
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
