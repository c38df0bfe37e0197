//! Sync and check execution
//!
//! This module runs the external collaborators and drives the sync and
//! check operations over a README.

pub mod check;
pub mod command;
pub mod context;
pub mod interpolate;
pub mod sources;
pub mod sync;

// Re-export main types
pub use check::*;
pub use command::*;
pub use context::*;
pub use interpolate::*;
pub use sources::*;
pub use sync::*;
