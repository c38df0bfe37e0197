//! README document handling
//!
//! Splicing the help block between its markers and reading/writing the file.

pub mod block;
pub mod file;

pub use block::*;
pub use file::*;
