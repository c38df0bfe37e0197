//! Core configuration types
//!
//! This module defines the data structures that represent a readme-sync.yml configuration file.

use serde::Deserialize;
use std::path::PathBuf;

/// Default README location, relative to the config directory
pub const DEFAULT_README: &str = "README.md";

/// Default command producing the help text
pub const DEFAULT_HELP_COMMAND: &str = "cargo run -- --help";

/// Default command printing the README's uncommitted diff
pub const DEFAULT_DIFF_COMMAND: &str = "git diff -- \"${readme}\"";

/// Default opening marker
pub const DEFAULT_START_MARKER: &str = "<!-- HELP_START -->";

/// Default closing marker
pub const DEFAULT_END_MARKER: &str = "<!-- HELP_END -->";

/// Default code fence wrapped around the help text
pub const DEFAULT_FENCE: &str = "```";

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// README file to keep in sync
    #[serde(default = "default_readme")]
    pub readme: PathBuf,

    /// Command whose stdout is the help text
    #[serde(default = "default_help_command")]
    pub help_command: String,

    /// Command printing the README's diff against the last commit;
    /// `${readme}` expands to the README path
    #[serde(default = "default_diff_command")]
    pub diff_command: String,

    /// Interpreter used to run the commands (e.g., ["sh", "-c"])
    #[serde(default = "default_interpreter")]
    pub interpreter: Vec<String>,

    /// Fence line placed above and below the help text
    #[serde(default = "default_fence")]
    pub fence: String,

    /// Markers delimiting the help block
    #[serde(default)]
    pub markers: MarkerConfig,
}

/// Marker strings bounding the help block
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerConfig {
    #[serde(default = "default_start_marker")]
    pub start: String,

    #[serde(default = "default_end_marker")]
    pub end: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            readme: default_readme(),
            help_command: default_help_command(),
            diff_command: default_diff_command(),
            interpreter: default_interpreter(),
            fence: default_fence(),
            markers: MarkerConfig::default(),
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            start: default_start_marker(),
            end: default_end_marker(),
        }
    }
}

fn default_readme() -> PathBuf {
    PathBuf::from(DEFAULT_README)
}

fn default_help_command() -> String {
    DEFAULT_HELP_COMMAND.to_string()
}

fn default_diff_command() -> String {
    DEFAULT_DIFF_COMMAND.to_string()
}

fn default_interpreter() -> Vec<String> {
    vec!["sh".to_string(), "-c".to_string()]
}

fn default_fence() -> String {
    DEFAULT_FENCE.to_string()
}

fn default_start_marker() -> String {
    DEFAULT_START_MARKER.to_string()
}

fn default_end_marker() -> String {
    DEFAULT_END_MARKER.to_string()
}
