//! Configuration validation
//!
//! This module provides validation logic for configuration files.

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if config.readme.as_os_str().is_empty() {
        return Err(ConfigError::Invalid("readme path must not be empty".to_string()));
    }

    validate_command("help_command", &config.help_command)?;
    validate_command("diff_command", &config.diff_command)?;

    if config.interpreter.is_empty() || config.interpreter[0].trim().is_empty() {
        return Err(ConfigError::Invalid(
            "interpreter must name a program (e.g. [sh, -c])".to_string(),
        ));
    }

    validate_markers(&config.markers.start, &config.markers.end)?;

    if config.fence.trim().is_empty() || config.fence.contains(['\n', '\r']) {
        return Err(ConfigError::Invalid(
            "fence must be a single non-empty line".to_string(),
        ));
    }

    Ok(())
}

/// Validate a command string
fn validate_command(field: &str, command: &str) -> ConfigResult<()> {
    if command.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Markers must be non-empty and distinguishable from each other
fn validate_markers(start: &str, end: &str) -> ConfigResult<()> {
    if start.is_empty() || end.is_empty() {
        return Err(ConfigError::Invalid("markers must not be empty".to_string()));
    }

    // One marker inside the other would make locating them ambiguous
    if start.contains(end) || end.contains(start) {
        return Err(ConfigError::Invalid(format!(
            "markers '{}' and '{}' must not contain each other",
            start, end
        )));
    }

    Ok(())
}
