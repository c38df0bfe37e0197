//! Configuration file parsing and discovery

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult, ReadmeSyncError};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file names to search for
pub const CONFIG_FILE_NAMES: &[&str] = &["readme-sync.yml", "readme-sync.yaml"];

/// Find the configuration file starting from a specific directory
/// and walking up through its parents
pub fn find_config_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            searched_paths.push(config_path.display().to_string());

            if config_path.is_file() {
                return Ok(config_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(ConfigError::NotFound(searched_paths.join(", "))),
        }
    }
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, ReadmeSyncError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> Result<Config, ReadmeSyncError> {
    // An empty file is a valid "all defaults" config
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }

    Ok(serde_yaml::from_str(yaml)?)
}

/// Load configuration for a run
///
/// An explicit path must exist. Without one the file is discovered from
/// `start_dir` upwards; when nothing is found the defaults apply and
/// `start_dir` becomes the base directory. Returns the config together with
/// the directory relative paths resolve against.
pub fn load_config(
    explicit: Option<&Path>,
    start_dir: &Path,
) -> Result<(Config, PathBuf), ReadmeSyncError> {
    let config_path = match explicit {
        Some(path) => Some(start_dir.join(path)),
        None => match find_config_file_from(start_dir.to_path_buf()) {
            Ok(path) => Some(path),
            Err(ConfigError::NotFound(_)) => None,
            Err(e) => return Err(e.into()),
        },
    };

    match config_path {
        Some(path) => {
            let config = parse_config_file(&path)?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok((config, base_dir))
        }
        None => Ok((Config::default(), start_dir.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_simple_config() {
        let yaml = r#"
help_command: ./tool --help
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.help_command, "./tool --help");
        assert_eq!(config.readme, PathBuf::from("README.md"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("\n  \n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_config("readme: [unclosed");
        assert!(matches!(result, Err(ReadmeSyncError::Yaml(_))));
    }

    #[test]
    fn test_parse_unknown_key() {
        let result = parse_config("help_comand: ./tool --help\n");
        assert!(matches!(result, Err(ReadmeSyncError::Yaml(_))));
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("readme-sync.yml");
        fs::write(&config_path, "readme: README.md\n").unwrap();

        let found = find_config_file_from(temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("readme-sync.yaml");
        let sub_dir = temp_dir.path().join("subdir");

        fs::create_dir(&sub_dir).unwrap();
        fs::write(&config_path, "readme: README.md\n").unwrap();

        let found = find_config_file_from(sub_dir).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_config_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = find_config_file_from(temp_dir.path().to_path_buf());
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let (config, base_dir) = load_config(None, temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(base_dir, temp_dir.path());
    }

    #[test]
    fn test_load_config_resolves_against_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let sub_dir = temp_dir.path().join("nested");
        fs::create_dir(&sub_dir).unwrap();
        fs::write(
            temp_dir.path().join("readme-sync.yml"),
            "readme: docs/README.md\n",
        )
        .unwrap();

        let (config, base_dir) = load_config(None, &sub_dir).unwrap();
        assert_eq!(config.readme, PathBuf::from("docs/README.md"));
        assert_eq!(base_dir, temp_dir.path());
    }

    #[test]
    fn test_load_explicit_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_config(Some(Path::new("missing.yml")), temp_dir.path());
        assert!(matches!(
            result,
            Err(ReadmeSyncError::Config(ConfigError::Unreadable { .. }))
        ));
    }
}
