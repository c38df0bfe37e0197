//! Variable interpolation for command strings
//!
//! Replaces `${var}` references, e.g. `${readme}` in the diff command.

use crate::error::{InterpolationError, InterpolationResult};
use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};
use std::env;
use std::sync::OnceLock;

fn var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
}

/// Interpolate variables in a string
///
/// Supports:
/// - `${var}` - variable from the provided map
/// - Environment variables (when not found in the map)
///
/// Unknown variables are left untouched.
pub fn interpolate(s: &str, vars: &HashMap<String, String>) -> InterpolationResult<String> {
    let re = var_pattern();
    let mut result = s.to_string();
    // Names expanded in earlier passes; meeting one again means a cycle
    let mut expanded: HashSet<String> = HashSet::new();

    // Loop to handle values that themselves contain references
    loop {
        let mut this_pass: HashSet<String> = HashSet::new();

        result = re
            .replace_all(&result, |caps: &Captures| {
                let var_name = &caps[1];

                if expanded.contains(var_name) {
                    return format!("${{{}}}", var_name);
                }

                if let Some(value) = vars.get(var_name) {
                    this_pass.insert(var_name.to_string());
                    return value.clone();
                }

                if let Ok(value) = env::var(var_name) {
                    this_pass.insert(var_name.to_string());
                    return value;
                }

                format!("${{{}}}", var_name)
            })
            .into_owned();

        if this_pass.is_empty() {
            break;
        }
        expanded.extend(this_pass);

        if expanded.len() > 100 {
            return Err(InterpolationError::RecursiveInterpolation);
        }
    }

    Ok(result)
}

/// Interpolate with strict mode - errors on undefined variables
pub fn interpolate_strict(s: &str, vars: &HashMap<String, String>) -> InterpolationResult<String> {
    let result = interpolate(s, vars)?;

    if let Some(caps) = var_pattern().captures(&result) {
        return Err(InterpolationError::UndefinedVariable(caps[1].to_string()));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_interpolation() {
        let mut vars = HashMap::new();
        vars.insert("readme".to_string(), "/repo/README.md".to_string());

        let result = interpolate("git diff -- \"${readme}\"", &vars).unwrap();
        assert_eq!(result, "git diff -- \"/repo/README.md\"");
    }

    #[test]
    fn test_repeated_variable() {
        let mut vars = HashMap::new();
        vars.insert("readme".to_string(), "README.md".to_string());

        let result = interpolate_strict(
            "git diff -- \"${readme}\" && git diff --cached -- \"${readme}\"",
            &vars,
        )
        .unwrap();
        assert_eq!(
            result,
            "git diff -- \"README.md\" && git diff --cached -- \"README.md\""
        );
    }

    #[test]
    fn test_nested_interpolation() {
        let mut vars = HashMap::new();
        vars.insert("inner".to_string(), "value".to_string());
        vars.insert("outer".to_string(), "${inner}-${inner}".to_string());

        let result = interpolate("${outer}", &vars).unwrap();
        assert_eq!(result, "value-value");
    }

    #[test]
    fn test_environment_variable() {
        env::set_var("README_SYNC_TEST_GIT", "/usr/bin/git");

        let vars = HashMap::new();
        let result = interpolate("${README_SYNC_TEST_GIT} diff", &vars).unwrap();
        assert_eq!(result, "/usr/bin/git diff");

        env::remove_var("README_SYNC_TEST_GIT");
    }

    #[test]
    fn test_undefined_variable_lenient() {
        let vars = HashMap::new();
        let result = interpolate("diff ${undefined}", &vars).unwrap();
        assert_eq!(result, "diff ${undefined}");
    }

    #[test]
    fn test_undefined_variable_strict() {
        let vars = HashMap::new();
        let result = interpolate_strict("diff ${readme_sync_undefined_xyz}", &vars);
        assert!(matches!(
            result,
            Err(InterpolationError::UndefinedVariable(name)) if name == "readme_sync_undefined_xyz"
        ));
    }

    #[test]
    fn test_self_reference_terminates() {
        let mut vars = HashMap::new();
        vars.insert("loop".to_string(), "${loop}".to_string());

        let result = interpolate("${loop}", &vars).unwrap();
        assert_eq!(result, "${loop}");
    }

    #[test]
    fn test_no_interpolation() {
        let vars = HashMap::new();
        let result = interpolate("cargo run -- --help", &vars).unwrap();
        assert_eq!(result, "cargo run -- --help");
    }
}
