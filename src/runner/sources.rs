//! External collaborators
//!
//! The current help text and the README's working tree diff both come from
//! other programs. They sit behind traits so runs can be driven by fakes.

use crate::error::Result;
use crate::runner::{capture_command, capture_command_with_env, interpolate_strict, Context};
use std::collections::HashMap;
use std::path::Path;

/// Environment variable carrying the README path into the diff command
pub const README_ENV_VAR: &str = "README_SYNC_PATH";

/// Produces the help text that belongs in the README
pub trait HelpSource {
    fn help_text(&self, ctx: &Context) -> Result<String>;
}

/// Reports uncommitted changes to a file
pub trait WorkingTree {
    /// Diff of `path` against its committed state; empty when unchanged
    fn diff(&self, path: &Path, ctx: &Context) -> Result<String>;
}

/// Help text captured from a shell command, e.g. `cargo run -- --help`
#[derive(Debug, Clone)]
pub struct CommandHelpSource {
    pub command: String,
}

/// Diff produced by a shell command, e.g. `git diff -- "${readme}"`
#[derive(Debug, Clone)]
pub struct CommandWorkingTree {
    pub command: String,
}

impl CommandHelpSource {
    pub fn new(command: impl Into<String>) -> Self {
        CommandHelpSource {
            command: command.into(),
        }
    }
}

impl HelpSource for CommandHelpSource {
    fn help_text(&self, ctx: &Context) -> Result<String> {
        ctx.print_command(&self.command);
        Ok(capture_command(&self.command, ctx)?)
    }
}

impl CommandWorkingTree {
    pub fn new(command: impl Into<String>) -> Self {
        CommandWorkingTree {
            command: command.into(),
        }
    }

    /// The diff command with `${readme}` turned into a shell variable reference
    ///
    /// The path itself travels in [`README_ENV_VAR`], so quotes, `$` or
    /// backticks in it are never parsed by the shell.
    pub fn command_for(&self) -> Result<String> {
        let mut vars = HashMap::new();
        vars.insert("readme".to_string(), format!("${}", README_ENV_VAR));
        Ok(interpolate_strict(&self.command, &vars)?)
    }
}

impl WorkingTree for CommandWorkingTree {
    fn diff(&self, path: &Path, ctx: &Context) -> Result<String> {
        let command = self.command_for()?;
        let readme = path.to_string_lossy();
        let env = [(README_ENV_VAR, &*readme)];
        ctx.print_debug(&format!("Diff command: {} ({}={})", command, README_ENV_VAR, readme));
        Ok(capture_command_with_env(&command, &env, ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InterpolationError, ReadmeSyncError};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_command_help_source() {
        let ctx = Context::new().with_verbosity(crate::runner::Verbosity::Silent);
        let source = CommandHelpSource::new("printf 'Usage: tool\\n'");
        assert_eq!(source.help_text(&ctx).unwrap(), "Usage: tool\n");
    }

    #[test]
    fn test_command_for_references_env_var() {
        let tree = CommandWorkingTree::new("git diff -- \"${readme}\"");
        assert_eq!(tree.command_for().unwrap(), "git diff -- \"$README_SYNC_PATH\"");
    }

    #[test]
    fn test_command_for_repeated_readme() {
        let tree = CommandWorkingTree::new("git diff -- \"${readme}\" && git diff --cached -- \"${readme}\"");
        assert_eq!(
            tree.command_for().unwrap(),
            "git diff -- \"$README_SYNC_PATH\" && git diff --cached -- \"$README_SYNC_PATH\""
        );
    }

    #[test]
    fn test_command_for_rejects_unknown_variable() {
        let tree = CommandWorkingTree::new("diff ${readme_sync_no_such_var}");
        let result = tree.command_for();
        assert!(matches!(
            result,
            Err(ReadmeSyncError::Interpolation(InterpolationError::UndefinedVariable(_)))
        ));
    }

    #[test]
    fn test_readme_path_is_not_shell_code() {
        let temp_dir = TempDir::new().unwrap();
        let odd_dir = temp_dir.path().join("we\"ird $(touch injected) `touch injected2`");
        fs::create_dir(&odd_dir).unwrap();
        let readme = odd_dir.join("README.md");
        fs::write(&readme, "body\n").unwrap();

        let ctx = Context::new()
            .with_working_dir(temp_dir.path().to_path_buf())
            .with_verbosity(crate::runner::Verbosity::Silent);
        let tree = CommandWorkingTree::new("cat \"${readme}\" && cat \"${readme}\"");

        assert_eq!(tree.diff(&readme, &ctx).unwrap(), "body\nbody\n");
        assert!(!temp_dir.path().join("injected").exists());
        assert!(!temp_dir.path().join("injected2").exists());
    }

    #[test]
    fn test_command_working_tree_diff() {
        let temp_dir = TempDir::new().unwrap();
        let readme = temp_dir.path().join("README.md");
        let committed = temp_dir.path().join("README.committed");
        fs::write(&readme, "same\n").unwrap();
        fs::write(&committed, "same\n").unwrap();

        let ctx = Context::new()
            .with_working_dir(temp_dir.path().to_path_buf())
            .with_verbosity(crate::runner::Verbosity::Silent);
        let tree = CommandWorkingTree::new("diff -u README.committed \"${readme}\" || true");

        assert_eq!(tree.diff(&readme, &ctx).unwrap(), "");

        fs::write(&readme, "changed\n").unwrap();
        let diff = tree.diff(&readme, &ctx).unwrap();
        assert!(diff.contains("-same"));
        assert!(diff.contains("+changed"));
    }
}
