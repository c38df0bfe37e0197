//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// README whose help block holds `help`
pub fn readme_with(help: &str) -> String {
    format!(
        "# tool\n\nIntro text.\n\n<!-- HELP_START -->\n```\n{}\n```\n<!-- HELP_END -->\n\n## License\nMIT\n",
        help
    )
}

/// Create a temporary project with a README and a readme-sync.yml
pub fn create_project(readme: &str, config: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let readme_path = temp_dir.path().join("README.md");
    fs::write(&readme_path, readme).unwrap();
    fs::write(temp_dir.path().join("readme-sync.yml"), config).unwrap();
    (temp_dir, readme_path)
}

/// Config whose "committed" README is a plain snapshot file next to it,
/// so the check tool can run without a real repository
pub fn snapshot_config(help_command: &str) -> String {
    format!(
        "help_command: '{}'\ndiff_command: 'diff -u README.committed \"${{readme}}\" || true'\n",
        help_command
    )
}

/// Record the current README as its committed state
pub fn commit_snapshot(dir: &Path, contents: &str) {
    fs::write(dir.join("README.committed"), contents).unwrap();
}

/// Whether a usable git binary is on PATH
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run git in `dir`, panicking on failure
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", "test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .status()
        .unwrap();
    assert!(status.success(), "git {:?} failed", args);
}
