//! The check operation
//!
//! Verifies that syncing the README is a no-op as far as version control
//! can tell: the README must be clean before the sync and still clean after.

use crate::error::{CheckError, Result};
use crate::runner::{sync_readme, Context, HelpSource, SyncTarget, Verbosity, WorkingTree};

/// Fail unless the README is committed and matches the current help output
///
/// A dirty README is reported before any help text is captured. When the
/// sync leaves a diff behind, the diff is printed and returned in the error.
/// The README may be left rewritten on failure.
pub fn check_readme(
    target: &SyncTarget,
    help: &dyn HelpSource,
    tree: &dyn WorkingTree,
    ctx: &Context,
) -> Result<()> {
    let before = tree.diff(&target.readme, ctx)?;
    if !before.trim().is_empty() {
        ctx.print_error("README file not clean");
        return Err(CheckError::DirtyWorkingTree(target.readme.clone()).into());
    }
    ctx.print_info("Working directory clean");

    let echo = ctx.verbosity >= Verbosity::Verbose;
    sync_readme(target, help, ctx, echo)?;

    let after = tree.diff(&target.readme, ctx)?;
    if !after.trim().is_empty() {
        ctx.print_output(&after);
        ctx.print_error("README not synced");
        return Err(CheckError::StaleReadme {
            path: target.readme.clone(),
            diff: after,
        }
        .into());
    }

    ctx.print_info("README is up to date");
    Ok(())
}
