//! The sync operation
//!
//! Captures the current help text and splices it into the README.

use crate::config::Config;
use crate::error::Result;
use crate::readme::{read_readme, write_readme, HelpBlock, Markers};
use crate::runner::{Context, HelpSource};
use std::path::PathBuf;

/// The README a run operates on and how its help block is laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
    /// README path, resolved against the context's working directory
    pub readme: PathBuf,
    pub markers: Markers,
    pub fence: String,
}

/// Result of a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Whether the README bytes changed
    pub changed: bool,
    /// The reassembled document
    pub contents: String,
}

impl SyncTarget {
    pub fn from_config(config: &Config, ctx: &Context) -> Self {
        SyncTarget {
            readme: ctx.resolve(&config.readme),
            markers: Markers::from_config(config),
            fence: config.fence.clone(),
        }
    }
}

/// Rewrite the README's help block with fresh help output
///
/// The help text is captured before the README is touched, and a malformed
/// README is rejected before anything is written. When `echo` is set the
/// reassembled document is printed to stdout.
pub fn sync_readme(
    target: &SyncTarget,
    help: &dyn HelpSource,
    ctx: &Context,
    echo: bool,
) -> Result<SyncOutcome> {
    let help_text = help.help_text(ctx)?;
    ctx.print_debug(&format!("Captured {} bytes of help text", help_text.len()));

    let current = read_readme(&target.readme)?;
    let block = HelpBlock::new(&target.markers, &target.fence);
    let contents = block.splice(&current, &help_text)?;

    if echo {
        ctx.print_output(&contents);
    }

    let changed = contents != current;
    if changed {
        write_readme(&target.readme, &contents)?;
        ctx.print_info(&format!("Updated {}", target.readme.display()));
    } else {
        ctx.print_info(&format!("{} already up to date", target.readme.display()));
    }

    Ok(SyncOutcome { changed, contents })
}
