//! Main CLI application

use crate::config::{load_config, validate_config, Config};
use crate::error::ReadmeSyncError;
use crate::runner::{
    check_readme, sync_readme, CommandHelpSource, CommandWorkingTree, Context, SyncTarget,
    Verbosity,
};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// The two tools shipped by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Rewrite the README's help block
    Sync,
    /// Fail when the README's help block is stale
    Check,
}

impl Tool {
    /// Binary name
    pub fn name(self) -> &'static str {
        match self {
            Tool::Sync => "sync-readme",
            Tool::Check => "check-readme",
        }
    }

    fn about(self) -> &'static str {
        match self {
            Tool::Sync => "Rewrite the README help block with the current --help output",
            Tool::Check => {
                "Verify the README help block matches the current --help output and is committed"
            }
        }
    }
}

/// CLI application
pub struct App {
    tool: Tool,
    config: Config,
    ctx: Context,
}

impl App {
    /// Build the app from parsed arguments, loading configuration from `cwd`
    pub fn from_matches(
        tool: Tool,
        matches: &ArgMatches,
        cwd: &Path,
    ) -> Result<Self, ReadmeSyncError> {
        let verbosity = get_verbosity(matches);
        let file = matches.get_one::<PathBuf>("file").map(PathBuf::as_path);

        let (mut config, base_dir) = load_config(file, cwd)?;

        // A README given on the command line is relative to where we were invoked
        if let Some(readme) = matches.get_one::<PathBuf>("readme") {
            config.readme = cwd.join(readme);
        }

        validate_config(&config)?;

        let ctx = Context::new()
            .with_working_dir(base_dir)
            .with_interpreter(config.interpreter.clone())
            .with_verbosity(verbosity);

        Ok(App { tool, config, ctx })
    }

    /// Run the selected tool
    pub fn run(self) -> Result<(), ReadmeSyncError> {
        let target = SyncTarget::from_config(&self.config, &self.ctx);
        let help = CommandHelpSource::new(self.config.help_command.clone());

        self.ctx.print_debug(&format!("README: {}", target.readme.display()));

        match self.tool {
            Tool::Sync => {
                let echo = self.ctx.verbosity >= Verbosity::Normal;
                sync_readme(&target, &help, &self.ctx, echo)?;
            }
            Tool::Check => {
                let tree = CommandWorkingTree::new(self.config.diff_command.clone());
                check_readme(&target, &help, &tree, &self.ctx)?;
            }
        }

        Ok(())
    }
}

/// Build the clap command for a tool
pub fn build_command(tool: Tool) -> Command {
    Command::new(tool.name())
        .version(env!("CARGO_PKG_VERSION"))
        .about(tool.about())
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to readme-sync.yml config file"),
        )
        .arg(
            Arg::new("readme")
                .short('r')
                .long("readme")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("README file to sync (overrides the config)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print diffs and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Run a tool with the process's command line arguments
pub fn run(tool: Tool) -> Result<(), ReadmeSyncError> {
    run_from(tool, env::args_os())
}

/// Run a tool with explicit arguments (the first one is the program name)
pub fn run_from<I, T>(tool: Tool, args: I) -> Result<(), ReadmeSyncError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command(tool).get_matches_from(args);
    let cwd = env::current_dir()?;

    App::from_matches(tool, &matches, &cwd)?.run()
}
