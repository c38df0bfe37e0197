//! Command execution
//!
//! This module runs command strings through the context's interpreter and
//! captures what they print.

use crate::error::{ProcessError, ProcessResult};
use crate::runner::Context;
use std::process::{Command as StdCommand, Stdio};

/// Run `command` and return its stdout as text
///
/// Stdin is closed, stderr is captured so it can be reported if the
/// command fails. A non-zero exit status is an error.
pub fn capture_command(command: &str, ctx: &Context) -> ProcessResult<String> {
    capture_command_with_env(command, &[], ctx)
}

/// Like [`capture_command`], with extra environment variables for the child
pub fn capture_command_with_env(
    command: &str,
    env: &[(&str, &str)],
    ctx: &Context,
) -> ProcessResult<String> {
    if command.trim().is_empty() {
        return Err(ProcessError::EmptyCommand);
    }

    let (program, interpreter_args) = ctx
        .interpreter
        .split_first()
        .ok_or(ProcessError::EmptyCommand)?;

    ctx.print_debug(&format!("Running in {}: {}", ctx.working_dir.display(), command));

    let output = StdCommand::new(program)
        .args(interpreter_args)
        .arg(command)
        .current_dir(&ctx.working_dir)
        .envs(env.iter().copied())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| ProcessError::Spawn {
            command: command.to_string(),
            error: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(ProcessError::Failed {
            command: command.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| ProcessError::InvalidUtf8 {
        command: command.to_string(),
    })
}
