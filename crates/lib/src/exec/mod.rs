//! External command execution.
//!
//! Everything the orchestrator does to the outside world goes through a
//! [`CommandRunner`]. [`run_checked`] turns a non-zero exit into
//! [`BuildError::CommandFailed`] carrying the command line.

mod runner;
mod types;

pub use runner::{CommandRunner, SystemRunner};
pub use types::{CommandOutput, CommandSpec, ExecError};

use tracing::info;

use crate::error::BuildError;

/// Run a command and fail unless it exits successfully.
pub async fn run_checked<R: CommandRunner>(runner: &R, spec: &CommandSpec) -> Result<CommandOutput, BuildError> {
  info!(cmd = %spec, "running");

  let output = runner.run(spec).await?;
  if !output.success {
    return Err(BuildError::CommandFailed {
      command: spec.command_line(),
      code: output.code,
      stdout: output.stdout,
      stderr: output.stderr,
    });
  }

  Ok(output)
}
