//! Spawning external commands.

use std::future::Future;
use std::io::ErrorKind;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use super::types::{CommandOutput, CommandSpec, ExecError};

/// Runs external commands on behalf of the orchestrator.
///
/// The orchestrator awaits every call before issuing the next one, so
/// implementations never see overlapping invocations.
pub trait CommandRunner {
  fn run(&self, spec: &CommandSpec) -> impl Future<Output = Result<CommandOutput, ExecError>>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ExecError> {
    let mut command = Command::new(&spec.program);
    command.args(&spec.args).kill_on_drop(true);
    if let Some(cwd) = &spec.cwd {
      command.current_dir(cwd);
    }

    debug!(cmd = %spec, cwd = ?spec.cwd, capture = spec.capture, "spawning process");

    let result = if spec.capture {
      command.stdin(Stdio::null());
      command.output().await.map(|output| CommandOutput {
        code: output.status.code(),
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
      })
    } else {
      command.status().await.map(|status| CommandOutput {
        code: status.code(),
        success: status.success(),
        ..CommandOutput::default()
      })
    };

    let output = result.map_err(|source| match source.kind() {
      ErrorKind::NotFound => ExecError::NotFound {
        program: spec.program.clone(),
      },
      _ => ExecError::Spawn {
        program: spec.program.clone(),
        source,
      },
    })?;

    debug!(cmd = %spec, code = ?output.code, "process exited");
    Ok(output)
  }
}
