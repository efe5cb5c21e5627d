//! Types describing external command invocations.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single external command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
  pub program: String,
  pub args: Vec<String>,
  /// Working directory; inherits the current directory when `None`.
  pub cwd: Option<PathBuf>,
  /// Capture stdout/stderr instead of streaming them to the terminal.
  pub capture: bool,
}

impl CommandSpec {
  pub fn new(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      cwd: None,
      capture: true,
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
    self.cwd = Some(dir.into());
    self
  }

  pub fn capture(mut self, capture: bool) -> Self {
    self.capture = capture;
    self
  }

  /// The command line as a user would type it, for logs and error messages.
  pub fn command_line(&self) -> String {
    std::iter::once(self.program.as_str())
      .chain(self.args.iter().map(String::as_str))
      .collect::<Vec<_>>()
      .join(" ")
  }
}

impl fmt::Display for CommandSpec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.command_line())
  }
}

/// What a finished command reported back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
  pub code: Option<i32>,
  pub success: bool,
  /// Empty unless the command was captured.
  pub stdout: String,
  pub stderr: String,
}

impl CommandOutput {
  pub fn ok() -> Self {
    Self {
      code: Some(0),
      success: true,
      ..Self::default()
    }
  }

  pub fn failed(code: i32) -> Self {
    Self {
      code: Some(code),
      success: false,
      ..Self::default()
    }
  }
}

/// Errors raised before a command ever produced an exit status.
#[derive(Debug, Error)]
pub enum ExecError {
  /// The program does not exist on PATH (or at the given path).
  #[error("program not found: {program}")]
  NotFound { program: String },

  /// Any other spawn failure (permissions, bad working directory, ...).
  #[error("failed to spawn {program}: {source}")]
  Spawn {
    program: String,
    #[source]
    source: std::io::Error,
  },
}
