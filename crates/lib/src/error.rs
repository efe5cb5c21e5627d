//! Error type shared by every orchestration step.

use std::path::PathBuf;

use thiserror::Error;

use crate::exec::ExecError;

/// Errors that abort a build run.
///
/// None of these are retried; the whole run is meant to be repeated once the
/// cause is fixed.
#[derive(Debug, Error)]
pub enum BuildError {
  /// One or more required tools could not be found.
  #[error("missing required tools: {}", tools.join(", "))]
  MissingTools { tools: Vec<String> },

  /// An external command exited unsuccessfully.
  ///
  /// `stdout` and `stderr` are only populated when output was captured.
  #[error("command failed with exit code {code:?}: {command}")]
  CommandFailed {
    command: String,
    code: Option<i32>,
    stdout: String,
    stderr: String,
  },

  /// An external command could not be started at all.
  #[error(transparent)]
  Exec(#[from] ExecError),

  #[error("vcpkg bootstrap script not found: {}", .0.display())]
  BootstrapMissing(PathBuf),

  #[error("vcpkg executable not found: {}", .0.display())]
  VcpkgMissing(PathBuf),

  #[error("unsupported platform: {os} ({arch})")]
  UnsupportedPlatform { os: String, arch: String },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to remove {}: {source}", path.display())]
  Remove { path: PathBuf, source: std::io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },

  #[error("failed to serialize {}: {source}", path.display())]
  Serialize { path: PathBuf, source: serde_json::Error },

  #[error("io error at {}: {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },
}
