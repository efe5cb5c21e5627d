//! Generated files: the Archipelago configuration and the launch script.
//!
//! Both are rewritten from scratch on every run.

mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{BuildConfig, BuildType};
use crate::error::BuildError;
use crate::platform::os::Os;

pub use templates::{CONFIG_TEMPLATE, LAUNCH_BAT_TEMPLATE, LAUNCH_SH_TEMPLATE};

/// Write `archipelago.cfg`.
pub fn write_config_file(config: &BuildConfig) -> Result<PathBuf, BuildError> {
  let path = config.layout.config_file.clone();
  write_file(&path, CONFIG_TEMPLATE)?;
  info!(path = %path.display(), "configuration file created");
  Ok(path)
}

/// Render the launch script flavor for `os`.
pub fn render_launch_script(os: Os, root: &Path, build_type: BuildType) -> String {
  let template = if os.is_windows() {
    LAUNCH_BAT_TEMPLATE
  } else {
    LAUNCH_SH_TEMPLATE
  };

  // {root} last, so a root path containing a placeholder stays literal.
  let script = template
    .replace("{build_type}", build_type.as_str())
    .replace("{root}", &root.display().to_string());

  if os.is_windows() {
    script.replace('\n', "\r\n")
  } else {
    script
  }
}

/// Write the launch script for the configured platform and make it
/// executable where that applies.
pub fn write_launch_script(config: &BuildConfig) -> Result<PathBuf, BuildError> {
  let os = config.os();
  let path = config.layout.launch_script(os);
  let script = render_launch_script(os, config.root(), config.build_type);
  write_file(&path, &script)?;

  if !os.is_windows() {
    mark_executable(&path)?;
  }

  info!(path = %path.display(), "launch script created");
  Ok(path)
}

fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
  fs::write(path, content).map_err(|source| BuildError::WriteFile {
    path: path.to_path_buf(),
    source,
  })
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<(), BuildError> {
  use std::os::unix::fs::PermissionsExt;

  fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| BuildError::Io {
    path: path.to_path_buf(),
    source,
  })
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<(), BuildError> {
  Ok(())
}
