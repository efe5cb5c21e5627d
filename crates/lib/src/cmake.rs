//! CMake configure and build invocations.
//!
//! Argument lists are built by pure functions so they can be checked
//! without running anything.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::BuildConfig;
use crate::consts::FEATURE_FLAG;
use crate::error::BuildError;
use crate::exec::{CommandRunner, run_checked};

/// Outcome of [`configure_project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigureReport {
  pub toolchain: bool,
  pub zmusic: bool,
}

/// Arguments for configuring the engine from inside the build directory.
pub fn project_configure_args(config: &BuildConfig) -> Vec<String> {
  let layout = &config.layout;
  let mut args = vec![
    "..".to_string(),
    format!("-DCMAKE_BUILD_TYPE={}", config.build_type),
    FEATURE_FLAG.to_string(),
  ];

  let toolchain = layout.vcpkg_toolchain();
  if toolchain.exists() {
    args.push(format!("-DCMAKE_TOOLCHAIN_FILE={}", toolchain.display()));
  }

  args.extend(platform_args(config));

  if layout.zmusic_dir.exists() {
    args.push(format!("-DZMUSIC_ROOT={}", layout.zmusic_dir.display()));
  }

  args
}

/// Arguments for configuring a third-party library against vcpkg.
pub fn library_configure_args(config: &BuildConfig) -> Vec<String> {
  let mut args = vec![
    "..".to_string(),
    format!("-DCMAKE_BUILD_TYPE={}", config.build_type),
    format!("-DCMAKE_TOOLCHAIN_FILE={}", config.layout.vcpkg_toolchain().display()),
  ];
  args.extend(platform_args(config));
  args
}

/// Arguments for `cmake --build` in the current build directory.
///
/// Visual Studio generators parallelize on their own; everywhere else the
/// job count is forwarded to the underlying driver.
pub fn build_args(config: &BuildConfig) -> Vec<String> {
  let mut args = vec![
    "--build".to_string(),
    ".".to_string(),
    "--config".to_string(),
    config.build_type.to_string(),
  ];
  if !config.os().is_windows() {
    args.push("--".to_string());
    args.push(format!("-j{}", config.jobs));
  }
  args
}

fn platform_args(config: &BuildConfig) -> Vec<String> {
  if config.os().is_windows() {
    vec!["-A".to_string(), config.platform.arch.msvc_platform().to_string()]
  } else {
    Vec::new()
  }
}

/// Make sure `dir` exists, wiping it first when `clean` is set.
pub fn prepare_build_dir(dir: &Path, clean: bool) -> Result<(), BuildError> {
  if clean && dir.exists() {
    info!(path = %dir.display(), "cleaning build directory");
    fs::remove_dir_all(dir).map_err(|source| BuildError::Remove {
      path: dir.to_path_buf(),
      source,
    })?;
  }

  fs::create_dir_all(dir).map_err(|source| BuildError::CreateDir {
    path: dir.to_path_buf(),
    source,
  })
}

/// Run the CMake configure step for the engine.
pub async fn configure_project<R: CommandRunner>(
  config: &BuildConfig,
  runner: &R,
) -> Result<ConfigureReport, BuildError> {
  info!("configuring CMake");
  let layout = &config.layout;
  prepare_build_dir(&layout.build_dir, config.clean)?;

  let report = ConfigureReport {
    toolchain: layout.vcpkg_toolchain().exists(),
    zmusic: layout.zmusic_dir.exists(),
  };
  if !report.toolchain && !config.quick {
    warn!("vcpkg toolchain not found, dependencies may not be available");
  }

  let spec = config
    .command(&config.tools.cmake, &layout.build_dir)
    .args(project_configure_args(config));
  run_checked(runner, &spec).await?;

  Ok(report)
}

/// Run `cmake --build` for the engine.
pub async fn compile_project<R: CommandRunner>(config: &BuildConfig, runner: &R) -> Result<(), BuildError> {
  info!(build_type = %config.build_type, jobs = config.jobs, "building");
  let spec = config
    .command(&config.tools.cmake, &config.layout.build_dir)
    .args(build_args(config));
  run_checked(runner, &spec).await?;
  Ok(())
}
