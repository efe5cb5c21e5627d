//! Build configuration.
//!
//! [`BuildOptions`] is what the user asked for; [`BuildConfig`] is the
//! resolved, immutable value every step receives. Nothing mutates a config
//! once it has been resolved.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::consts::{CC_ENV, CMAKE_ENV, GIT_ENV, MAKE_ENV};
use crate::error::BuildError;
use crate::exec::CommandSpec;
use crate::platform::os::Os;
use crate::platform::paths::{Layout, resolve_root};
use crate::platform::{Platform, default_jobs};

/// CMake build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BuildType {
  Debug,
  Release,
  #[default]
  RelWithDebInfo,
}

impl BuildType {
  pub const ALL: [BuildType; 3] = [BuildType::Debug, BuildType::Release, BuildType::RelWithDebInfo];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Debug => "Debug",
      Self::Release => "Release",
      Self::RelWithDebInfo => "RelWithDebInfo",
    }
  }
}

impl fmt::Display for BuildType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Error)]
#[error("unknown build type '{0}' (expected Debug, Release or RelWithDebInfo)")]
pub struct ParseBuildTypeError(String);

impl FromStr for BuildType {
  type Err = ParseBuildTypeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|t| t.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| ParseBuildTypeError(s.to_string()))
  }
}

/// How vcpkg packages get installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyMode {
  /// One `vcpkg install <pkg>:<triplet>` per package.
  Classic,
  /// Generate `vcpkg.json` and install from it.
  #[default]
  Manifest,
}

impl DependencyMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Classic => "classic",
      Self::Manifest => "manifest",
    }
  }
}

impl fmt::Display for DependencyMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Error)]
#[error("unknown dependency mode '{0}' (expected classic or manifest)")]
pub struct ParseDependencyModeError(String);

impl FromStr for DependencyMode {
  type Err = ParseDependencyModeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "classic" => Ok(Self::Classic),
      "manifest" => Ok(Self::Manifest),
      _ => Err(ParseDependencyModeError(s.to_string())),
    }
  }
}

/// External programs the build shells out to.
///
/// `compilers` and `drivers` are alternatives: one present entry satisfies
/// the requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tools {
  pub git: String,
  pub cmake: String,
  pub compilers: Vec<String>,
  pub drivers: Vec<String>,
}

impl Tools {
  /// Default program names for `os`.
  pub fn for_os(os: Os) -> Self {
    let compilers = if os.is_windows() {
      vec!["cl".to_string()]
    } else {
      vec!["gcc".to_string(), "clang".to_string()]
    };

    Self {
      git: "git".to_string(),
      cmake: "cmake".to_string(),
      compilers,
      drivers: vec!["make".to_string(), "ninja".to_string()],
    }
  }

  /// Defaults for `os` with `SELACO_BUILD_*` overrides applied.
  pub fn from_env(os: Os) -> Self {
    let mut tools = Self::for_os(os);
    if let Some(git) = env_override(GIT_ENV) {
      tools.git = git;
    }
    if let Some(cmake) = env_override(CMAKE_ENV) {
      tools.cmake = cmake;
    }
    if let Some(cc) = env_override(CC_ENV) {
      tools.compilers = vec![cc];
    }
    if let Some(make) = env_override(MAKE_ENV) {
      tools.drivers = vec![make];
    }
    tools
  }
}

fn env_override(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Options as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
  pub build_type: BuildType,
  pub clean: bool,
  pub verbose: bool,
  /// Skip the dependency fetch phase (vcpkg and ZMusic).
  pub quick: bool,
  /// Skip prerequisite verification.
  pub skip_checks: bool,
  /// Run the compile step after configuring.
  pub compile: bool,
  pub deps: DependencyMode,
  pub root: Option<PathBuf>,
  pub jobs: Option<usize>,
}

/// Fully resolved configuration, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
  pub build_type: BuildType,
  pub clean: bool,
  pub verbose: bool,
  pub quick: bool,
  pub skip_checks: bool,
  pub compile: bool,
  pub deps: DependencyMode,
  pub platform: Platform,
  pub jobs: usize,
  pub layout: Layout,
  pub tools: Tools,
}

impl BuildConfig {
  /// Resolve options against the host: platform, root directory, tool
  /// overrides and CPU count.
  pub fn resolve(options: &BuildOptions) -> Result<Self, BuildError> {
    let platform = Platform::detect()?;
    let root = resolve_root(options.root.as_deref())?;
    let tools = Tools::from_env(platform.os);
    Ok(Self::with_platform(options, platform, root, tools, default_jobs()))
  }

  /// Build a config from already-known host facts.
  pub fn with_platform(
    options: &BuildOptions,
    platform: Platform,
    root: PathBuf,
    tools: Tools,
    detected_jobs: usize,
  ) -> Self {
    Self {
      build_type: options.build_type,
      clean: options.clean,
      verbose: options.verbose,
      quick: options.quick,
      skip_checks: options.skip_checks,
      compile: options.compile,
      deps: options.deps,
      platform,
      jobs: options.jobs.unwrap_or(detected_jobs).max(1),
      layout: Layout::new(root),
      tools,
    }
  }

  pub fn os(&self) -> Os {
    self.platform.os
  }

  pub fn root(&self) -> &Path {
    &self.layout.root
  }

  pub fn triplet(&self) -> String {
    self.platform.triplet()
  }

  /// A command for `program` running in `cwd`, streamed live in verbose
  /// mode and captured otherwise.
  pub fn command(&self, program: impl Into<String>, cwd: &Path) -> CommandSpec {
    CommandSpec::new(program).cwd(cwd).capture(!self.verbose)
  }
}
