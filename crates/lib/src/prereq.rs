//! Prerequisite tool detection.
//!
//! Each requirement is probed by running the tool with `--version` (MSVC's
//! `cl` is run bare). A tool counts as present when it exits successfully;
//! `cl` counts as present whenever it can be spawned, because it exits
//! non-zero without input files.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::exec::{CommandRunner, CommandSpec, ExecError};
use crate::platform::os::Os;

/// Probe result for one requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolStatus {
  /// What was required, e.g. `cmake` or `gcc or clang`.
  pub requirement: String,
  /// The program that satisfied it, if any.
  pub found: Option<String>,
  /// Absence of an optional tool only produces a warning.
  pub required: bool,
}

impl ToolStatus {
  pub fn is_present(&self) -> bool {
    self.found.is_some()
  }
}

/// Result of probing every requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrereqReport {
  pub tools: Vec<ToolStatus>,
}

impl PrereqReport {
  /// Required tools that were not found.
  pub fn missing(&self) -> Vec<String> {
    self
      .tools
      .iter()
      .filter(|t| t.required && !t.is_present())
      .map(|t| t.requirement.clone())
      .collect()
  }

  /// Optional tools that were not found.
  pub fn warnings(&self) -> Vec<String> {
    self
      .tools
      .iter()
      .filter(|t| !t.required && !t.is_present())
      .map(|t| t.requirement.clone())
      .collect()
  }

  pub fn is_satisfied(&self) -> bool {
    self.missing().is_empty()
  }

  /// Convert into an error listing every missing tool.
  pub fn ensure_satisfied(&self) -> Result<(), BuildError> {
    let tools = self.missing();
    if tools.is_empty() {
      Ok(())
    } else {
      Err(BuildError::MissingTools { tools })
    }
  }
}

/// Probe every tool the build needs.
///
/// Never fails: absent tools are recorded in the report.
pub async fn check_prerequisites<R: CommandRunner>(config: &BuildConfig, runner: &R) -> PrereqReport {
  info!("checking prerequisites");

  let tools = &config.tools;
  let mut report = PrereqReport::default();

  report.tools.push(probe_any(runner, std::slice::from_ref(&tools.cmake)).await);
  report.tools.push(probe_any(runner, std::slice::from_ref(&tools.git)).await);

  if config.os().is_windows() && tools.compilers == ["cl"] {
    // cl without input files exits non-zero; spawning it is enough.
    let found = match runner.run(&CommandSpec::new("cl")).await {
      Ok(_) => Some("cl".to_string()),
      Err(_) => None,
    };
    report.tools.push(ToolStatus {
      requirement: "cl".to_string(),
      found,
      required: false,
    });
  } else {
    report.tools.push(probe_any(runner, &tools.compilers).await);
  }

  report.tools.push(probe_any(runner, &tools.drivers).await);

  for status in &report.tools {
    match &status.found {
      Some(program) => info!(tool = %program, "found"),
      None if status.required => warn!(tool = %status.requirement, "missing"),
      None => warn!(tool = %status.requirement, "not found in PATH"),
    }
  }

  report
}

/// Probe required alternatives in order and stop at the first one present.
async fn probe_any<R: CommandRunner>(runner: &R, programs: &[String]) -> ToolStatus {
  let mut found = None;
  for program in programs {
    if probe(runner, program).await {
      found = Some(program.clone());
      break;
    }
  }

  ToolStatus {
    requirement: programs.join(" or "),
    found,
    required: true,
  }
}

async fn probe<R: CommandRunner>(runner: &R, program: &str) -> bool {
  let spec = CommandSpec::new(program).arg("--version");
  match runner.run(&spec).await {
    Ok(output) => {
      debug!(program, code = ?output.code, "probed");
      output.success
    }
    Err(ExecError::NotFound { .. }) => {
      debug!(program, "not found");
      false
    }
    Err(err) => {
      debug!(program, error = %err, "probe failed");
      false
    }
  }
}

/// How to install the prerequisites on `os`.
pub fn install_hints(os: Os) -> &'static [&'static str] {
  match os {
    Os::Windows => &[
      "Windows:",
      "  - Install Visual Studio 2019 or 2022 with C++ development tools",
      "  - Or install Visual Studio Build Tools",
      "  - Install Git from https://git-scm.com/",
      "  - Install CMake from https://cmake.org/download/",
      "  - Run from a Visual Studio Developer Command Prompt so cl is on PATH",
    ],
    Os::Linux => &[
      "Linux (Ubuntu/Debian):",
      "  sudo apt update",
      "  sudo apt install build-essential cmake git pkg-config",
      "  sudo apt install libasound2-dev libpulse-dev",
      "Linux (CentOS/RHEL):",
      "  sudo yum groupinstall 'Development Tools'",
      "  sudo yum install cmake git",
    ],
    Os::MacOs => &["macOS:", "  xcode-select --install", "  brew install cmake git"],
  }
}
