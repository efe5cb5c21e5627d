//! Implementation of the `selaco-build check` command.

use std::process::ExitCode;

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use tracing::debug;

use selaco_build_lib::BuildConfig;
use selaco_build_lib::BuildOptions;
use selaco_build_lib::exec::SystemRunner;
use selaco_build_lib::prereq::{check_prerequisites, install_hints};

use crate::output::{print_error, print_header, print_item, print_success, print_warning, symbols};

/// Probe every required tool and print its status.
///
/// Exits with a failing code when a required tool is missing.
pub async fn cmd_check(options: &BuildOptions) -> Result<ExitCode> {
  let config = BuildConfig::resolve(options).context("Failed to resolve build configuration")?;
  let report = check_prerequisites(&config, &SystemRunner).await;
  debug!(tools = report.tools.len(), missing = report.missing().len(), "prerequisite check finished");

  for tool in &report.tools {
    match &tool.found {
      Some(program) => print_item(symbols::SUCCESS, AnsiColors::Green, program),
      None if tool.required => print_item(symbols::ERROR, AnsiColors::Red, &tool.requirement),
      None => print_item(
        symbols::WARNING,
        AnsiColors::Yellow,
        &format!("{} (optional)", tool.requirement),
      ),
    }
  }

  for tool in report.warnings() {
    print_warning(&format!("{tool} not found in PATH"));
  }

  let missing = report.missing();
  if missing.is_empty() {
    print_success("All prerequisites found");
    return Ok(ExitCode::SUCCESS);
  }

  print_error(&format!("Missing required tools: {}", missing.join(", ")));
  print_header("Installation instructions:");
  for line in install_hints(config.os()) {
    println!("  {line}");
  }
  Ok(ExitCode::FAILURE)
}
