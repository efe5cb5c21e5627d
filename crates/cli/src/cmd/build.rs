//! Implementation of the `selaco-build build` and `selaco-build setup` commands.
//!
//! Both run the same pipeline; `setup` stops after configuring.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::debug;

use selaco_build_lib::exec::SystemRunner;
use selaco_build_lib::prereq::install_hints;
use selaco_build_lib::{BuildConfig, BuildError, BuildOptions, BuildReport, pipeline};

use crate::output::{
  format_duration, print_entry, print_error, print_header, print_info, print_stat, print_success, short_revision,
};

/// Execute the build pipeline.
///
/// Returns a failing exit code (rather than an error) for anything the
/// pipeline reports, so the failure is printed once with its details.
pub async fn cmd_build(options: &BuildOptions) -> Result<ExitCode> {
  let start = Instant::now();
  let config = BuildConfig::resolve(options).context("Failed to resolve build configuration")?;
  debug!(?config, "resolved configuration");

  print_banner(&config);

  match pipeline::run(&config, &SystemRunner).await {
    Ok(report) => {
      print_summary(&config, &report, start.elapsed());
      Ok(ExitCode::SUCCESS)
    }
    Err(err) => {
      report_failure(&config, &err);
      Ok(ExitCode::FAILURE)
    }
  }
}

fn print_banner(config: &BuildConfig) {
  print_header("=== SELACO ARCHIPELAGO BUILD ===");
  print_info(&format!("Building on {}", config.platform));
  print_info(&format!("Build type: {}", config.build_type));
  print_info(&format!("Root directory: {}", config.root().display()));
  if config.quick {
    print_info("Quick mode: dependency setup will be skipped");
  }
  if config.skip_checks {
    print_info("Prerequisite checks disabled");
  }
}

fn report_failure(config: &BuildConfig, err: &BuildError) {
  print_error(&err.to_string());

  match err {
    BuildError::MissingTools { tools } => {
      for tool in tools {
        print_error(&format!("  - {tool}"));
      }
      print_header("Installation instructions:");
      for line in install_hints(config.os()) {
        println!("  {line}");
      }
    }
    BuildError::CommandFailed { stdout, stderr, .. } => {
      // Captured output is empty in verbose mode; it was already streamed.
      if !stdout.trim().is_empty() {
        print_error(&format!("STDOUT: {}", stdout.trim_end()));
      }
      if !stderr.trim().is_empty() {
        print_error(&format!("STDERR: {}", stderr.trim_end()));
      }
    }
    _ => {}
  }
}

fn print_summary(config: &BuildConfig, report: &BuildReport, elapsed: Duration) {
  print_header("=== BUILD SUMMARY ===");
  if config.compile {
    print_success("Selaco with Archipelago integration build complete!");
  } else {
    print_success("Selaco with Archipelago integration setup complete!");
  }

  print_header("Build Details:");
  print_stat("Build Type", config.build_type.as_str());
  print_stat("Platform", &config.platform.to_string());
  print_stat("Triplet", &config.triplet());
  print_stat("Build Directory", &config.layout.build_dir.display().to_string());
  if let Some(deps) = &report.dependencies {
    print_stat("Dependencies", deps.mode.as_str());
    if let Some(baseline) = &deps.baseline {
      print_stat("vcpkg Baseline", short_revision(baseline));
    }
  }
  print_stat("Elapsed", &format_duration(elapsed));

  print_header("Files Created:");
  print_stat("Configuration", &report.config_file.display().to_string());
  print_stat("Launch Script", &report.launch_script.display().to_string());

  print_header("Console Commands:");
  for (command, description) in [
    ("ap_connect <server> <port> <slot> [password]", "Connect to Archipelago server"),
    ("ap_status", "Show connection status"),
    ("ap_items", "List received items"),
    ("ap_chat <message>", "Send chat message"),
  ] {
    print_entry(command, description);
  }

  print_header("Next Steps:");
  if !config.compile {
    println!("  0. Run: selaco-build build --quick");
  }
  println!("  1. Edit archipelago.cfg with your server details");
  println!("  2. Run the launch script to start Selaco");
  println!("  3. Use console commands to connect to Archipelago");
  println!("  4. Join a multiworld game and enjoy!");
}
