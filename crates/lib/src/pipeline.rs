//! The build orchestrator.
//!
//! One forward pass over the steps below, in order. The first failure ends
//! the run; nothing is retried.
//!
//! 1. prerequisite check (unless `skip_checks`)
//! 2. vcpkg setup and dependency install (unless `quick`)
//! 3. ZMusic setup (unless `quick`)
//! 4. CMake configure
//! 5. CMake build (only when `compile`)
//! 6. configuration file and launch script

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::artifacts::{write_config_file, write_launch_script};
use crate::cmake::{ConfigureReport, compile_project, configure_project};
use crate::config::BuildConfig;
use crate::deps::{DependencyReport, setup_dependencies};
use crate::error::BuildError;
use crate::exec::CommandRunner;
use crate::library::{Library, setup_library};
use crate::prereq::{PrereqReport, check_prerequisites};

/// A pipeline step, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
  Prerequisites,
  Dependencies,
  Library,
  Configure,
  Compile,
  Artifacts,
}

/// Everything a successful run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
  /// Steps that ran, in order.
  pub completed: Vec<Step>,
  pub prerequisites: Option<PrereqReport>,
  pub dependencies: Option<DependencyReport>,
  pub configure: ConfigureReport,
  pub config_file: PathBuf,
  pub launch_script: PathBuf,
}

/// Run the whole pipeline for `config`.
pub async fn run<R: CommandRunner>(config: &BuildConfig, runner: &R) -> Result<BuildReport, BuildError> {
  let mut completed = Vec::new();

  let prerequisites = if config.skip_checks {
    info!("skipping prerequisite checks");
    None
  } else {
    let report = check_prerequisites(config, runner).await;
    report.ensure_satisfied()?;
    completed.push(Step::Prerequisites);
    Some(report)
  };

  let dependencies = if config.quick {
    info!("quick mode: skipping dependency setup");
    None
  } else {
    let report = setup_dependencies(config, runner).await?;
    completed.push(Step::Dependencies);

    setup_library(config, runner, &Library::zmusic(config)).await?;
    completed.push(Step::Library);
    Some(report)
  };

  let configure = configure_project(config, runner).await?;
  completed.push(Step::Configure);

  if config.compile {
    compile_project(config, runner).await?;
    completed.push(Step::Compile);
  }

  let config_file = write_config_file(config)?;
  let launch_script = write_launch_script(config)?;
  completed.push(Step::Artifacts);

  info!(steps = completed.len(), "pipeline finished");
  Ok(BuildReport {
    completed,
    prerequisites,
    dependencies,
    configure,
    config_file,
    launch_script,
  })
}
