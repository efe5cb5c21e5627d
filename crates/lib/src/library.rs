//! Third-party libraries built from source (currently ZMusic).

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::cmake::{build_args, library_configure_args, prepare_build_dir};
use crate::config::BuildConfig;
use crate::consts::ZMUSIC_REPO;
use crate::error::BuildError;
use crate::exec::{CommandRunner, run_checked};
use crate::git::{Checkout, clone_or_pull};

/// A library fetched with git and built with CMake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Library {
  pub name: &'static str,
  pub url: &'static str,
  pub dir: PathBuf,
}

impl Library {
  /// ZMusic, the music/sound-font library the engine links against.
  pub fn zmusic(config: &BuildConfig) -> Self {
    Self {
      name: "ZMusic",
      url: ZMUSIC_REPO,
      dir: config.layout.zmusic_dir.clone(),
    }
  }

  pub fn build_dir(&self) -> PathBuf {
    self.dir.join("build")
  }
}

/// Fetch `library` and build it.
pub async fn setup_library<R: CommandRunner>(
  config: &BuildConfig,
  runner: &R,
  library: &Library,
) -> Result<Checkout, BuildError> {
  info!(library = library.name, "setting up");

  let checkout = clone_or_pull(config, runner, library.url, &library.dir).await?;

  let build_dir = library.build_dir();
  prepare_build_dir(&build_dir, config.clean)?;

  let configure = config
    .command(&config.tools.cmake, &build_dir)
    .args(library_configure_args(config));
  run_checked(runner, &configure).await?;

  let build = config
    .command(&config.tools.cmake, &build_dir)
    .args(build_args(config));
  run_checked(runner, &build).await?;

  info!(library = library.name, "setup complete");
  Ok(checkout)
}
