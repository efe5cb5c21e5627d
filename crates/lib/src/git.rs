//! Git checkouts of external sources.
//!
//! Shells out to the configured `git` so checkouts use the user's
//! credentials and proxy setup.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::exec::{CommandRunner, CommandSpec, run_checked};

/// What [`clone_or_pull`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Checkout {
  Cloned,
  Updated,
}

/// Clone `url` into `dest`, or `git pull` if `dest` already exists.
pub async fn clone_or_pull<R: CommandRunner>(
  config: &BuildConfig,
  runner: &R,
  url: &str,
  dest: &Path,
) -> Result<Checkout, BuildError> {
  if dest.exists() {
    info!(path = %dest.display(), "already exists, updating");
    let spec = config.command(&config.tools.git, dest).arg("pull");
    run_checked(runner, &spec).await?;
    return Ok(Checkout::Updated);
  }

  if let Some(parent) = dest.parent() {
    fs::create_dir_all(parent).map_err(|source| BuildError::CreateDir {
      path: parent.to_path_buf(),
      source,
    })?;
  }

  info!(url, path = %dest.display(), "cloning");
  let spec = config
    .command(&config.tools.git, config.root())
    .args(["clone", url])
    .arg(dest.display().to_string());
  run_checked(runner, &spec).await?;
  Ok(Checkout::Cloned)
}

/// Commit hash currently checked out in `repo`, if git reports one.
///
/// Always captured, even in verbose mode, since the output is consumed.
pub async fn head_revision<R: CommandRunner>(
  config: &BuildConfig,
  runner: &R,
  repo: &Path,
) -> Result<Option<String>, BuildError> {
  let spec = CommandSpec::new(&config.tools.git)
    .args(["rev-parse", "HEAD"])
    .cwd(repo);
  let output = run_checked(runner, &spec).await?;

  let rev = output.stdout.trim();
  Ok((!rev.is_empty()).then(|| rev.to_string()))
}
