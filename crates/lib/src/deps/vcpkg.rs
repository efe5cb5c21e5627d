//! vcpkg checkout, bootstrap and package installation.

use tracing::info;

use crate::config::BuildConfig;
use crate::consts::{DEPENDENCIES, VCPKG_REPO};
use crate::error::BuildError;
use crate::exec::{CommandRunner, run_checked};
use crate::git::{Checkout, clone_or_pull};

/// Clone or update the vcpkg checkout and run its bootstrap script.
pub async fn setup_vcpkg<R: CommandRunner>(config: &BuildConfig, runner: &R) -> Result<Checkout, BuildError> {
  info!("setting up vcpkg");
  let layout = &config.layout;
  let os = config.os();

  let checkout = clone_or_pull(config, runner, VCPKG_REPO, &layout.vcpkg_dir).await?;

  let bootstrap = layout.bootstrap_script(os);
  if !bootstrap.exists() {
    return Err(BuildError::BootstrapMissing(bootstrap));
  }

  info!("bootstrapping vcpkg");
  let spec = if os.is_windows() {
    config.command(bootstrap.display().to_string(), &layout.vcpkg_dir)
  } else {
    config
      .command("bash", &layout.vcpkg_dir)
      .arg(bootstrap.display().to_string())
  };
  run_checked(runner, &spec).await?;

  Ok(checkout)
}

/// Install every dependency with its own `vcpkg install <pkg>:<triplet>`.
pub async fn install_classic<R: CommandRunner>(config: &BuildConfig, runner: &R) -> Result<Vec<String>, BuildError> {
  let vcpkg = vcpkg_exe(config)?;
  let triplet = config.triplet();

  let mut installed = Vec::with_capacity(DEPENDENCIES.len());
  for dep in DEPENDENCIES {
    let package = format!("{dep}:{triplet}");
    info!(package = %package, "installing");
    let spec = config
      .command(&vcpkg, &config.layout.vcpkg_dir)
      .args(["install", package.as_str()]);
    run_checked(runner, &spec).await?;
    installed.push(package);
  }

  Ok(installed)
}

/// Install from the `vcpkg.json` manifest at the project root.
pub async fn install_manifest<R: CommandRunner>(config: &BuildConfig, runner: &R) -> Result<(), BuildError> {
  let vcpkg = vcpkg_exe(config)?;
  let root = config.root();

  info!(triplet = %config.triplet(), "installing from manifest");
  let spec = config.command(&vcpkg, root).args([
    "install".to_string(),
    "--triplet".to_string(),
    config.triplet(),
    format!("--x-manifest-root={}", root.display()),
  ]);
  run_checked(runner, &spec).await?;
  Ok(())
}

fn vcpkg_exe(config: &BuildConfig) -> Result<String, BuildError> {
  let exe = config.layout.vcpkg_exe(config.os());
  if !exe.exists() {
    return Err(BuildError::VcpkgMissing(exe));
  }
  Ok(exe.display().to_string())
}
