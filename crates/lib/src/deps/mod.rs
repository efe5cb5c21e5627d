//! Third-party package setup through vcpkg.
//!
//! Two modes are supported. Classic mode installs each package with its own
//! command. Manifest mode pins the vcpkg revision in generated
//! `vcpkg.json`/`vcpkg-configuration.json` files and installs from those.

pub mod manifest;
pub mod vcpkg;

use serde::Serialize;

use crate::config::{BuildConfig, DependencyMode};
use crate::error::BuildError;
use crate::exec::CommandRunner;
use crate::git::{Checkout, head_revision};

pub use manifest::{ManifestFiles, RegistryConfig, VcpkgManifest};

/// Outcome of [`setup_dependencies`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
  pub checkout: Checkout,
  pub mode: DependencyMode,
  /// `pkg:triplet` entries installed in classic mode.
  pub installed: Vec<String>,
  /// vcpkg revision captured in manifest mode.
  pub baseline: Option<String>,
  pub manifest_files: Option<ManifestFiles>,
}

/// Prepare vcpkg and install every dependency.
pub async fn setup_dependencies<R: CommandRunner>(
  config: &BuildConfig,
  runner: &R,
) -> Result<DependencyReport, BuildError> {
  let checkout = vcpkg::setup_vcpkg(config, runner).await?;

  match config.deps {
    DependencyMode::Classic => {
      let installed = vcpkg::install_classic(config, runner).await?;
      Ok(DependencyReport {
        checkout,
        mode: config.deps,
        installed,
        baseline: None,
        manifest_files: None,
      })
    }
    DependencyMode::Manifest => {
      let baseline = head_revision(config, runner, &config.layout.vcpkg_dir).await?;
      let files = manifest::prepare_manifest_files(config, baseline.clone())?;
      vcpkg::install_manifest(config, runner).await?;
      Ok(DependencyReport {
        checkout,
        mode: config.deps,
        installed: Vec::new(),
        baseline,
        manifest_files: Some(files),
      })
    }
  }
}
