//! `vcpkg.json` and `vcpkg-configuration.json` generation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::BuildConfig;
use crate::consts::{APP_NAME, DEPENDENCIES, VCPKG_REPO};
use crate::error::BuildError;

/// Contents of `vcpkg.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VcpkgManifest {
  pub name: String,
  pub version: String,
  pub description: String,
  pub dependencies: Vec<String>,
  #[serde(rename = "builtin-baseline", skip_serializing_if = "Option::is_none")]
  pub builtin_baseline: Option<String>,
}

impl VcpkgManifest {
  pub fn new(baseline: Option<String>) -> Self {
    Self {
      name: APP_NAME.to_string(),
      version: "1.0.0".to_string(),
      description: "Selaco with Archipelago multiworld integration".to_string(),
      dependencies: DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
      builtin_baseline: baseline,
    }
  }
}

/// Contents of `vcpkg-configuration.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryConfig {
  #[serde(rename = "default-triplet")]
  pub default_triplet: String,
  pub registries: Vec<Registry>,
}

/// A git-backed vcpkg registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registry {
  pub kind: String,
  pub repository: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub baseline: Option<String>,
  pub packages: Vec<String>,
}

impl RegistryConfig {
  pub fn new(triplet: String, baseline: Option<String>) -> Self {
    Self {
      default_triplet: triplet,
      registries: vec![Registry {
        kind: "git".to_string(),
        repository: VCPKG_REPO.to_string(),
        baseline,
        packages: DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
      }],
    }
  }
}

/// Which manifest files this run wrote and which it left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestFiles {
  pub written: Vec<PathBuf>,
  pub kept: Vec<PathBuf>,
}

/// Delete both manifest files so they are regenerated.
pub fn remove_manifest_files(config: &BuildConfig) -> Result<(), BuildError> {
  for path in [&config.layout.manifest_file, &config.layout.registry_config_file] {
    if path.exists() {
      info!(path = %path.display(), "removing");
      fs::remove_file(path).map_err(|source| BuildError::Remove {
        path: path.clone(),
        source,
      })?;
    }
  }
  Ok(())
}

/// Write the manifest and registry config, leaving existing files untouched.
///
/// With `clean` set both files are removed first, so they are always
/// rewritten.
pub fn prepare_manifest_files(config: &BuildConfig, baseline: Option<String>) -> Result<ManifestFiles, BuildError> {
  if config.clean {
    remove_manifest_files(config)?;
  }

  let mut files = ManifestFiles::default();

  let manifest = VcpkgManifest::new(baseline.clone());
  record(&mut files, &config.layout.manifest_file, write_json_if_absent(&config.layout.manifest_file, &manifest)?);

  let registry = RegistryConfig::new(config.triplet(), baseline);
  record(
    &mut files,
    &config.layout.registry_config_file,
    write_json_if_absent(&config.layout.registry_config_file, &registry)?,
  );

  Ok(files)
}

fn record(files: &mut ManifestFiles, path: &Path, written: bool) {
  if written {
    files.written.push(path.to_path_buf());
  } else {
    files.kept.push(path.to_path_buf());
  }
}

/// Returns whether the file was written.
fn write_json_if_absent<T: Serialize>(path: &Path, value: &T) -> Result<bool, BuildError> {
  if path.exists() {
    info!(path = %path.display(), "exists, keeping");
    return Ok(false);
  }

  let mut content = serde_json::to_string_pretty(value).map_err(|source| BuildError::Serialize {
    path: path.to_path_buf(),
    source,
  })?;
  content.push('\n');

  fs::write(path, content).map_err(|source| BuildError::WriteFile {
    path: path.to_path_buf(),
    source,
  })?;
  info!(path = %path.display(), "generated");
  Ok(true)
}
