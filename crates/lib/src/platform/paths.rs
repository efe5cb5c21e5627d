//! Where things live relative to the project root.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::consts::{
  BUILD_DIR, CONFIG_FILE, LAUNCH_SCRIPT_UNIX, LAUNCH_SCRIPT_WINDOWS, LIBRARIES_DIR, MANIFEST_FILE, REGISTRY_CONFIG_FILE,
  ROOT_ENV, VCPKG_DIR, VCPKG_TOOLCHAIN, ZMUSIC_DIR,
};
use crate::error::BuildError;
use crate::platform::os::Os;

/// Resolve the project root.
///
/// Precedence: the explicit path, then `SELACO_ROOT`, then the current
/// directory. The result is canonicalized with `dunce` so Windows paths
/// handed to CMake never carry a verbatim `\\?\` prefix.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf, BuildError> {
  let root = match explicit {
    Some(path) => path.to_path_buf(),
    None => match std::env::var(ROOT_ENV) {
      Ok(value) if !value.is_empty() => PathBuf::from(value),
      _ => std::env::current_dir().map_err(|source| BuildError::Io {
        path: PathBuf::from("."),
        source,
      })?,
    },
  };

  dunce::canonicalize(&root).map_err(|source| BuildError::Io { path: root, source })
}

/// Fixed directory and file layout under the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
  pub root: PathBuf,
  pub build_dir: PathBuf,
  pub vcpkg_dir: PathBuf,
  pub zmusic_dir: PathBuf,
  pub config_file: PathBuf,
  pub manifest_file: PathBuf,
  pub registry_config_file: PathBuf,
}

impl Layout {
  pub fn new(root: PathBuf) -> Self {
    Self {
      build_dir: root.join(BUILD_DIR),
      vcpkg_dir: root.join(VCPKG_DIR),
      zmusic_dir: root.join(LIBRARIES_DIR).join(ZMUSIC_DIR),
      config_file: root.join(CONFIG_FILE),
      manifest_file: root.join(MANIFEST_FILE),
      registry_config_file: root.join(REGISTRY_CONFIG_FILE),
      root,
    }
  }

  /// The launch script matching `os`. Exactly one flavor exists per platform.
  pub fn launch_script(&self, os: Os) -> PathBuf {
    let name = if os.is_windows() {
      LAUNCH_SCRIPT_WINDOWS
    } else {
      LAUNCH_SCRIPT_UNIX
    };
    self.root.join(name)
  }

  pub fn vcpkg_toolchain(&self) -> PathBuf {
    VCPKG_TOOLCHAIN
      .iter()
      .fold(self.vcpkg_dir.clone(), |path, part| path.join(part))
  }

  pub fn vcpkg_exe(&self, os: Os) -> PathBuf {
    self.vcpkg_dir.join(format!("vcpkg{}", os.exe_suffix()))
  }

  pub fn bootstrap_script(&self, os: Os) -> PathBuf {
    let name = if os.is_windows() {
      "bootstrap-vcpkg.bat"
    } else {
      "bootstrap-vcpkg.sh"
    };
    self.vcpkg_dir.join(name)
  }
}
