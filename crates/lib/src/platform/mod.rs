//! Host platform detection.
//!
//! The build only cares about two things here: which OS family we are on
//! (it drives script flavors, compiler probes and CMake arguments) and the
//! vcpkg triplet derived from OS and architecture.

pub mod arch;
pub mod os;
pub mod paths;

use std::fmt;

use arch::Arch;
use os::Os;
use serde::Serialize;

use crate::error::BuildError;

/// Platform identifier combining architecture and OS (e.g., "x86_64-linux")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Platform {
  pub arch: Arch,
  pub os: Os,
}

impl Platform {
  /// Create a new platform identifier
  pub fn new(arch: Arch, os: Os) -> Self {
    Self { arch, os }
  }

  /// Detect the current platform at runtime
  ///
  /// Returns `None` if the OS or architecture is not supported
  pub fn current() -> Option<Self> {
    Some(Self {
      arch: Arch::current()?,
      os: Os::current()?,
    })
  }

  /// Like [`Platform::current`], but reports the raw host names on failure.
  pub fn detect() -> Result<Self, BuildError> {
    Self::current().ok_or_else(|| BuildError::UnsupportedPlatform {
      os: std::env::consts::OS.to_string(),
      arch: std::env::consts::ARCH.to_string(),
    })
  }

  /// Returns the platform triple string (e.g., "aarch64-darwin")
  pub fn triple(&self) -> String {
    format!("{}-{}", self.arch, self.os)
  }

  /// Returns the vcpkg triplet (e.g., "x64-linux", "arm64-osx")
  pub fn triplet(&self) -> String {
    format!("{}-{}", self.arch.vcpkg_name(), self.os.vcpkg_name())
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.os.display_name(), self.arch)
  }
}

/// Number of parallel jobs to hand to the native build tool.
pub fn default_jobs() -> usize {
  std::thread::available_parallelism()
    .map(|n| n.get())
    .unwrap_or(crate::consts::FALLBACK_JOBS)
}
