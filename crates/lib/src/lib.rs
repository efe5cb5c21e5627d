//! selaco-build-lib: build orchestration for Selaco with Archipelago support
//!
//! The crate drives external tools (git, vcpkg, CMake) through a fixed
//! sequence of steps:
//! - `prereq`: verify the toolchain is installed
//! - `deps`: bootstrap vcpkg and install third-party packages
//! - `library`: fetch and build ZMusic
//! - `cmake`: configure and optionally compile the engine
//! - `artifacts`: emit `archipelago.cfg` and a launch script
//!
//! [`pipeline::run`] ties them together for one immutable [`config::BuildConfig`].

pub mod artifacts;
pub mod cmake;
pub mod config;
pub mod consts;
pub mod deps;
pub mod error;
pub mod exec;
pub mod git;
pub mod library;
pub mod pipeline;
pub mod platform;
pub mod prereq;
pub mod util;

pub use config::{BuildConfig, BuildOptions, BuildType, DependencyMode};
pub use error::BuildError;
pub use pipeline::{BuildReport, Step};
