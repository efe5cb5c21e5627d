use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;

use selaco_build_lib::platform::Platform;
use selaco_build_lib::{BuildConfig, BuildOptions};

use crate::output::{OutputFormat, print_json, print_stat};

#[derive(Serialize)]
struct Info<'a> {
  version: &'static str,
  platform: Platform,
  host: String,
  triplet: String,
  jobs: usize,
  root: &'a PathBuf,
  build_dir: &'a PathBuf,
  vcpkg_dir: &'a PathBuf,
  zmusic_dir: &'a PathBuf,
}

pub fn cmd_info(options: &BuildOptions, output: OutputFormat) -> Result<ExitCode> {
  let config = BuildConfig::resolve(options).context("Failed to resolve build configuration")?;
  let layout = &config.layout;

  let info = Info {
    version: env!("CARGO_PKG_VERSION"),
    platform: config.platform,
    host: config.platform.triple(),
    triplet: config.triplet(),
    jobs: config.jobs,
    root: &layout.root,
    build_dir: &layout.build_dir,
    vcpkg_dir: &layout.vcpkg_dir,
    zmusic_dir: &layout.zmusic_dir,
  };

  if output.is_json() {
    print_json(&info)?;
    return Ok(ExitCode::SUCCESS);
  }

  println!("System:");
  print_stat("Platform", &info.platform.to_string());
  print_stat("Host", &info.host);
  print_stat("Triplet", &info.triplet);
  print_stat("Jobs", &info.jobs.to_string());
  println!("Paths:");
  print_stat("Root", &info.root.display().to_string());
  print_stat("Build", &info.build_dir.display().to_string());
  print_stat("vcpkg", &info.vcpkg_dir.display().to_string());
  print_stat("ZMusic", &info.zmusic_dir.display().to_string());
  Ok(ExitCode::SUCCESS)
}
