//! Build and setup command integration tests.

use predicates::prelude::*;

use super::common::{FAKE_REVISION, TestEnv, interrupt, is_executable};

#[test]
fn full_build_runs_steps_in_order() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("BUILD SUMMARY"));

  let install = env.logged("vcpkg install --triplet").expect("vcpkg install ran");
  let zmusic = env
    .logged("git clone https://github.com/coelckers/ZMusic.git")
    .expect("zmusic cloned");
  let configure = env.logged("-DARCHIPELAGO_INTEGRATION=ON").expect("project configured");
  let compile = env
    .log_lines()
    .iter()
    .rposition(|line| line.contains("cmake --build"))
    .expect("project compiled");

  assert!(install < zmusic, "dependencies before library");
  assert!(zmusic < configure, "library before configure");
  assert!(configure < compile, "configure before compile");
}

#[test]
fn full_build_writes_pinned_manifest() {
  let env = TestEnv::new();

  env.build_cmd().arg("build").assert().success();

  let manifest: serde_json::Value = serde_json::from_str(&env.read("vcpkg.json")).unwrap();
  assert_eq!(manifest["builtin-baseline"], FAKE_REVISION);
  let registry: serde_json::Value = serde_json::from_str(&env.read("vcpkg-configuration.json")).unwrap();
  assert_eq!(registry["registries"][0]["kind"], "git");
  assert!(env.exists("libraries/zmusic/build"));
}

#[test]
fn classic_mode_installs_each_package() {
  let env = TestEnv::new();

  env.build_cmd().args(["--deps", "classic", "setup"]).assert().success();

  assert!(env.logged("vcpkg install zlib:").is_some());
  assert!(env.logged("vcpkg install mpg123:").is_some());
  assert!(!env.exists("vcpkg.json"));
}

#[test]
fn setup_does_not_compile() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .args(["setup", "--quick"])
    .assert()
    .success()
    .stdout(predicate::str::contains("setup complete"));

  assert!(env.logged("-DARCHIPELAGO_INTEGRATION=ON").is_some());
  assert!(env.logged("cmake --build").is_none());
}

#[test]
fn quick_skips_dependency_fetch() {
  let env = TestEnv::new();

  env.build_cmd().arg("--quick").assert().success();

  assert!(env.logged("git clone").is_none());
  assert!(env.logged("vcpkg").is_none());
  assert!(env.logged("git --version").is_some(), "checks still run");
}

#[test]
fn generated_files_are_emitted() {
  let env = TestEnv::new();

  env.build_cmd().args(["setup", "--quick"]).assert().success();

  assert!(env.read("archipelago.cfg").contains("[connection]"));
  let script = env.path("launch_selaco.sh");
  assert!(is_executable(&script));
  assert!(!env.exists("launch_selaco.bat"));
  let root = std::fs::canonicalize(&env.root).unwrap();
  let content = env.read("launch_selaco.sh");
  assert!(content.contains(&format!("export SELACO_CONFIG_PATH=\"{}\"", root.display())));
}

#[test]
fn config_file_is_identical_across_runs() {
  let env = TestEnv::new();

  env.build_cmd().args(["setup", "--quick"]).assert().success();
  let first = std::fs::read(env.path("archipelago.cfg")).unwrap();

  env.build_cmd().args(["setup", "--quick", "--clean"]).assert().success();
  let second = std::fs::read(env.path("archipelago.cfg")).unwrap();

  assert_eq!(first, second);
}

#[test]
fn clean_removes_previous_build_dir() {
  let env = TestEnv::new();
  std::fs::create_dir_all(env.path("build")).unwrap();
  std::fs::write(env.path("build/CMakeCache.txt"), "stale").unwrap();

  env.build_cmd().args(["setup", "--quick"]).assert().success();
  assert!(env.exists("build/CMakeCache.txt"), "kept without --clean");

  env.build_cmd().args(["setup", "--quick", "--clean"]).assert().success();
  assert!(env.exists("build"));
  assert!(!env.exists("build/CMakeCache.txt"));
}

#[test]
fn existing_manifest_survives_rerun_unless_clean() {
  let env = TestEnv::new();
  std::fs::write(env.path("vcpkg.json"), "{\"name\":\"hand-edited\"}").unwrap();

  env.build_cmd().arg("setup").assert().success();
  assert_eq!(env.read("vcpkg.json"), "{\"name\":\"hand-edited\"}");

  env.build_cmd().args(["setup", "--clean"]).assert().success();
  assert!(env.read("vcpkg.json").contains(FAKE_REVISION));
}

#[test]
fn missing_prerequisite_fails_and_is_named() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .env("SELACO_BUILD_CMAKE", env.missing_tool("cmake"))
    .assert()
    .code(1)
    .stderr(predicate::str::contains("missing-cmake"))
    .stdout(predicate::str::contains("Installation instructions"));

  assert!(!env.exists("archipelago.cfg"));
}

#[test]
fn every_prerequisite_is_checked() {
  for var in ["SELACO_BUILD_GIT", "SELACO_BUILD_CMAKE", "SELACO_BUILD_CC", "SELACO_BUILD_MAKE"] {
    let env = TestEnv::new();

    env
      .build_cmd()
      .env(var, env.missing_tool("tool"))
      .assert()
      .code(1)
      .stderr(predicate::str::contains("missing-tool"));
  }
}

#[test]
fn skip_checks_proceeds_with_missing_tool() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .args(["--skip-checks", "--quick"])
    .env("SELACO_BUILD_GIT", env.missing_tool("git"))
    .assert()
    .success();

  assert!(env.logged("--version").is_none());
  assert!(env.exists("archipelago.cfg"));
}

#[test]
fn failing_command_echoes_captured_output() {
  let env = TestEnv::new();
  env.fake_tool(
    "cmake",
    r#"case "$1" in --build) echo "compiler exploded" >&2; exit 2;; esac
exit 0"#,
  );

  env
    .build_cmd()
    .arg("--quick")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("command failed"))
    .stderr(predicate::str::contains("cmake --build"))
    .stderr(predicate::str::contains("STDERR: compiler exploded"));

  assert!(!env.exists("launch_selaco.sh"), "artifacts are not emitted after a failure");
}

#[test]
fn verbose_streams_output_instead_of_echoing() {
  let env = TestEnv::new();
  env.fake_tool(
    "cmake",
    r#"case "$1" in --build) echo "compiler exploded" >&2; exit 2;; esac
exit 0"#,
  );

  env
    .build_cmd()
    .args(["--quick", "--verbose"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("compiler exploded"))
    .stderr(predicate::str::contains("STDERR:").not());
}

#[test]
fn ctrl_c_during_compile_exits_with_failure() {
  let env = TestEnv::new();
  env.fake_tool(
    "cmake",
    r#"case "$1" in --build) exec sleep 30;; esac
exit 0"#,
  );

  let child = env.spawn(&["--quick"]);
  env.wait_for_log("cmake --build");
  interrupt(&child);
  let output = child.wait_with_output().unwrap();

  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("Interrupted by user"));
  assert!(!env.exists("launch_selaco.sh"));
  assert!(!env.exists("archipelago.cfg"));
}
