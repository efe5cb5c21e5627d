//! Shared test helpers for CLI integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{self, Child, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Fake git. `clone` creates the destination with a bootstrap script that
/// in turn produces a fake `vcpkg`; `rev-parse` prints a fixed hash.
const FAKE_GIT: &str = r#"
case "$1" in
  clone)
    mkdir -p "$3"
    cat > "$3/bootstrap-vcpkg.sh" <<'EOS'
printf '#!/bin/sh\necho "vcpkg $*" >> "$SELACO_TEST_LOG"\n' > vcpkg
chmod +x vcpkg
EOS
    ;;
  rev-parse)
    echo "0123456789abcdef0123456789abcdef01234567"
    ;;
esac
exit 0
"#;

pub const FAKE_REVISION: &str = "0123456789abcdef0123456789abcdef01234567";

/// Isolated test environment.
///
/// Each test gets its own project root, a `bin` directory of fake tools and
/// a log file every fake appends its invocation to.
pub struct TestEnv {
  pub temp: TempDir,
  pub root: PathBuf,
  pub bin: PathBuf,
  pub log: PathBuf,
}

impl TestEnv {
  /// Create an environment where every required tool succeeds.
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("project");
    let bin = temp.path().join("bin");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&bin).unwrap();
    let log = temp.path().join("commands.log");

    let env = Self { temp, root, bin, log };
    env.fake_tool("git", FAKE_GIT);
    env.fake_tool("cmake", "exit 0");
    env.fake_tool("cc", "exit 0");
    env.fake_tool("make", "exit 0");
    env
  }

  /// Write an executable script named `name` that logs its arguments and
  /// then runs `body`.
  pub fn fake_tool(&self, name: &str, body: &str) -> PathBuf {
    let path = self.bin.join(name);
    let script = format!("#!/bin/sh\necho \"{name} $*\" >> \"$SELACO_TEST_LOG\"\n{body}\n");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
  }

  /// A path inside `bin` that does not exist.
  pub fn missing_tool(&self, name: &str) -> PathBuf {
    self.bin.join(format!("missing-{name}"))
  }

  /// Recorded invocations, one per line.
  pub fn log_lines(&self) -> Vec<String> {
    fs::read_to_string(&self.log)
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  /// Index of the first logged invocation containing `pattern`.
  pub fn logged(&self, pattern: &str) -> Option<usize> {
    self.log_lines().iter().position(|line| line.contains(pattern))
  }

  pub fn path(&self, relative: &str) -> PathBuf {
    self.root.join(relative)
  }

  pub fn read(&self, relative: &str) -> String {
    fs::read_to_string(self.path(relative)).unwrap()
  }

  pub fn exists(&self, relative: &str) -> bool {
    self.path(relative).exists()
  }

  /// Environment for isolated runs:
  /// - `SELACO_ROOT`: Isolated project root
  /// - `SELACO_BUILD_*`: Fake tools
  /// - `SELACO_TEST_LOG`: Invocation log read back by [`TestEnv::log_lines`]
  fn envs(&self) -> [(&'static str, PathBuf); 6] {
    [
      ("SELACO_ROOT", self.root.clone()),
      ("SELACO_TEST_LOG", self.log.clone()),
      ("SELACO_BUILD_GIT", self.bin.join("git")),
      ("SELACO_BUILD_CMAKE", self.bin.join("cmake")),
      ("SELACO_BUILD_CC", self.bin.join("cc")),
      ("SELACO_BUILD_MAKE", self.bin.join("make")),
    ]
  }

  /// Get a pre-configured Command for the selaco-build binary.
  pub fn build_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("selaco-build");
    cmd.env_remove("RUST_LOG");
    cmd.envs(self.envs());
    cmd
  }

  /// Start the binary in the background with piped output.
  pub fn spawn(&self, args: &[&str]) -> Child {
    process::Command::new(env!("CARGO_BIN_EXE_selaco-build"))
      .args(args)
      .env_remove("RUST_LOG")
      .envs(self.envs())
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()
      .unwrap()
  }

  /// Block until a logged invocation contains `pattern`.
  pub fn wait_for_log(&self, pattern: &str) {
    let deadline = Instant::now() + Duration::from_secs(20);
    while self.logged(pattern).is_none() {
      assert!(Instant::now() < deadline, "timed out waiting for '{pattern}' in the invocation log");
      thread::sleep(Duration::from_millis(50));
    }
  }
}

/// Send SIGINT to `child`, as Ctrl-C in a terminal would.
pub fn interrupt(child: &Child) {
  let status = process::Command::new("kill")
    .args(["-INT", &child.id().to_string()])
    .status()
    .unwrap();
  assert!(status.success());
}

pub fn is_executable(path: &Path) -> bool {
  fs::metadata(path).unwrap().permissions().mode() & 0o111 != 0
}
