//! Test utilities for selaco-build-lib.
//!
//! Cross-platform shell helpers plus [`RecordingRunner`], a fake
//! [`CommandRunner`] that records every invocation instead of spawning it.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::config::{BuildConfig, BuildOptions, Tools};
use crate::exec::{CommandOutput, CommandRunner, CommandSpec, ExecError};
use crate::platform::Platform;
use crate::platform::arch::Arch;
use crate::platform::os::Os;

/// Returns the shell command and args to execute a shell script.
#[cfg(unix)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("/bin/sh", vec!["-c".to_string(), script.to_string()])
}

#[cfg(windows)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("cmd.exe", vec!["/C".to_string(), script.to_string()])
}

/// Build a config for `os` rooted at `root` without touching the host.
pub fn test_config(root: &Path, os: Os, options: BuildOptions) -> BuildConfig {
  let platform = Platform::new(Arch::X86_64, os);
  BuildConfig::with_platform(&options, platform, root.to_path_buf(), Tools::for_os(os), 8)
}

/// Create the files a bootstrapped vcpkg checkout would contain.
pub fn fake_vcpkg_checkout(config: &BuildConfig) {
  let os = config.os();
  std::fs::create_dir_all(&config.layout.vcpkg_dir).unwrap();
  std::fs::write(config.layout.bootstrap_script(os), "").unwrap();
  std::fs::write(config.layout.vcpkg_exe(os), "").unwrap();
}

/// Records commands instead of running them.
///
/// Responses are keyed by a run of whole words in the rendered command line
/// (see [`matches_words`]); the first matching rule wins. Unmatched commands succeed with no output.
/// `git clone <url> <dest>` creates `<dest>` so existence checks behave as
/// they would after a real clone.
#[derive(Debug, Default)]
pub struct RecordingRunner {
  calls: RefCell<Vec<CommandSpec>>,
  missing: Vec<String>,
  failing: Vec<String>,
  stdout: Vec<(String, String)>,
}

impl RecordingRunner {
  pub fn new() -> Self {
    Self::default()
  }

  /// Spawning `program` fails with [`ExecError::NotFound`].
  pub fn missing(mut self, program: &str) -> Self {
    self.missing.push(program.to_string());
    self
  }

  /// Commands containing `pattern` exit with status 1.
  pub fn fail_on(mut self, pattern: &str) -> Self {
    self.failing.push(pattern.to_string());
    self
  }

  /// Commands containing `pattern` print `stdout`.
  pub fn stdout_for(mut self, pattern: &str, stdout: &str) -> Self {
    self.stdout.push((pattern.to_string(), stdout.to_string()));
    self
  }

  pub fn calls(&self) -> Vec<CommandSpec> {
    self.calls.borrow().clone()
  }

  pub fn command_lines(&self) -> Vec<String> {
    self.calls.borrow().iter().map(CommandSpec::command_line).collect()
  }

  /// Index of the first recorded command containing `pattern`.
  pub fn position(&self, pattern: &str) -> Option<usize> {
    self.command_lines().iter().position(|line| matches_words(line, pattern))
  }
}

/// Whether `pattern` occurs in `line` starting and ending on word
/// boundaries. A word starts after a space or `/` and ends before a space,
/// so `make --version` matches `/usr/bin/make --version` but not
/// `cmake --version`.
pub fn matches_words(line: &str, pattern: &str) -> bool {
  line.match_indices(pattern).any(|(start, _)| {
    let end = start + pattern.len();
    let starts_word = line[..start].chars().next_back().is_none_or(|c| c == ' ' || c == '/');
    let ends_word = line[end..].chars().next().is_none_or(|c| c == ' ');
    starts_word && ends_word
  })
}

impl CommandRunner for RecordingRunner {
  async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ExecError> {
    self.calls.borrow_mut().push(spec.clone());

    if self.missing.iter().any(|program| *program == spec.program) {
      return Err(ExecError::NotFound {
        program: spec.program.clone(),
      });
    }

    let line = spec.command_line();
    if self.failing.iter().any(|pattern| matches_words(&line, pattern)) {
      let mut output = CommandOutput::failed(1);
      if spec.capture {
        output.stderr = format!("{line}: simulated failure\n");
      }
      return Ok(output);
    }

    if spec.args.first().map(String::as_str) == Some("clone") {
      if let Some(dest) = spec.args.last() {
        std::fs::create_dir_all(PathBuf::from(dest)).map_err(|source| ExecError::Spawn {
          program: spec.program.clone(),
          source,
        })?;
      }
    }

    let mut output = CommandOutput::ok();
    if let Some((_, stdout)) = self.stdout.iter().find(|(pattern, _)| matches_words(&line, pattern)) {
      output.stdout = stdout.clone();
    }
    Ok(output)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn patterns_match_whole_words_only() {
    assert!(matches_words("make --version", "make --version"));
    assert!(matches_words("/usr/bin/make --version", "make --version"));
    assert!(!matches_words("cmake --version", "make --version"));
    assert!(!matches_words("clang --version", "cl"));
    assert!(matches_words("cl", "cl"));
    assert!(!matches_words("vcpkg install bzip2:x64-linux", "install bzip2"));
    assert!(matches_words("git clone https://github.com/coelckers/ZMusic.git /w/z", "ZMusic.git"));
  }

  #[tokio::test]
  async fn failing_rule_does_not_leak_into_similar_programs() {
    let runner = RecordingRunner::new().fail_on("make --version");

    let cmake = runner.run(&CommandSpec::new("cmake").arg("--version")).await.unwrap();
    let make = runner.run(&CommandSpec::new("make").arg("--version")).await.unwrap();

    assert!(cmake.success);
    assert!(!make.success);
  }
}
