mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use selaco_build_lib::{BuildOptions, BuildType, DependencyMode};

use crate::output::{OutputFormat, print_error, print_warning};

/// Build Selaco with Archipelago integration
#[derive(Parser)]
#[command(name = "selaco-build")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  selaco-build                                  # Default build (RelWithDebInfo)
  selaco-build --build-type Release --clean
  selaco-build setup --quick                    # Configure only, reuse fetched dependencies
  selaco-build check                            # Verify the toolchain")]
struct Cli {
  #[command(flatten)]
  build: BuildArgs,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
struct BuildArgs {
  /// CMake build type: Debug, Release or RelWithDebInfo
  #[arg(long, global = true, default_value_t = BuildType::RelWithDebInfo)]
  build_type: BuildType,

  /// Clean build directories (and generated vcpkg manifests) before building
  #[arg(long, global = true)]
  clean: bool,

  /// Stream tool output live and enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Skip dependency setup (use only if dependencies are already set up)
  #[arg(long, global = true)]
  quick: bool,

  /// Skip the prerequisite tool checks
  #[arg(long, global = true)]
  skip_checks: bool,

  /// How vcpkg packages are installed: classic or manifest
  #[arg(long, global = true, default_value_t = DependencyMode::Manifest)]
  deps: DependencyMode,

  /// Project root (defaults to $SELACO_ROOT, then the current directory)
  #[arg(long, global = true)]
  root: Option<PathBuf>,

  /// Parallel jobs for the native build tool (defaults to CPU count)
  #[arg(short, long, global = true)]
  jobs: Option<usize>,
}

impl BuildArgs {
  fn to_options(&self, compile: bool) -> BuildOptions {
    BuildOptions {
      build_type: self.build_type,
      clean: self.clean,
      verbose: self.verbose,
      quick: self.quick,
      skip_checks: self.skip_checks,
      compile,
      deps: self.deps,
      root: self.root.clone(),
      jobs: self.jobs,
    }
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Prepare dependencies, configure and compile (default)
  Build,

  /// Prepare dependencies and configure without compiling
  Setup,

  /// Check that the required tools are installed
  Check,

  /// Show detected platform and resolved paths
  Info {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.build.verbose);

  // Dropping the command future kills its running child (kill_on_drop).
  tokio::select! {
    biased;
    () = interrupted() => {
      debug!("ctrl-c received, dropping command");
      print_warning("Interrupted by user");
      ExitCode::FAILURE
    }
    result = run(cli) => match result {
      Ok(code) => code,
      Err(err) => {
        print_error(&format!("Unexpected error: {err:#}"));
        ExitCode::FAILURE
      }
    },
  }
}

/// Resolves on the first Ctrl-C. Never resolves if the handler cannot be
/// installed.
async fn interrupted() {
  if tokio::signal::ctrl_c().await.is_err() {
    std::future::pending::<()>().await;
  }
}

async fn run(cli: Cli) -> Result<ExitCode> {
  let args = &cli.build;
  match cli.command.unwrap_or(Commands::Build) {
    Commands::Build => cmd::cmd_build(&args.to_options(true)).await,
    Commands::Setup => cmd::cmd_build(&args.to_options(false)).await,
    Commands::Check => cmd::cmd_check(&args.to_options(false)).await,
    Commands::Info { output } => cmd::cmd_info(&args.to_options(false), output),
  }
}

fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .init();
}
