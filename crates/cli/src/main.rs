use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use output::OutputFormat;

/// instc - drives an installer compiler from a declarative build descriptor
#[derive(Parser)]
#[command(name = "instc")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Ask the installer compiler for verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Compile installers from a build descriptor
  Compile {
    /// Path to the build descriptor (default: instc.toml)
    #[arg(default_value = "instc.toml")]
    descriptor: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },

  /// Show the command line a compile would run, without running it
  Plan {
    /// Path to the build descriptor (default: instc.toml)
    #[arg(default_value = "instc.toml")]
    descriptor: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },
}

fn main() -> Result<()> {
  // Logs (including forwarded compiler output) go to stderr so JSON output
  // on stdout stays machine-readable.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Compile { descriptor, format } => cmd::cmd_compile(&descriptor, cli.verbose, format),
    Commands::Plan { descriptor, format } => cmd::cmd_plan(&descriptor, cli.verbose, format),
  }
}
