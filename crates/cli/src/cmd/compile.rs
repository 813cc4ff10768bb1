//! Implementation of the `instc compile` command.
//!
//! Loads the build descriptor, runs the full invocation pipeline, and prints
//! a summary of the installers that were attached.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use instc_lib::artifact::MemoryRegistry;
use instc_lib::compiler::{StderrSink, StdoutSink, compile};
use tracing::info;

use crate::output::{self, OutputFormat, format_duration, symbols};

/// Execute the compile command.
///
/// The global `--verbose` flag is ORed into the descriptor's own verbose
/// setting before the run.
pub fn cmd_compile(descriptor: &Path, verbose: bool, format: OutputFormat) -> Result<()> {
  let mut config = super::load_descriptor(descriptor)?;
  config.verbose = config.verbose || verbose;
  info!(descriptor = %descriptor.display(), "compiling installers");

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

  let started = Instant::now();
  let mut registry = MemoryRegistry::new();
  let outcome = rt
    .block_on(compile(&config, &StdoutSink, &StderrSink, &mut registry))
    .context("Installer compilation failed")?;
  let elapsed = started.elapsed();

  if format.is_json() {
    return output::print_json(&serde_json::json!({
      "skipped": outcome.skipped,
      "artifacts": outcome.artifacts,
    }));
  }

  if outcome.skipped {
    output::print_warning("Compiler executable not found, compilation skipped");
    return Ok(());
  }

  output::print_success(&format!("Compilation complete in {}", format_duration(elapsed)));
  if config.attach {
    output::print_stat("Artifacts attached", &outcome.artifacts.len().to_string());
    for artifact in &outcome.artifacts {
      let kind = if artifact.kind.is_empty() { "-" } else { artifact.kind.as_str() };
      println!(
        "  {} {} ({}, {})",
        symbols::ARROW,
        artifact.path.display(),
        artifact.classifier,
        kind
      );
    }
  }

  Ok(())
}
