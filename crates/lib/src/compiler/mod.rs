//! Orchestration of one compiler invocation.
//!
//! The flow is strictly linear: validate, resolve the executable, optionally
//! skip, render arguments, run the process, enforce the exit status, then
//! scan and attach the produced installers. The only internal concurrency is
//! the runner's pair of stream drains.

pub mod args;
pub mod resolver;
pub mod runner;

use tracing::{info, warn};

use crate::artifact::{self, Artifact, ArtifactRegistry};
use crate::config::CompileConfig;
use crate::error::CompileError;

pub use runner::{LineSink, MemorySink, StderrSink, StdoutSink};

/// Outcome of a successful pipeline run.
#[derive(Debug, Default)]
pub struct CompileOutcome {
  /// True when the run was skipped because the executable is missing and
  /// skipping is configured. No process was spawned, nothing was scanned.
  pub skipped: bool,

  /// Installers attached after the run; empty when `attach` is disabled or
  /// the run was skipped.
  pub artifacts: Vec<Artifact>,
}

/// Run the whole invocation pipeline for `config`.
///
/// Fatal conditions (launch failure, non-zero exit, I/O failure while
/// scanning) abort immediately; output already forwarded to the sinks is
/// preserved. Nothing is retried.
pub async fn compile(
  config: &CompileConfig,
  stdout_sink: &dyn LineSink,
  stderr_sink: &dyn LineSink,
  registry: &mut dyn ArtifactRegistry,
) -> Result<CompileOutcome, CompileError> {
  config.validate()?;

  let executable = resolver::resolve(&config.executable);

  if config.skip_on_missing_executable && !resolver::exists_and_executable(&executable) {
    info!(executable = %config.executable, "compiler not found, skipping installer compilation");
    return Ok(CompileOutcome {
      skipped: true,
      artifacts: Vec::new(),
    });
  }

  let args = args::build_args(config);
  info!(executable = %executable.display(), args = ?args, "running installer compiler");

  let status = runner::run(&executable, &args, stdout_sink, stderr_sink).await?;
  if !status.success() {
    return Err(CompileError::CompilerFailed { status });
  }

  let artifacts = if config.attach {
    let found = artifact::scan(&config.output_directory)?;
    if found.is_empty() {
      warn!(
        output_directory = %config.output_directory.display(),
        "compiler run succeeded but produced no installers to attach"
      );
    }
    artifact::attach(found, registry)
  } else {
    Vec::new()
  };

  Ok(CompileOutcome {
    skipped: false,
    artifacts,
  })
}
