//! Error types for the compiler invocation pipeline.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors that abort a compiler invocation.
///
/// Failure to start the compiler ([`CompileError::Launch`]) is deliberately
/// distinct from the compiler running and exiting unsuccessfully
/// ([`CompileError::CompilerFailed`]).
#[derive(Debug, Error)]
pub enum CompileError {
  /// The configuration violates an invariant the pipeline relies on.
  #[error("invalid configuration: {0}")]
  InvalidConfig(String),

  /// The compiler process could not be spawned at all.
  #[error("failed to launch compiler {executable}: {source}")]
  Launch {
    executable: String,
    #[source]
    source: std::io::Error,
  },

  /// The compiler ran but returned a non-success status.
  #[error("compiler exited unsuccessfully: {status}")]
  CompilerFailed { status: ExitStatus },

  /// I/O error while draining compiler output or scanning artifacts.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}
