//! Process execution with live line-oriented output forwarding.
//!
//! The compiler is a hard external-process boundary: it is always spawned as
//! a subprocess, and both of its output streams are drained concurrently
//! while it runs so a full OS pipe buffer can never deadlock the build.

use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::sync::Mutex;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::error::CompileError;

/// A line-oriented sink for one output stream of the compiler.
///
/// Lines arrive in the order they were read on that stream; no ordering is
/// guaranteed between the stdout and stderr sinks.
pub trait LineSink: Send + Sync {
  fn accept(&self, line: &str);
}

/// Forwards compiler stdout at `info` level through the tracing stack.
pub struct StdoutSink;

impl LineSink for StdoutSink {
  fn accept(&self, line: &str) {
    info!(target: "instc::compiler", "{line}");
  }
}

/// Forwards compiler stderr at `warn` level through the tracing stack.
pub struct StderrSink;

impl LineSink for StderrSink {
  fn accept(&self, line: &str) {
    warn!(target: "instc::compiler", "{line}");
  }
}

/// Collects lines in memory, for callers that want to inspect the compiler's
/// output after the run instead of forwarding it live.
#[derive(Default)]
pub struct MemorySink {
  lines: Mutex<Vec<String>>,
}

impl MemorySink {
  pub fn new() -> Self {
    Self::default()
  }

  /// Drain the collected lines, leaving the sink empty.
  pub fn take(&self) -> Vec<String> {
    std::mem::take(&mut self.lines.lock().expect("sink lock poisoned"))
  }
}

impl LineSink for MemorySink {
  fn accept(&self, line: &str) {
    self.lines.lock().expect("sink lock poisoned").push(line.to_string());
  }
}

/// Spawn the compiler and block until it exits and both streams are drained.
///
/// A spawn failure is reported as [`CompileError::Launch`]; a non-zero exit
/// is not an error at this layer and comes back as a plain [`ExitStatus`]
/// for the orchestrator to judge. There is no timeout or cancellation: the
/// process runs to natural completion.
pub async fn run(
  executable: &Path,
  args: &[String],
  stdout_sink: &dyn LineSink,
  stderr_sink: &dyn LineSink,
) -> Result<ExitStatus, CompileError> {
  debug!(executable = %executable.display(), ?args, "spawning compiler");

  let mut child = Command::new(executable)
    .args(args)
    .stdin(Stdio::null())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .map_err(|source| CompileError::Launch {
      executable: executable.display().to_string(),
      source,
    })?;

  let stdout = child
    .stdout
    .take()
    .ok_or_else(|| std::io::Error::other("child stdout was not captured"))?;
  let stderr = child
    .stderr
    .take()
    .ok_or_else(|| std::io::Error::other("child stderr was not captured"))?;

  // The two drains and the wait run concurrently; joining them guarantees no
  // trailing output is lost before the status is inspected.
  let (status, out_drained, err_drained) = tokio::join!(
    child.wait(),
    drain_lines(stdout, stdout_sink),
    drain_lines(stderr, stderr_sink),
  );

  out_drained?;
  err_drained?;
  Ok(status?)
}

/// Forward every complete line from `reader` to `sink`, in stream order.
async fn drain_lines<R>(reader: R, sink: &dyn LineSink) -> std::io::Result<()>
where
  R: AsyncRead + Unpin,
{
  let mut lines = BufReader::new(reader).lines();
  while let Some(line) = lines.next_line().await? {
    sink.accept(&line);
  }
  Ok(())
}
