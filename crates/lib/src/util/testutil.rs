//! Test utilities for instc-lib.
//!
//! Cross-platform helpers for tests that need a stub "compiler" executable
//! with controllable output, exit code, and side effects.

use std::path::{Path, PathBuf};

/// Write an executable stub tool into `dir` that runs the given script body.
///
/// On Unix this is a `/bin/sh` script; on Windows a batch file. Returns the
/// path of the created tool.
#[cfg(unix)]
pub fn write_stub_tool(dir: &Path, name: &str, script: &str) -> PathBuf {
  use std::os::unix::fs::PermissionsExt;

  let path = dir.join(name);
  std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
  std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
  path
}

#[cfg(windows)]
pub fn write_stub_tool(dir: &Path, name: &str, script: &str) -> PathBuf {
  let path = dir.join(format!("{name}.bat"));
  std::fs::write(&path, format!("@echo off\r\n{script}\r\n")).unwrap();
  path
}

/// Create an empty file, with the executable bit set on Unix when `executable`.
pub fn touch(path: &Path, executable: bool) {
  std::fs::write(path, b"").unwrap();

  #[cfg(unix)]
  if executable {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
  }

  #[cfg(windows)]
  let _ = executable;
}
