//! Resolution of the configured compiler executable.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::util::fs::is_executable;

/// Resolve the configured executable reference to a concrete path.
///
/// If a filesystem entry exists at `reference`, its absolute form is
/// returned. Otherwise the reference is returned unchanged and resolution is
/// deferred to the OS search path when the process is spawned.
pub fn resolve(reference: &str) -> PathBuf {
  let path = Path::new(reference);
  if path.exists() {
    let resolved = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    debug!(executable = %resolved.display(), "compiler executable found on disk");
    return resolved;
  }

  // Not on disk; assume it is reachable through PATH.
  PathBuf::from(reference)
}

/// Returns true if `path` points at an executable regular file.
///
/// Used for the skip-on-missing decision; a bare name that only resolves
/// through PATH reports false here.
pub fn exists_and_executable(path: &Path) -> bool {
  is_executable(path)
}
