//! Filesystem predicates and path normalization.

use std::path::{Path, PathBuf};

/// Returns true if `path` is a regular file the current process may execute.
///
/// Missing entries and directories are a normal `false`, never an error.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
  use std::os::unix::fs::PermissionsExt;

  match path.metadata() {
    Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
    Err(_) => false,
  }
}

/// Windows has no executable bit; fall back to the conventional
/// installer/executable extensions.
#[cfg(windows)]
pub fn is_executable(path: &Path) -> bool {
  const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "bat", "cmd", "com", "msi"];

  if !path.is_file() {
    return false;
  }
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| EXECUTABLE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// Absolute form of `path` against the current working directory.
///
/// Unlike canonicalization this does not require the path to exist, so it is
/// safe for output directories the compiler has not created yet. Falls back
/// to the path unchanged if the working directory is unavailable.
pub fn absolutize(path: &Path) -> PathBuf {
  std::path::absolute(path)
    .map(|p| dunce::simplified(&p).to_path_buf())
    .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn absolutize_keeps_absolute_paths() {
    #[cfg(unix)]
    let path = Path::new("/opt/install4j/bin/install4jc");
    #[cfg(windows)]
    let path = Path::new(r"C:\install4j\bin\install4jc.exe");

    assert_eq!(absolutize(path), path.to_path_buf());
  }

  #[test]
  fn absolutize_anchors_relative_paths() {
    let abs = absolutize(Path::new("target/installers"));
    assert!(abs.is_absolute());
    assert!(abs.ends_with("target/installers"));
  }

  #[test]
  fn is_executable_false_for_missing_entry() {
    assert!(!is_executable(Path::new("/nonexistent/tool")));
  }

  #[test]
  fn is_executable_false_for_directory() {
    let temp = tempfile::TempDir::new().unwrap();
    assert!(!is_executable(temp.path()));
  }

  #[cfg(unix)]
  #[test]
  fn is_executable_tracks_the_permission_bit() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::TempDir::new().unwrap();
    let file = temp.path().join("tool");
    std::fs::write(&file, "#!/bin/sh\n").unwrap();

    std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o644)).unwrap();
    assert!(!is_executable(&file));

    std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o755)).unwrap();
    assert!(is_executable(&file));
  }
}
