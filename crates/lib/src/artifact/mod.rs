//! Discovery and registration of the installers a compiler run produced.
//!
//! The scan is deliberately coarse: every executable regular file sitting
//! directly in the output directory is assumed to be a produced installer.
//! File headers, sizes, and contents are never inspected.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::util::fs::is_executable;

/// One installer discovered in the output directory.
///
/// `kind` is the file extension after the last dot (empty when there is
/// none) and `classifier` the file name with that extension removed, so
/// `app-win.exe` becomes `(kind: "exe", classifier: "app-win")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
  pub kind: String,
  pub classifier: String,
  pub path: PathBuf,
}

impl Artifact {
  /// Derive an artifact from a produced file path.
  pub fn from_path(path: PathBuf) -> Self {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let (classifier, kind) = match name.rsplit_once('.') {
      Some((stem, ext)) => (stem.to_string(), ext.to_string()),
      None => (name.to_string(), String::new()),
    };
    Artifact {
      kind,
      classifier,
      path,
    }
  }
}

/// The host build's artifact set.
///
/// Passed into [`attach`] explicitly so the pipeline never reaches for a
/// globally shared build context.
pub trait ArtifactRegistry {
  fn register(&mut self, kind: &str, classifier: &str, path: &Path);
}

/// In-memory registry keyed by classifier.
///
/// A later registration with the same classifier overwrites the earlier one;
/// the overwrite is logged so colliding installer names do not pass
/// unnoticed.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
  entries: std::collections::BTreeMap<String, Artifact>,
}

impl MemoryRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
    self.entries.values()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl ArtifactRegistry for MemoryRegistry {
  fn register(&mut self, kind: &str, classifier: &str, path: &Path) {
    let artifact = Artifact {
      kind: kind.to_string(),
      classifier: classifier.to_string(),
      path: path.to_path_buf(),
    };
    if let Some(previous) = self.entries.insert(classifier.to_string(), artifact) {
      warn!(
        classifier = %classifier,
        previous = %previous.path.display(),
        "duplicate artifact classifier, overwriting earlier registration"
      );
    }
  }
}

/// List the produced installers directly inside `output_dir`.
///
/// Non-recursive; a missing directory yields an empty list. Results are
/// sorted by path so registration order is deterministic.
pub fn scan(output_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
  let entries = match std::fs::read_dir(output_dir) {
    Ok(entries) => entries,
    Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
    Err(err) => return Err(err),
  };

  let mut found = Vec::new();
  for entry in entries {
    let path = entry?.path();
    if is_executable(&path) {
      found.push(path);
    }
  }
  found.sort();
  Ok(found)
}

/// Register every scanned file and return the derived artifacts.
pub fn attach(files: Vec<PathBuf>, registry: &mut dyn ArtifactRegistry) -> Vec<Artifact> {
  let mut artifacts = Vec::with_capacity(files.len());
  for path in files {
    let artifact = Artifact::from_path(path);
    info!(
      kind = %artifact.kind,
      classifier = %artifact.classifier,
      path = %artifact.path.display(),
      "attaching installer artifact"
    );
    registry.register(&artifact.kind, &artifact.classifier, &artifact.path);
    artifacts.push(artifact);
  }
  artifacts
}
