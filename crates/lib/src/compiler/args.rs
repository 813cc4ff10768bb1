//! Rendering of a [`CompileConfig`] into the compiler's argument vector.
//!
//! The token order is a compatibility contract with the external compiler's
//! CLI parser, so it is fixed here rather than derived from field order.

use crate::config::CompileConfig;
use crate::util::fs::absolutize;

/// Build the ordered argument vector for one invocation.
///
/// Token order: `--verbose`, `--test`, `--debug`, `--release=`,
/// `--destination=`, the combined `-D` variables token, and finally the
/// project file. Each conditional token is omitted entirely when its trigger
/// is unset.
pub fn build_args(config: &CompileConfig) -> Vec<String> {
  let mut args = Vec::new();

  if config.verbose {
    args.push("--verbose".to_string());
  }
  if config.test_only {
    args.push("--test".to_string());
  }
  if config.debug {
    args.push("--debug".to_string());
  }
  if let Some(release) = config.release_id.as_deref() {
    let release = release.trim();
    if !release.is_empty() {
      args.push(format!("--release={release}"));
    }
  }

  // The compiler's own parser expects the destination value wrapped in
  // literal double quotes.
  let destination = absolutize(&config.output_directory);
  args.push(format!("--destination=\"{}\"", destination.display()));

  if !config.variables.is_empty() {
    args.push(render_variables(config));
  }

  args.push(config.config_file.clone());
  args
}

/// Render the compiler variables as a single `-D k=v,...` token.
///
/// `variables` is a `BTreeMap`, so the pairs come out sorted by key and the
/// token is stable across runs of the same configuration.
fn render_variables(config: &CompileConfig) -> String {
  let pairs: Vec<String> = config
    .variables
    .iter()
    .map(|(key, value)| format!("{key}={value}"))
    .collect();
  format!("-D {}", pairs.join(","))
}
