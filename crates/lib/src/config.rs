//! Declarative configuration for one compiler invocation.
//!
//! The configuration is immutable for the duration of an invocation. Callers
//! (typically the CLI) bind it from a TOML build descriptor via serde; the
//! core never parses descriptors itself.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::CompileError;

/// Configuration for a single installer-compiler run.
///
/// `variables` is a `BTreeMap` so that the rendered `-D` token is ordered by
/// key, which keeps repeated invocations of the same configuration
/// byte-identical.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CompileConfig {
  /// Path or bare name of the compiler executable. A bare name is resolved
  /// through the OS search path at spawn time.
  pub executable: String,

  /// The compiler's own project file, passed as the final argument.
  pub config_file: String,

  /// Overrides the release identifier declared in the project file.
  #[serde(default)]
  pub release_id: Option<String>,

  /// Compiler variables, rendered as a single `-D k=v,...` token.
  #[serde(default)]
  pub variables: BTreeMap<String, String>,

  /// Directory the compiler deposits generated installers into. It does not
  /// need to exist before the run.
  pub output_directory: PathBuf,

  /// Makes the compiler more talkative (`--verbose`).
  #[serde(default)]
  pub verbose: bool,

  /// Perform a test run only (`--test`).
  #[serde(default)]
  pub test_only: bool,

  /// Generate additional debug installers (`--debug`).
  #[serde(default)]
  pub debug: bool,

  /// Treat a missing compiler executable as a successful no-op instead of a
  /// launch failure.
  #[serde(default)]
  pub skip_on_missing_executable: bool,

  /// Whether to scan the output directory and register the produced
  /// installers after a successful run.
  #[serde(default = "default_attach")]
  pub attach: bool,
}

fn default_attach() -> bool {
  true
}

impl CompileConfig {
  /// Check the invariants the rest of the pipeline relies on.
  pub fn validate(&self) -> Result<(), CompileError> {
    if self.executable.trim().is_empty() {
      return Err(CompileError::InvalidConfig("executable must not be empty".to_string()));
    }
    if self.config_file.trim().is_empty() {
      return Err(CompileError::InvalidConfig("config-file must not be empty".to_string()));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn minimal() -> CompileConfig {
    CompileConfig {
      executable: "install4jc".to_string(),
      config_file: "app.install4j".to_string(),
      release_id: None,
      variables: BTreeMap::new(),
      output_directory: PathBuf::from("target/installers"),
      verbose: false,
      test_only: false,
      debug: false,
      skip_on_missing_executable: false,
      attach: true,
    }
  }

  #[test]
  fn minimal_config_is_valid() {
    assert!(minimal().validate().is_ok());
  }

  #[test]
  fn empty_executable_rejected() {
    let mut config = minimal();
    config.executable = "  ".to_string();
    assert!(matches!(config.validate(), Err(CompileError::InvalidConfig(_))));
  }

  #[test]
  fn empty_config_file_rejected() {
    let mut config = minimal();
    config.config_file = String::new();
    assert!(matches!(config.validate(), Err(CompileError::InvalidConfig(_))));
  }

  #[test]
  fn deserializes_from_toml_with_defaults() {
    let config: CompileConfig = toml::from_str(
      r#"
        executable = "install4jc"
        config-file = "app.install4j"
        output-directory = "out"
      "#,
    )
    .unwrap();

    assert_eq!(config.executable, "install4jc");
    assert_eq!(config.config_file, "app.install4j");
    assert_eq!(config.output_directory, PathBuf::from("out"));
    assert!(!config.verbose);
    assert!(!config.test_only);
    assert!(!config.debug);
    assert!(!config.skip_on_missing_executable);
    assert!(config.attach, "attach defaults to true");
    assert!(config.variables.is_empty());
    assert!(config.release_id.is_none());
  }

  #[test]
  fn deserializes_variables_table() {
    let config: CompileConfig = toml::from_str(
      r#"
        executable = "install4jc"
        config-file = "app.install4j"
        output-directory = "out"
        release-id = "2.0"
        attach = false

        [variables]
        edition = "pro"
        arch = "x64"
      "#,
    )
    .unwrap();

    assert_eq!(config.release_id.as_deref(), Some("2.0"));
    assert!(!config.attach);
    assert_eq!(config.variables.get("edition").map(String::as_str), Some("pro"));
    assert_eq!(config.variables.get("arch").map(String::as_str), Some("x64"));
  }

  #[test]
  fn unknown_keys_rejected() {
    let result: Result<CompileConfig, _> = toml::from_str(
      r#"
        executable = "install4jc"
        config-file = "app.install4j"
        output-directory = "out"
        no-such-option = true
      "#,
    );
    assert!(result.is_err());
  }
}
