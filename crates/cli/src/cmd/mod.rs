mod compile;
mod plan;

pub use compile::cmd_compile;
pub use plan::cmd_plan;

use std::path::Path;

use anyhow::{Context, Result};
use instc_lib::CompileConfig;

/// Load a TOML build descriptor into the compiler configuration.
fn load_descriptor(path: &Path) -> Result<CompileConfig> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read build descriptor {}", path.display()))?;
  let config: CompileConfig =
    toml::from_str(&raw).with_context(|| format!("Invalid build descriptor {}", path.display()))?;
  Ok(config)
}
