//! Implementation of the `instc plan` command.
//!
//! Dry-run: shows the resolved executable and the exact argument vector a
//! compile would use, without spawning anything.

use std::path::Path;

use anyhow::Result;
use instc_lib::compiler::{args, resolver};

use crate::output::{self, OutputFormat};

/// Execute the plan command.
pub fn cmd_plan(descriptor: &Path, verbose: bool, format: OutputFormat) -> Result<()> {
  let mut config = super::load_descriptor(descriptor)?;
  config.verbose = config.verbose || verbose;
  config.validate()?;

  let executable = resolver::resolve(&config.executable);
  let argv = args::build_args(&config);

  if format.is_json() {
    return output::print_json(&serde_json::json!({
      "executable": executable,
      "args": argv,
    }));
  }

  output::print_info("Would run:");
  println!("  {}", executable.display());
  for arg in &argv {
    println!("    {arg}");
  }

  Ok(())
}
