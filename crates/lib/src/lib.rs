//! instc-lib: Core pipeline for driving an installer compiler.
//!
//! This crate turns a declarative [`config::CompileConfig`] into one
//! invocation of an external installer-compiler executable:
//! - `compiler`: argument rendering, executable resolution, process execution
//! - `artifact`: discovery and registration of the installers the tool produced
//!
//! A single call to [`compiler::compile`] runs the whole pipeline.

pub mod artifact;
pub mod compiler;
pub mod config;
pub mod error;
pub mod util;

pub use compiler::{CompileOutcome, compile};
pub use config::CompileConfig;
pub use error::CompileError;
