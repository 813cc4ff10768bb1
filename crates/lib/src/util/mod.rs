//! Small filesystem and test helpers shared across the crate.

pub mod fs;

// Stub-tool helpers for this crate's tests and for downstream integration
// tests that opt in via the `testutil` feature; not part of release builds.
#[cfg(any(test, feature = "testutil"))]
pub mod testutil;
