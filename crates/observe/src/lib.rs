//! Logging initialisation shared by the binaries and the test suites.
pub mod tracing;
