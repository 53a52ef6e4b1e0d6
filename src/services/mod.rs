//! Process-level services used by the command-line driver
//!
//! Nothing in the editor core depends on these.

pub mod tracing_setup;
