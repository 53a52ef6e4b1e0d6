//! Core data model for the edit timeline
//!
//! Pure data structures: operations, the snapshots they produce, and the
//! bounded history that orders them. Nothing here performs I/O.

pub mod history;
pub mod operation;
pub mod snapshot;
