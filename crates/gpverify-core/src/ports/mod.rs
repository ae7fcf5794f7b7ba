//! Port definitions (trait abstractions) for external systems.
//!
//! The verifier only ever needs one thing from the outside world: whether
//! a path resolves to something. Implementations live in [`crate::probe`];
//! tests supply their own.

pub mod file_probe;

pub use file_probe::{FileKind, FileProbe, FileStatus};
