//! File probe port for existence checks.
//!
//! # Design Notes
//!
//! - Core owns the trait and status types (pure)
//! - `HostFileProbe` owns the `std::fs` implementation
//! - The CLI injects the probe into the verifier

use std::path::Path;

use serde::Serialize;

/// What kind of entry a path resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    File,
    Directory,
    Other,
}

/// Observed state of a single path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// The path resolves to an existing entry.
    Present { kind: FileKind },
    /// Nothing exists at the path (including dangling symlinks).
    Missing,
    /// The path could not be inspected (permission denied, I/O error).
    Unreadable { reason: String },
}

impl FileStatus {
    /// Whether this status satisfies an existence check.
    pub const fn exists(&self) -> bool {
        matches!(self, Self::Present { .. })
    }
}

/// Port for probing the filesystem.
///
/// Implementations must be side-effect free: probing the same path twice
/// with no filesystem change returns the same status.
pub trait FileProbe: Send + Sync {
    /// Inspect `path` without reading its contents.
    fn probe(&self, path: &Path) -> FileStatus;
}

impl<P: FileProbe + ?Sized> FileProbe for &P {
    fn probe(&self, path: &Path) -> FileStatus {
        (**self).probe(path)
    }
}
