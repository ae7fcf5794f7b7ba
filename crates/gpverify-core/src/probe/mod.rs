//! Filesystem probe implementation.
//!
//! [`HostFileProbe`] implements [`FileProbe`] with a single `stat` per
//! path. It follows symlinks, so a dangling link reports as missing.

use std::io;
use std::path::{Component, Path, PathBuf};

use crate::ports::{FileKind, FileProbe, FileStatus};

/// `std::fs` backed implementation of [`FileProbe`].
///
/// By default paths are checked as given. [`HostFileProbe::with_root`]
/// re-roots every absolute path under another directory, which is how a
/// mounted image or a test fixture is checked without changing the
/// reported `/usr/local/...` paths.
///
/// # Example
///
/// ```
/// use gpverify_core::{FileProbe, HostFileProbe};
/// use std::path::Path;
///
/// let probe = HostFileProbe::new();
/// assert!(!probe.probe(Path::new("/definitely/not/here")).exists());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HostFileProbe {
    root: Option<PathBuf>,
}

impl HostFileProbe {
    /// Probe the live filesystem.
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Probe paths relative to `root` instead of `/`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Alternate filesystem root, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Host path actually passed to `stat` for `path`.
    pub fn host_path(&self, path: &Path) -> PathBuf {
        let Some(root) = &self.root else {
            return path.to_path_buf();
        };

        // Drop the leading `/` (and any prefix) so the join stays under root
        let relative: PathBuf = path
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect();
        root.join(relative)
    }
}

impl FileProbe for HostFileProbe {
    fn probe(&self, path: &Path) -> FileStatus {
        let host_path = self.host_path(path);

        match std::fs::metadata(&host_path) {
            Ok(meta) => {
                let kind = if meta.is_file() {
                    FileKind::File
                } else if meta.is_dir() {
                    FileKind::Directory
                } else {
                    FileKind::Other
                };
                tracing::trace!(path = %host_path.display(), ?kind, "path exists");
                FileStatus::Present { kind }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::trace!(path = %host_path.display(), "path not found");
                FileStatus::Missing
            }
            Err(e) => {
                tracing::warn!(path = %host_path.display(), error = %e, "cannot inspect path");
                FileStatus::Unreadable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_host_path_without_root_is_identity() {
        let probe = HostFileProbe::new();
        let path = Path::new("/usr/local/greenplum-db-6.0.0/bin/gpbackup");
        assert_eq!(probe.host_path(path), path);
        assert!(probe.root().is_none());
    }

    #[test]
    fn test_host_path_is_rerooted() {
        let probe = HostFileProbe::with_root("/mnt/image");
        assert_eq!(
            probe.host_path(Path::new("/usr/local/greenplum-db-6.0.0/bin/gpbackup")),
            PathBuf::from("/mnt/image/usr/local/greenplum-db-6.0.0/bin/gpbackup")
        );
        assert_eq!(probe.root(), Some(Path::new("/mnt/image")));
    }

    #[test]
    fn test_regular_file_is_present() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("gpbackup");
        fs::write(&file, b"").unwrap();

        let status = HostFileProbe::new().probe(&file);
        assert_eq!(
            status,
            FileStatus::Present {
                kind: FileKind::File
            }
        );
    }

    #[test]
    fn test_directory_counts_as_existing() {
        let dir = TempDir::new().unwrap();
        let status = HostFileProbe::new().probe(dir.path());
        assert_eq!(
            status,
            FileStatus::Present {
                kind: FileKind::Directory
            }
        );
    }

    #[test]
    fn test_absent_file_is_missing() {
        let dir = TempDir::new().unwrap();
        let status = HostFileProbe::new().probe(&dir.path().join("gprestore"));
        assert_eq!(status, FileStatus::Missing);
    }

    #[test]
    fn test_rooted_probe_checks_under_root() {
        let dir = TempDir::new().unwrap();
        let bin = dir.path().join("usr/local/greenplum-db-6.0.0/bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("gpbackup"), b"#!/bin/sh\n").unwrap();

        let probe = HostFileProbe::with_root(dir.path());
        assert!(
            probe
                .probe(Path::new("/usr/local/greenplum-db-6.0.0/bin/gpbackup"))
                .exists()
        );
        assert_eq!(
            probe.probe(Path::new("/usr/local/greenplum-db-6.0.0/bin/gprestore")),
            FileStatus::Missing
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_missing() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("gpbackup_helper");
        std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();

        assert_eq!(HostFileProbe::new().probe(&link), FileStatus::Missing);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_file_is_present() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("gpbackup-1.30.0");
        fs::write(&target, b"").unwrap();
        let link = dir.path().join("gpbackup");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(HostFileProbe::new().probe(&link).exists());
    }

    #[test]
    fn test_probe_does_not_modify_filesystem() {
        let dir = TempDir::new().unwrap();
        let probe = HostFileProbe::with_root(dir.path());
        let path = Path::new("/usr/local/greenplum-db-6.0.0/bin/gpbackup");

        let first = probe.probe(path);
        let second = probe.probe(path);

        assert_eq!(first, second);
        assert!(!dir.path().join("usr").exists());
    }
}
