//! Install layout for the gpbackup binaries.
//!
//! The gpbackup package drops its binaries into the Greenplum `bin`
//! directory. The shape is fixed:
//!
//! ```text
//! /usr/local/greenplum-db-<version>/bin/<name>
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::version::GpdbVersion;

/// Prefix under which Greenplum is installed.
pub const INSTALL_PREFIX: &str = "/usr/local";

/// Directory name prefix for a versioned Greenplum install.
pub const INSTALL_DIR_PREFIX: &str = "greenplum-db-";

const BIN_DIR: &str = "bin";

/// Root of the Greenplum install for `version`.
pub fn install_dir(version: &GpdbVersion) -> PathBuf {
    PathBuf::from(INSTALL_PREFIX).join(format!("{INSTALL_DIR_PREFIX}{version}"))
}

/// Directory holding the bundled binaries for `version`.
pub fn bin_dir(version: &GpdbVersion) -> PathBuf {
    install_dir(version).join(BIN_DIR)
}

/// A binary the gpbackup package must install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedFile {
    Gpbackup,
    GpbackupHelper,
    Gprestore,
    GpbackupS3Plugin,
    GpbackupDdboostPlugin,
}

impl ExpectedFile {
    /// Every expected file, in canonical report order.
    pub const ALL: [Self; 5] = [
        Self::Gpbackup,
        Self::GpbackupHelper,
        Self::Gprestore,
        Self::GpbackupS3Plugin,
        Self::GpbackupDdboostPlugin,
    ];

    /// File name inside the `bin` directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Gpbackup => "gpbackup",
            Self::GpbackupHelper => "gpbackup_helper",
            Self::Gprestore => "gprestore",
            Self::GpbackupS3Plugin => "gpbackup_s3_plugin",
            Self::GpbackupDdboostPlugin => "gpbackup_ddboost_plugin",
        }
    }

    /// What the binary is for.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Gpbackup => "Parallel backup utility",
            Self::GpbackupHelper => "Segment-side helper for gpbackup/gprestore",
            Self::Gprestore => "Parallel restore utility",
            Self::GpbackupS3Plugin => "Storage plugin for S3-compatible object stores",
            Self::GpbackupDdboostPlugin => "Storage plugin for Data Domain Boost",
        }
    }

    /// Absolute path the binary must exist at for `version`.
    pub fn path(self, version: &GpdbVersion) -> PathBuf {
        bin_dir(version).join(self.file_name())
    }
}

impl fmt::Display for ExpectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Returned when a name does not match any expected file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gpbackup binary: {0}")]
pub struct UnknownFileName(pub String);

impl FromStr for ExpectedFile {
    type Err = UnknownFileName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|file| file.file_name() == s)
            .ok_or_else(|| UnknownFileName(s.to_string()))
    }
}
