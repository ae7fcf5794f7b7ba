//! Greenplum version configuration.
//!
//! The version is taken verbatim from configuration and spliced into the
//! install path. The only checks applied are the ones that keep the path
//! shape fixed: non-blank, no `/`, no NUL.

use std::ffi::OsString;
use std::fmt;

use serde::Serialize;

use crate::error::{VerifyError, VerifyResult};

/// Environment variable naming the installed Greenplum version.
pub const GPDB_VERSION_ENV: &str = "GPDB_VERSION";

/// Label used in errors when the version came from the command line.
const EXPLICIT_SOURCE: &str = "--gpdb-version";

/// Installed Greenplum version, as used in `greenplum-db-<version>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GpdbVersion(String);

impl GpdbVersion {
    /// Validate a version string read from `GPDB_VERSION`.
    pub fn parse(value: &str) -> VerifyResult<Self> {
        Self::parse_from(GPDB_VERSION_ENV, value)
    }

    fn parse_from(source: &str, value: &str) -> VerifyResult<Self> {
        if value.trim().is_empty() {
            return Err(VerifyError::EmptyVersion {
                var: source.to_string(),
            });
        }
        if value.contains('/') {
            return Err(VerifyError::InvalidVersion {
                value: value.to_string(),
                reason: "must not contain '/'".to_string(),
            });
        }
        if value.contains('\0') {
            return Err(VerifyError::InvalidVersion {
                value: value.escape_default().to_string(),
                reason: "must not contain a NUL byte".to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// Resolve the version from an explicit override or the environment.
    ///
    /// `explicit` wins when present. Otherwise `lookup` is asked for
    /// [`GPDB_VERSION_ENV`]; pass `std::env::var_os` for the real process
    /// environment or a closure over fixed values in tests.
    pub fn resolve<F>(explicit: Option<&str>, lookup: F) -> VerifyResult<Self>
    where
        F: FnOnce(&str) -> Option<OsString>,
    {
        if let Some(value) = explicit {
            tracing::debug!(version = value, "using explicit Greenplum version");
            return Self::parse_from(EXPLICIT_SOURCE, value);
        }

        let raw = lookup(GPDB_VERSION_ENV).ok_or_else(|| VerifyError::MissingEnvironmentVariable {
            var: GPDB_VERSION_ENV.to_string(),
        })?;
        let value = raw.into_string().map_err(|_| VerifyError::NotUnicode {
            var: GPDB_VERSION_ENV.to_string(),
        })?;

        tracing::debug!(version = %value, "read GPDB_VERSION from environment");
        Self::parse(&value)
    }

    /// The version exactly as configured.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GpdbVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for GpdbVersion {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
