//! Core domain for verifying a gpbackup installation.
//!
//! The verifier checks that the gpbackup binaries bundled by the package
//! exist under `/usr/local/greenplum-db-<version>/bin/`. This crate holds
//! the pure pieces:
//! - [`GpdbVersion`]: the version string used to locate the install
//! - [`layout`]: the fixed install layout and the [`ExpectedFile`] set
//! - [`FileProbe`]: the port used to stat paths, with [`HostFileProbe`]
//!   as the real filesystem implementation
//! - [`InstallationVerifier`]: runs every check and builds a
//!   [`VerificationReport`]
//!
//! No terminal I/O happens here; adapters render the report.
#![deny(unused_crate_dependencies)]

pub mod control;
pub mod error;
pub mod layout;
pub mod ports;
pub mod probe;
pub mod report;
pub mod verifier;
pub mod version;

// Silence unused dev-dependency warnings for crates only used by integration-style tests
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;

pub use control::{CONTROL_ID, CONTROL_IMPACT, CONTROL_TITLE, Control, PROFILE_TITLE};
pub use error::VerifyError;
pub use layout::{ExpectedFile, INSTALL_DIR_PREFIX, INSTALL_PREFIX, UnknownFileName, bin_dir, install_dir};
pub use ports::{FileKind, FileProbe, FileStatus};
pub use probe::HostFileProbe;
pub use report::{CheckResult, OverallStatus, VerificationReport};
pub use verifier::InstallationVerifier;
pub use version::{GPDB_VERSION_ENV, GpdbVersion};
