//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and maps
//! verifier errors to exit codes and user-facing messages.

use gpverify_core::VerifyError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// One or more existence checks failed.
    #[error("{failed} of {total} gpbackup checks failed")]
    ChecksFailed { failed: usize, total: usize },

    /// IO error while writing the report.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (version unset, empty or invalid).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: Verification failed
    /// - 2: Invalid arguments, reported by clap before any command runs
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ChecksFailed { .. } => 1,
            Self::Io(_) => 74,     // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }

    /// Stable machine-readable code for JSON output.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ChecksFailed { .. } => "E_CHECKS_FAILED",
            Self::Io(_) => "E_IO",
            Self::Config(_) => "E_CONFIG",
        }
    }
}

impl From<VerifyError> for CliError {
    fn from(err: VerifyError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error that reached `main`.
///
/// Errors that are not a [`CliError`] map to the general failure code.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_version_is_config_error() {
        let err: CliError = VerifyError::MissingEnvironmentVariable {
            var: "GPDB_VERSION".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 78);
        assert_eq!(err.code(), "E_CONFIG");
        assert!(
            err.to_string()
                .starts_with("Configuration error: GPDB_VERSION is not set")
        );
    }

    #[test]
    fn test_checks_failed_exit_code() {
        let err = CliError::ChecksFailed {
            failed: 1,
            total: 5,
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "1 of 5 gpbackup checks failed");
    }

    #[test]
    fn test_io_error_maps_to_ioerr() {
        let err: CliError = std::io::Error::other("broken pipe").into();
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_exit_code_for_anyhow() {
        let wrapped = anyhow::Error::new(CliError::Config("bad".to_string()));
        assert_eq!(exit_code_for(&wrapped), 78);

        let other = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&other), 1);
    }
}
