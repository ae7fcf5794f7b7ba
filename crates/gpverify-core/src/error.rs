//! Verification error types.
//!
//! A missing binary is not an error: it is a failed check recorded in the
//! report. Errors here are configuration problems that stop the run before
//! any path is built.

use thiserror::Error;

/// Errors that prevent a verification run from starting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The version variable is not set and no explicit version was given.
    #[error(
        "{var} is not set; export {var}=<version> or pass --gpdb-version to locate the Greenplum installation"
    )]
    MissingEnvironmentVariable { var: String },

    /// The version variable is set but blank.
    #[error("{var} is set but empty; it must name the installed Greenplum version")]
    EmptyVersion { var: String },

    /// The version variable holds bytes that are not valid UTF-8.
    #[error("{var} is not valid UTF-8")]
    NotUnicode { var: String },

    /// The version would change the shape of the install path.
    #[error("Invalid Greenplum version {value:?}: {reason}")]
    InvalidVersion { value: String, reason: String },
}

/// Result type for verifier configuration.
pub type VerifyResult<T> = Result<T, VerifyError>;
