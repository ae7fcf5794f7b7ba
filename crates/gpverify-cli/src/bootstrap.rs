//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where configuration is resolved and the
//! verifier is wired to a concrete probe. Handlers receive the composed
//! [`CliContext`] and never read the environment themselves.

use std::ffi::OsString;
use std::path::PathBuf;

use gpverify_core::{GpdbVersion, HostFileProbe, InstallationVerifier};

use crate::error::CliError;

/// Resolved configuration for a verifier run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Greenplum version the install paths are built from.
    pub version: GpdbVersion,
    /// Alternate filesystem root, if checking a mounted image.
    pub root: Option<PathBuf>,
}

impl CliConfig {
    /// Resolve configuration from flags and the process environment.
    pub fn from_env(gpdb_version: Option<&str>, root: Option<PathBuf>) -> Result<Self, CliError> {
        Self::resolve(gpdb_version, root, |key| std::env::var_os(key))
    }

    /// Resolve configuration with an explicit environment lookup.
    pub fn resolve<F>(
        gpdb_version: Option<&str>,
        root: Option<PathBuf>,
        lookup: F,
    ) -> Result<Self, CliError>
    where
        F: FnOnce(&str) -> Option<OsString>,
    {
        let version = GpdbVersion::resolve(gpdb_version, lookup)?;
        Ok(Self { version, root })
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Version being verified.
    pub version: GpdbVersion,
    /// Verifier bound to the host filesystem.
    pub verifier: InstallationVerifier<HostFileProbe>,
}

/// Wire the verifier to the host filesystem probe.
pub fn bootstrap(config: CliConfig) -> CliContext {
    let probe = match config.root {
        Some(root) => {
            tracing::debug!(root = %root.display(), "checking under alternate root");
            HostFileProbe::with_root(root)
        }
        None => HostFileProbe::new(),
    };

    CliContext {
        version: config.version,
        verifier: InstallationVerifier::new(probe),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_flag() {
        let config = CliConfig::resolve(Some("7.1.0"), None, |_| Some("6.0.0".into())).unwrap();
        assert_eq!(config.version.as_str(), "7.1.0");
    }

    #[test]
    fn test_resolve_reads_gpdb_version() {
        let config = CliConfig::resolve(None, Some(PathBuf::from("/mnt")), |key| {
            (key == "GPDB_VERSION").then(|| "6.0.0".into())
        })
        .unwrap();
        assert_eq!(config.version.as_str(), "6.0.0");
        assert_eq!(config.root, Some(PathBuf::from("/mnt")));
    }

    #[test]
    fn test_resolve_unset_is_config_error() {
        let err = CliConfig::resolve(None, None, |_| None).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_bootstrap_applies_root() {
        let ctx = bootstrap(CliConfig {
            version: GpdbVersion::parse("6.0.0").unwrap(),
            root: Some(PathBuf::from("/mnt/image")),
        });
        assert_eq!(
            ctx.verifier.probe().root(),
            Some(std::path::Path::new("/mnt/image"))
        );
        assert_eq!(ctx.version.as_str(), "6.0.0");
    }
}
