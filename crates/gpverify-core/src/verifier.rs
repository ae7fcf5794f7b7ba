//! Installation verifier.
//!
//! Runs one existence check per expected binary and collects the results.
//! Checks are independent: a missing file never stops the remaining
//! checks, and nothing is retried.

use tracing::{debug, info};

use crate::control::Control;
use crate::layout::{ExpectedFile, bin_dir};
use crate::ports::FileProbe;
use crate::report::{CheckResult, VerificationReport};
use crate::version::GpdbVersion;

/// Checks that the gpbackup binaries exist for a given version.
///
/// The version is always passed in; the verifier never reads the process
/// environment itself.
///
/// # Example
///
/// ```
/// use gpverify_core::{GpdbVersion, HostFileProbe, InstallationVerifier};
///
/// let verifier = InstallationVerifier::new(HostFileProbe::with_root("/nonexistent-root"));
/// let report = verifier.verify(&GpdbVersion::parse("6.0.0").unwrap());
/// assert_eq!(report.total(), 5);
/// assert!(!report.is_success());
/// ```
#[derive(Debug, Clone)]
pub struct InstallationVerifier<P> {
    probe: P,
    control: Control,
}

impl<P: FileProbe> InstallationVerifier<P> {
    /// Create a verifier for the bundled-files control.
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            control: Control::files_bundled(),
        }
    }

    /// The probe used for existence checks.
    pub const fn probe(&self) -> &P {
        &self.probe
    }

    /// Check every expected binary.
    pub fn verify(&self, version: &GpdbVersion) -> VerificationReport {
        let files = self.control.files.clone();
        self.verify_files(version, &files)
    }

    /// Check the given binaries, in any order.
    ///
    /// The report lists results in canonical order regardless of the order
    /// `files` was given in. Duplicates are checked once.
    pub fn verify_files(&self, version: &GpdbVersion, files: &[ExpectedFile]) -> VerificationReport {
        let bin_dir = bin_dir(version);
        debug!(bin_dir = %bin_dir.display(), checks = files.len(), "verifying installation");

        let mut unique = files.to_vec();
        unique.sort();
        unique.dedup();

        let results: Vec<CheckResult> = unique
            .into_iter()
            .map(|file| {
                let path = file.path(version);
                let status = self.probe.probe(&path);
                debug!(file = %file, path = %path.display(), exists = status.exists(), "checked");
                CheckResult::new(file, path, status)
            })
            .collect();

        let report = VerificationReport::new(self.control.clone(), version.clone(), bin_dir, results);
        info!(
            version = %version,
            passed = report.passed_count(),
            total = report.total(),
            overall = ?report.overall,
            "verification finished"
        );
        report
    }
}
