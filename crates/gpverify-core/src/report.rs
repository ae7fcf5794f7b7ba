//! Verification report types.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::control::{Control, PROFILE_TITLE};
use crate::layout::ExpectedFile;
use crate::ports::FileStatus;
use crate::version::GpdbVersion;

/// Outcome of a single existence check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Which binary was checked.
    pub file: ExpectedFile,
    /// Canonical path that was checked.
    pub path: PathBuf,
    /// Whether the check passed.
    pub passed: bool,
    /// What the probe observed.
    #[serde(flatten)]
    pub status: FileStatus,
}

impl CheckResult {
    pub fn new(file: ExpectedFile, path: PathBuf, status: FileStatus) -> Self {
        Self {
            file,
            path,
            passed: status.exists(),
            status,
        }
    }
}

/// Aggregate result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// Every check passed.
    Passed,
    /// At least one check failed.
    Failed,
}

/// Complete report for one verification run.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    /// Profile the control belongs to.
    pub profile: &'static str,
    /// Control that was evaluated.
    pub control: Control,
    /// Version the paths were built from.
    pub version: GpdbVersion,
    /// Directory the binaries are expected in.
    pub bin_dir: PathBuf,
    /// Per-file results in canonical order.
    pub results: Vec<CheckResult>,
    /// Overall outcome.
    pub overall: OverallStatus,
    /// When the checks ran.
    pub verified_at: DateTime<Utc>,
}

impl VerificationReport {
    /// Build a report, putting results in canonical order.
    pub fn new(
        control: Control,
        version: GpdbVersion,
        bin_dir: PathBuf,
        mut results: Vec<CheckResult>,
    ) -> Self {
        results.sort_by_key(|r| r.file);
        let overall = if results.iter().all(|r| r.passed) {
            OverallStatus::Passed
        } else {
            OverallStatus::Failed
        };

        Self {
            profile: PROFILE_TITLE,
            control,
            version,
            bin_dir,
            results,
            overall,
            verified_at: Utc::now(),
        }
    }

    /// Whether every check passed.
    pub fn is_success(&self) -> bool {
        self.overall == OverallStatus::Passed
    }

    /// Checks that passed.
    pub fn passed(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.passed)
    }

    /// Checks that failed.
    pub fn failed(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Number of checks that passed.
    pub fn passed_count(&self) -> usize {
        self.passed().count()
    }

    /// Total number of checks.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Result for a specific file, if it was checked.
    pub fn result_for(&self, file: ExpectedFile) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.file == file)
    }
}
