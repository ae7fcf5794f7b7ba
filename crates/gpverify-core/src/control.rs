//! The "files bundled" control.
//!
//! A control is a titled group of checks with an impact score. There is
//! exactly one: every gpbackup binary must be present after installation.

use serde::Serialize;

use crate::layout::ExpectedFile;

/// Title of the verification profile.
pub const PROFILE_TITLE: &str = "Greenplum Backup integration testing";

/// Identifier of the bundled-files control.
pub const CONTROL_ID: &str = "gpbackup rpm: files bundled";

/// Human title of the bundled-files control.
pub const CONTROL_TITLE: &str = "All binaries are present after installation";

/// Impact of a failure, from 0.0 (informational) to 1.0 (critical).
pub const CONTROL_IMPACT: f64 = 1.0;

/// A named group of existence checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    pub id: &'static str,
    pub title: &'static str,
    pub impact: f64,
    #[serde(skip)]
    pub files: Vec<ExpectedFile>,
}

impl Control {
    /// The control covering every bundled gpbackup binary.
    pub fn files_bundled() -> Self {
        Self {
            id: CONTROL_ID,
            title: CONTROL_TITLE,
            impact: CONTROL_IMPACT,
            files: ExpectedFile::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_bundled_covers_all_binaries() {
        let control = Control::files_bundled();
        assert_eq!(control.files, ExpectedFile::ALL);
        assert_eq!(control.id, "gpbackup rpm: files bundled");
        assert!((control.impact - 1.0).abs() < f64::EPSILON);
    }
}
