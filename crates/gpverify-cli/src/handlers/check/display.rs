//! Text rendering for verification reports.

use std::io::Write;

use gpverify_core::{CheckResult, FileStatus, VerificationReport};

use crate::error::CliError;

// ANSI color codes for better UX
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const RULE_WIDTH: usize = 85;

/// Whether ANSI colour codes are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub const PLAIN: Self = Self { color: false };

    /// Wrap `text` in `code` when colour is enabled.
    pub fn paint(self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Write the full text report.
pub fn write_report(
    out: &mut impl Write,
    report: &VerificationReport,
    style: Style,
) -> Result<(), CliError> {
    writeln!(out, "{}", style.paint(&format!("{BOLD}{BLUE}"), report.profile))?;
    writeln!(
        out,
        "Control: {} (impact {:.1})",
        report.control.id, report.control.impact
    )?;
    writeln!(out, "{}", report.control.title)?;
    writeln!(
        out,
        "Checking {} (GPDB_VERSION={})",
        report.bin_dir.display(),
        report.version
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "{}",
        style.paint(BOLD, &format!("{:<26} {:<14} {}", "FILE", "STATUS", "PATH"))
    )?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for result in &report.results {
        write_result(out, result, style)?;
    }

    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    write_summary(out, report, style)
}

/// Write one result row, plus a detail line for unreadable paths.
pub fn write_result(
    out: &mut impl Write,
    result: &CheckResult,
    style: Style,
) -> Result<(), CliError> {
    let (code, label) = match &result.status {
        FileStatus::Present { .. } => (GREEN, "✓ present"),
        FileStatus::Missing => (RED, "✗ missing"),
        FileStatus::Unreadable { .. } => (YELLOW, "✗ unreadable"),
    };

    writeln!(
        out,
        "{:<26} {} {}",
        result.file.file_name(),
        style.paint(code, &format!("{label:<14}")),
        result.path.display()
    )?;

    if let FileStatus::Unreadable { reason } = &result.status {
        writeln!(out, "{:<26} {}", "", reason)?;
    }
    Ok(())
}

/// Write the pass/fail summary line.
pub fn write_summary(
    out: &mut impl Write,
    report: &VerificationReport,
    style: Style,
) -> Result<(), CliError> {
    let passed = report.passed_count();
    let total = report.total();

    if report.is_success() {
        writeln!(
            out,
            "{} ({passed}/{total})",
            style.paint(GREEN, "✓ All gpbackup binaries are present")
        )?;
    } else {
        let failed: Vec<&CheckResult> = report.failed().collect();
        let names: Vec<&str> = failed.iter().map(|r| r.file.file_name()).collect();
        let noun = if failed.len() == 1 { "binary" } else { "binaries" };
        let state = if failed.iter().all(|r| r.status == FileStatus::Missing) {
            "missing"
        } else {
            "missing or unreadable"
        };
        writeln!(
            out,
            "{} ({passed}/{total}): {}",
            style.paint(RED, &format!("✗ {} gpbackup {noun} {state}", failed.len())),
            names.join(", ")
        )?;
    }
    Ok(())
}
