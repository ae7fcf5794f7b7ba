//! Check command handler.
//!
//! Runs the installation verifier and writes the report to stdout in the
//! requested format. A failed check is returned as
//! [`CliError::ChecksFailed`] after the full report has been written.

mod display;
mod instructions;

use std::io::{IsTerminal, Write};

use anyhow::Result;
use gpverify_core::VerificationReport;
use serde_json::json;

use crate::bootstrap::CliContext;
use crate::commands::OutputFormat;
use crate::error::CliError;

pub use display::{Style, write_report};
pub use instructions::{PackageFamily, detect_package_family, package_family, write_instructions};

/// Output options for the check command.
#[derive(Debug, Clone, Copy)]
pub struct CheckOutput {
    pub format: OutputFormat,
    pub style: Style,
}

impl CheckOutput {
    /// Colour only when requested and stdout is a terminal.
    pub fn for_stdout(format: OutputFormat, no_color: bool) -> Self {
        Self {
            format,
            style: Style {
                color: !no_color && std::io::stdout().is_terminal(),
            },
        }
    }
}

/// Execute the check command.
///
/// Every expected binary is checked; the report is written even when some
/// checks fail.
///
/// # Returns
///
/// Returns `Ok(())` if all binaries are present.
/// Returns [`CliError::ChecksFailed`] if any check failed.
pub fn execute(ctx: &CliContext, output: CheckOutput) -> Result<()> {
    let report = ctx.verifier.verify(&ctx.version);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_output(&mut out, &report, output, detect_package_family())?;
    out.flush().map_err(CliError::from)?;

    ensure_passed(&report)?;
    Ok(())
}

/// Write `report` in the requested format.
pub fn write_output(
    out: &mut impl Write,
    report: &VerificationReport,
    output: CheckOutput,
    family: PackageFamily,
) -> Result<(), CliError> {
    match output.format {
        OutputFormat::Text => {
            write_report(out, report, output.style)?;
            if !report.is_success() {
                write_instructions(out, report, family, output.style)?;
            }
        }
        OutputFormat::Json => {
            let body = serde_json::to_string_pretty(report)
                .map_err(|e| CliError::Io(format!("Failed to serialize report: {e}")))?;
            writeln!(out, "{body}")?;
        }
    }
    Ok(())
}

/// Turn a failed report into an error carrying the failure counts.
pub fn ensure_passed(report: &VerificationReport) -> Result<(), CliError> {
    if report.is_success() {
        return Ok(());
    }
    Err(CliError::ChecksFailed {
        failed: report.total() - report.passed_count(),
        total: report.total(),
    })
}

/// Write a configuration or usage error as a JSON document.
///
/// Used in JSON mode so stdout stays parseable even when no report could
/// be produced.
pub fn write_error_json(out: &mut impl Write, err: &CliError) -> Result<(), CliError> {
    let body = json!({
        "error": {
            "code": err.code(),
            "message": err.to_string(),
            "exit_code": err.exit_code(),
        }
    });
    writeln!(out, "{body:#}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpverify_core::{
        CheckResult, Control, ExpectedFile, FileKind, FileStatus, GpdbVersion, bin_dir,
    };

    fn report(missing: Option<ExpectedFile>) -> VerificationReport {
        let version = GpdbVersion::parse("6.0.0").unwrap();
        let results = ExpectedFile::ALL
            .into_iter()
            .map(|file| {
                let status = if Some(file) == missing {
                    FileStatus::Missing
                } else {
                    FileStatus::Present {
                        kind: FileKind::File,
                    }
                };
                CheckResult::new(file, file.path(&version), status)
            })
            .collect();
        VerificationReport::new(Control::files_bundled(), version.clone(), bin_dir(&version), results)
    }

    const TEXT: CheckOutput = CheckOutput {
        format: OutputFormat::Text,
        style: Style::PLAIN,
    };
    const JSON: CheckOutput = CheckOutput {
        format: OutputFormat::Json,
        style: Style::PLAIN,
    };

    fn render(report: &VerificationReport, output: CheckOutput) -> String {
        let mut buf = Vec::new();
        write_output(&mut buf, report, output, PackageFamily::Rpm).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_ensure_passed() {
        assert!(ensure_passed(&report(None)).is_ok());

        let err = ensure_passed(&report(Some(ExpectedFile::Gprestore))).unwrap_err();
        assert!(matches!(
            err,
            CliError::ChecksFailed {
                failed: 1,
                total: 5
            }
        ));
    }

    #[test]
    fn test_text_success_has_no_instructions() {
        let output = render(&report(None), TEXT);
        assert!(!output.contains("To fix:"));
    }

    #[test]
    fn test_text_failure_has_instructions() {
        let output = render(&report(Some(ExpectedFile::Gpbackup)), TEXT);
        assert!(output.contains("To fix:"));
        assert!(output.contains("rpm -ql gpbackup"));
    }

    #[test]
    fn test_json_output_is_report() {
        let output = render(&report(Some(ExpectedFile::Gprestore)), JSON);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["overall"], "failed");
        assert_eq!(value["results"].as_array().unwrap().len(), 5);
        assert_eq!(value["results"][2]["file"], "gprestore");
        assert_eq!(value["results"][2]["passed"], false);
    }

    #[test]
    fn test_error_json() {
        let err = CliError::Config("GPDB_VERSION is not set".to_string());
        let mut buf = Vec::new();
        write_error_json(&mut buf, &err).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["error"]["code"], "E_CONFIG");
        assert_eq!(value["error"]["exit_code"], 78);
        assert_eq!(
            value["error"]["message"],
            "Configuration error: GPDB_VERSION is not set"
        );
    }
}
