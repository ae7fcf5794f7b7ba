//! Reinstall hints for missing binaries.
//!
//! The hint depends on the package family of the host, detected from
//! `/etc/os-release`.

use std::io::Write;

use gpverify_core::VerificationReport;

use super::display::Style;
use crate::error::CliError;

const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";

/// Package family of the host distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFamily {
    Rpm,
    Deb,
    Unknown,
}

/// Classify an `/etc/os-release` document.
pub fn package_family(os_release: &str) -> PackageFamily {
    let content = os_release.to_lowercase();

    if ["rhel", "centos", "rocky", "alma", "fedora", "suse", "oracle"]
        .iter()
        .any(|id| content.contains(id))
    {
        PackageFamily::Rpm
    } else if ["debian", "ubuntu"].iter().any(|id| content.contains(id)) {
        PackageFamily::Deb
    } else {
        PackageFamily::Unknown
    }
}

/// Detect the package family of the running host.
pub fn detect_package_family() -> PackageFamily {
    std::fs::read_to_string("/etc/os-release")
        .map_or(PackageFamily::Unknown, |content| package_family(&content))
}

fn write_command(out: &mut impl Write, command: &str, style: Style) -> Result<(), CliError> {
    writeln!(out, "    {}", style.paint(CYAN, command))?;
    Ok(())
}

/// Write reinstall instructions for a failed report.
pub fn write_instructions(
    out: &mut impl Write,
    report: &VerificationReport,
    family: PackageFamily,
    style: Style,
) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(out, "{}", style.paint(BOLD, "To fix:"))?;
    writeln!(
        out,
        "  Install the gpbackup package built for Greenplum {} so its binaries land in {}",
        report.version,
        report.bin_dir.display()
    )?;

    match family {
        PackageFamily::Rpm => {
            write_command(out, "sudo yum reinstall -y gpbackup", style)?;
            writeln!(out, "  List what the installed package provides:")?;
            write_command(out, "rpm -ql gpbackup | grep /bin/", style)?;
        }
        PackageFamily::Deb => {
            write_command(out, "sudo apt-get install --reinstall -y gpbackup", style)?;
            writeln!(out, "  List what the installed package provides:")?;
            write_command(out, "dpkg -L gpbackup | grep /bin/", style)?;
        }
        PackageFamily::Unknown => {
            writeln!(
                out,
                "  Reinstall it with your package manager, or copy these binaries into place:"
            )?;
            for result in report.failed() {
                writeln!(out, "    - {}", result.file.file_name())?;
            }
        }
    }

    writeln!(
        out,
        "  Make sure GPDB_VERSION matches the installed Greenplum directory under /usr/local."
    )?;
    Ok(())
}
