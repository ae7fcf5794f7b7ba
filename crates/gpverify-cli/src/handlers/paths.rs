//! Paths command handler.
//!
//! Prints every path the verifier would check, in `key = value` format,
//! without touching the filesystem.

use std::io::Write;

use anyhow::Result;
use gpverify_core::{ExpectedFile, GpdbVersion, bin_dir, install_dir};

use crate::error::CliError;

/// Execute the paths command.
pub fn execute(version: &GpdbVersion) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_paths(&mut out, version)?;
    Ok(())
}

/// Write the resolved paths for `version`.
pub fn write_paths(out: &mut impl Write, version: &GpdbVersion) -> Result<(), CliError> {
    writeln!(out, "gpdb_version = {version}")?;
    writeln!(out, "install_dir = {}", install_dir(version).display())?;
    writeln!(out, "bin_dir = {}", bin_dir(version).display())?;
    for file in ExpectedFile::ALL {
        writeln!(out, "{} = {}", file.file_name(), file.path(version).display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_output_lists_every_binary() {
        let version = GpdbVersion::parse("6.0.0").unwrap();
        let mut buf = Vec::new();
        write_paths(&mut buf, &version).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(
            output,
            "gpdb_version = 6.0.0\n\
             install_dir = /usr/local/greenplum-db-6.0.0\n\
             bin_dir = /usr/local/greenplum-db-6.0.0/bin\n\
             gpbackup = /usr/local/greenplum-db-6.0.0/bin/gpbackup\n\
             gpbackup_helper = /usr/local/greenplum-db-6.0.0/bin/gpbackup_helper\n\
             gprestore = /usr/local/greenplum-db-6.0.0/bin/gprestore\n\
             gpbackup_s3_plugin = /usr/local/greenplum-db-6.0.0/bin/gpbackup_s3_plugin\n\
             gpbackup_ddboost_plugin = /usr/local/greenplum-db-6.0.0/bin/gpbackup_ddboost_plugin\n"
        );
    }
}
