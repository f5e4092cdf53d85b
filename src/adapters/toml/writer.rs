//! TOML writer for records files

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::core::models::RecordSet;

const HEADER: &str = "# bylines records\n# Written by bylines; edits are re-validated only when a record is next updated.\n\n";

/// Format a `RecordSet` as a TOML document
///
/// # Errors
///
/// Returns an error if the records cannot be represented as TOML.
pub fn format_records_file(records: &RecordSet) -> anyhow::Result<String> {
    let body = toml::to_string_pretty(records)?;
    Ok(format!("{HEADER}{body}"))
}

/// Write a `RecordSet` to `path`, creating parent directories
///
/// The document is written to a sibling temp file and renamed into place.
///
/// # Errors
///
/// Returns an error if formatting, writing or renaming fails.
pub fn write_file(path: &Path, records: &RecordSet) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let content = format_records_file(records)?;
    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, content).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}
