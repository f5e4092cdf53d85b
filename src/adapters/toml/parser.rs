//! TOML parser for records files
//!
//! Handles reading and deserializing the record collection.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::core::models::RecordSet;

/// Load the record collection from a records file
///
/// A missing file is an empty collection.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_file(path: &Path) -> anyhow::Result<RecordSet> {
    if !path.exists() {
        return Ok(RecordSet::default());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_records(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Parse a records document
///
/// # Errors
///
/// Returns an error if the text is not valid TOML or does not match the
/// record layout.
pub fn parse_records(content: &str) -> anyhow::Result<RecordSet> {
    Ok(toml::from_str(content)?)
}
