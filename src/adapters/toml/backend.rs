//! TOML-based record backend
//!
//! Implements the `RecordBackend` port trait with one records file.

use std::path::PathBuf;

use crate::core::models::RecordSet;
use crate::core::ports::RecordBackend;
use crate::paths;

use super::parser::load_file;
use super::writer::write_file;

/// Record backend backed by a TOML file
#[derive(Debug, Clone)]
pub struct TomlBackend {
    /// Location of the records file
    path: PathBuf,
}

impl TomlBackend {
    /// Create a backend for the records file at `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a backend for the default records file in the current directory
    #[must_use]
    pub fn current_dir() -> Self {
        Self::new(paths::records_file())
    }
}

impl RecordBackend for TomlBackend {
    fn load(&self) -> anyhow::Result<RecordSet> {
        log::debug!("loading records from {}", self.path.display());
        load_file(&self.path)
    }

    fn save(&self, records: &RecordSet) -> anyhow::Result<()> {
        log::debug!(
            "saving {} author(s) and {} post(s) to {}",
            records.authors.len(),
            records.posts.len(),
            self.path.display()
        );
        write_file(&self.path, records)
    }
}
