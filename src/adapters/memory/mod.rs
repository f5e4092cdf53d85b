//! In-memory record backend
//!
//! Keeps the record collection in process memory. Used by tests and by
//! the CLI when `backend = "memory"` is configured.

use parking_lot::RwLock;

use crate::core::models::RecordSet;
use crate::core::ports::RecordBackend;

/// Record backend that never touches disk
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: RwLock<RecordSet>,
}

impl MemoryBackend {
    /// Create an empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend preloaded with `records`
    #[must_use]
    pub fn with_records(records: RecordSet) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl RecordBackend for MemoryBackend {
    fn load(&self) -> anyhow::Result<RecordSet> {
        Ok(self.records.read().clone())
    }

    fn save(&self, records: &RecordSet) -> anyhow::Result<()> {
        self.records.write().clone_from(records);
        Ok(())
    }
}
