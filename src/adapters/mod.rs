//! Adapter implementations for port traits
//!
//! This module contains concrete implementations of `RecordBackend`:
//!
//! - `memory/` - Records held in process memory
//! - `toml/` - Records persisted to a `records.toml` file

pub mod memory;
pub mod toml;

use std::path::PathBuf;

use crate::core::ports::{BackendKind, RecordBackend};

/// Build the backend selected by `kind`
///
/// `path` is only used by file-based backends.
#[must_use]
pub fn backend(kind: BackendKind, path: PathBuf) -> Box<dyn RecordBackend> {
    match kind {
        BackendKind::Toml => Box::new(toml::TomlBackend::new(path)),
        BackendKind::Memory => Box::new(memory::MemoryBackend::new()),
    }
}
