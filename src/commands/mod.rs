//! Command implementations

mod author;
mod post;

pub use author::author_cmd;
pub use post::post_cmd;

use bylines::adapters;
use bylines::config::GlobalConfig;
use bylines::core::ports::{BackendKind, RecordBackend};
use bylines::core::services::RecordStore;

/// Open the record store described by `config`
fn open_store(config: &GlobalConfig) -> RecordStore<Box<dyn RecordBackend>> {
    if config.store.backend == BackendKind::Memory {
        log::warn!("memory backend selected: records are discarded when this command exits");
    }
    RecordStore::new(adapters::backend(config.store.backend, config.store.path.clone()))
}
