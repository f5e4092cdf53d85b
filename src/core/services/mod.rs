//! Business logic services
//!
//! Orchestration over domain models and ports. The only service is the
//! record store, which runs the validators before handing records to a
//! backend.
//!
//! - [`store`] - Validated create, update, lookup and delete

pub mod store;

pub use store::{RecordKind, RecordStore, StoreError, StoreResult};
