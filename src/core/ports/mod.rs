//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the record store and the
//! place records are kept. Implementations live in the `adapters` module.
//!
//! The store depends only on [`RecordBackend`], never on a concrete
//! backend, so tests can run against memory and the CLI against a file.

mod record_backend;

pub use record_backend::{BackendKind, RecordBackend};
