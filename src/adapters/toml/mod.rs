//! TOML-based record backend
//!
//! Implements `RecordBackend` using a single `records.toml` file.
//!
//! - [`parser`] - Read and deserialize the records file
//! - [`writer`] - Format and write the records file
//! - [`backend`] - `RecordBackend` implementation

pub mod backend;
pub mod parser;
pub mod writer;

pub use backend::TomlBackend;
pub use parser::load_file;
pub use writer::{format_records_file, write_file};
