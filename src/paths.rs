//! Centralized path definitions for bylines
//!
//! A single source of truth for every filesystem path bylines uses.
//!
//! ## Storage Layout
//!
//! ### Per-Project (current directory)
//!
//! ```text
//! project/
//! └── .bylines/
//!     └── records.toml        # Authors, posts and id sequences
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.bylines/
//! └── config.toml             # Backend selection, records path
//! ```

use std::path::PathBuf;

// =============================================================================
// Project-level paths
// =============================================================================

/// Directory name for local bylines state
pub const BYLINES_DIR: &str = ".bylines";

/// Records filename
pub const RECORDS_FILE: &str = "records.toml";

/// Get path to `.bylines/` in the current directory.
#[must_use]
pub fn bylines_dir() -> PathBuf {
    PathBuf::from(BYLINES_DIR)
}

/// Get path to `.bylines/records.toml`.
///
/// Default location of the TOML record backend.
#[must_use]
pub fn records_file() -> PathBuf {
    bylines_dir().join(RECORDS_FILE)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global bylines directory.
///
/// Returns `~/.bylines/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(BYLINES_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.bylines/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
