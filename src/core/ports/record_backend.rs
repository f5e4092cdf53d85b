//! Record backend port
//!
//! Defines how the full record collection is loaded and saved.

use super::super::models::RecordSet;

/// Persistence for the record collection
///
/// A backend only moves whole [`RecordSet`]s. It never validates; the
/// record store runs every rule before calling [`RecordBackend::save`].
pub trait RecordBackend: Send + Sync {
    /// Load every record (an empty set if nothing was saved yet)
    fn load(&self) -> anyhow::Result<RecordSet>;

    /// Replace the stored records with `records`
    fn save(&self, records: &RecordSet) -> anyhow::Result<()>;
}

/// Backend type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// TOML file on disk (default)
    #[default]
    Toml,
    /// Process memory, lost on exit
    Memory,
}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" | "file" => Ok(Self::Toml),
            "memory" | "mem" => Ok(Self::Memory),
            _ => Err(format!("Unknown backend: {s}. Use 'toml' or 'memory'")),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toml => write!(f, "toml"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

impl<T: RecordBackend + ?Sized> RecordBackend for Box<T> {
    fn load(&self) -> anyhow::Result<RecordSet> {
        (**self).load()
    }

    fn save(&self, records: &RecordSet) -> anyhow::Result<()> {
        (**self).save(records)
    }
}
