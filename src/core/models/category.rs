//! Post categories
//!
//! The category list is a fixed editorial rule, not configuration.

use serde::{Deserialize, Serialize};

/// Category a post is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Invented stories
    Fiction,
    /// Factual writing
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    /// Every accepted category, in display order
    pub const ALL: [Self; 2] = [Self::Fiction, Self::NonFiction];

    /// The exact text a caller must supply for this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    // Exact match only: "fiction" and "Non-fiction" are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Invalid category: {s}. Use: Fiction, Non-Fiction"))
    }
}
