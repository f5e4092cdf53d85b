//! Author model
//!
//! An author is identified by a name that no other author may share.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted author record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Identity assigned by the store on creation
    pub id: u64,

    /// Display name, unique across all authors
    pub name: String,

    /// Ten digit phone number, no separators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last changed (None until the first update)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Author(id={}, name={})", self.id, self.name)
    }
}

/// Field values for an author that does not exist yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAuthor {
    /// Requested name
    pub name: String,
    /// Requested phone number
    pub phone_number: Option<String>,
}

impl NewAuthor {
    /// Start a new author with just a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: None,
        }
    }

    /// Set the phone number
    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

/// Fields to reassign on an existing author
///
/// `None` leaves a field alone. For the optional phone number,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorChanges {
    /// New name
    pub name: Option<String>,
    /// New phone number, or `Some(None)` to clear it
    pub phone_number: Option<Option<String>>,
}

impl AuthorChanges {
    /// Reassign the name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Reassign the phone number
    #[must_use]
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(Some(phone_number.into()));
        self
    }

    /// Remove the phone number
    #[must_use]
    pub fn clear_phone_number(mut self) -> Self {
        self.phone_number = Some(None);
        self
    }

    /// True when no field would be reassigned
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone_number.is_none()
    }
}
