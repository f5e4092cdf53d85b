//! Post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// A persisted post record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Identity assigned by the store on creation
    pub id: u64,

    /// Headline, must carry a clickbait keyword
    pub title: String,

    /// Body text, at least 250 characters when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Teaser, at most 250 characters when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Fiction or Non-Fiction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last changed (None until the first update)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Post(id={}, title={}, content={}, summary={})",
            self.id,
            self.title,
            self.content.as_deref().unwrap_or("None"),
            self.summary.as_deref().unwrap_or("None")
        )
    }
}

/// Field values for a post that does not exist yet
///
/// Category is kept as raw text so an unknown value reaches the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    /// Requested title
    pub title: String,
    /// Requested body
    pub content: Option<String>,
    /// Requested teaser
    pub summary: Option<String>,
    /// Requested category text
    pub category: Option<String>,
}

impl NewPost {
    /// Start a new post with just a title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the body
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the teaser
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the category text
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Fields to reassign on an existing post
///
/// `None` leaves a field alone; `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    /// New title
    pub title: Option<String>,
    /// New body
    pub content: Option<Option<String>>,
    /// New teaser
    pub summary: Option<Option<String>>,
    /// New category text
    pub category: Option<Option<String>>,
}

impl PostChanges {
    /// Reassign the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Reassign the body
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(Some(content.into()));
        self
    }

    /// Remove the body
    #[must_use]
    pub fn clear_content(mut self) -> Self {
        self.content = Some(None);
        self
    }

    /// Reassign the teaser
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(Some(summary.into()));
        self
    }

    /// Remove the teaser
    #[must_use]
    pub fn clear_summary(mut self) -> Self {
        self.summary = Some(None);
        self
    }

    /// Reassign the category
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(Some(category.into()));
        self
    }

    /// Remove the category
    #[must_use]
    pub fn clear_category(mut self) -> Self {
        self.category = Some(None);
        self
    }

    /// True when no field would be reassigned
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.summary.is_none()
            && self.category.is_none()
    }
}
