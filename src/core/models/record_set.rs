//! The record collection
//!
//! Holds every author and post plus the id sequences, so ids stay unique
//! after deletion. Backends load and save this as one unit.

use serde::{Deserialize, Serialize};

use super::{Author, Post};

/// Last id handed out per entity type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequences {
    /// Last author id
    #[serde(default)]
    pub author: u64,
    /// Last post id
    #[serde(default)]
    pub post: u64,
}

/// Every persisted author and post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Id sequences
    #[serde(default)]
    pub sequence: Sequences,

    /// Authors, ordered by id
    #[serde(default, rename = "author")]
    pub authors: Vec<Author>,

    /// Posts, ordered by id
    #[serde(default, rename = "post")]
    pub posts: Vec<Post>,
}

impl RecordSet {
    /// Allocate the next author id
    ///
    /// Returns `None` once the id space is used up.
    pub fn next_author_id(&mut self) -> Option<u64> {
        // Hand-edited files may carry ids past the stored sequence.
        let highest = self.authors.iter().map(|a| a.id).max().unwrap_or(0);
        self.sequence.author = self.sequence.author.max(highest).checked_add(1)?;
        Some(self.sequence.author)
    }

    /// Allocate the next post id
    ///
    /// Returns `None` once the id space is used up.
    pub fn next_post_id(&mut self) -> Option<u64> {
        let highest = self.posts.iter().map(|p| p.id).max().unwrap_or(0);
        self.sequence.post = self.sequence.post.max(highest).checked_add(1)?;
        Some(self.sequence.post)
    }

    /// Find an author by id
    #[must_use]
    pub fn author(&self, id: u64) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    /// Find a post by id
    #[must_use]
    pub fn post(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Names of every author except the one with `exclude` as id
    pub fn author_names_except(&self, exclude: Option<u64>) -> impl Iterator<Item = &str> {
        self.authors
            .iter()
            .filter(move |a| Some(a.id) != exclude)
            .map(|a| a.name.as_str())
    }
}
