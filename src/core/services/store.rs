//! Record store - validated create, update, lookup and delete
//!
//! Every write runs under one lock: load the record collection, run the
//! field validators, apply the accepted values to a copy, save. A failed
//! rule returns before anything is saved, so a record is never left with
//! some fields changed and others not.
//!
//! Holding the lock across load and save is what makes author name
//! uniqueness hold when several threads create authors at once.

use chrono::Utc;
use parking_lot::Mutex;
use thiserror::Error;

use crate::core::models::{
    Author, AuthorChanges, NewAuthor, NewPost, Post, PostChanges, RecordSet,
};
use crate::core::ports::RecordBackend;
use crate::core::validation::{
    ValidationError, ValidationResult, validate_category, validate_content, validate_name,
    validate_phone_number, validate_summary, validate_title,
};

/// Which entity a store operation was about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// An [`Author`]
    Author,
    /// A [`Post`]
    Post,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Author => write!(f, "author"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// Errors returned by [`RecordStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// A field broke one of the record rules; nothing was written
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with this id
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity that was looked up
        kind: RecordKind,
        /// Requested id
        id: u64,
    },

    /// Every id for this entity has been handed out
    #[error("no {kind} ids left to allocate")]
    IdsExhausted {
        /// Entity being created
        kind: RecordKind,
    },

    /// The backend could not load or save
    #[error("backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    /// The validation failure, if this was one
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Authors and posts kept in a [`RecordBackend`], checked on every write
#[derive(Debug)]
pub struct RecordStore<B> {
    backend: Mutex<B>,
}

impl<B: RecordBackend> RecordStore<B> {
    /// Wrap a backend
    pub fn new(backend: B) -> Self {
        Self {
            backend: Mutex::new(backend),
        }
    }

    // === Authors ===

    /// Validate and insert a new author
    pub fn create_author(&self, new: NewAuthor) -> StoreResult<Author> {
        let backend = self.backend.lock();
        let mut records = backend.load()?;

        let accepted = check_new_author(&records, &new)
            .inspect_err(|err| log::info!("rejected author create: {err}"))?;

        let id = records.next_author_id().ok_or(StoreError::IdsExhausted {
            kind: RecordKind::Author,
        })?;
        let author = Author {
            id,
            name: accepted.name,
            phone_number: accepted.phone_number,
            created_at: Utc::now(),
            updated_at: None,
        };
        records.authors.push(author.clone());
        backend.save(&records)?;

        log::debug!("created {author}");
        Ok(author)
    }

    /// Validate and apply changes to an existing author
    ///
    /// An empty change set returns the author as stored, without touching
    /// `updated_at`.
    pub fn update_author(&self, id: u64, changes: AuthorChanges) -> StoreResult<Author> {
        let backend = self.backend.lock();
        let mut records = backend.load()?;

        let current = records.author(id).cloned().ok_or(StoreError::NotFound {
            kind: RecordKind::Author,
            id,
        })?;
        if changes.is_empty() {
            return Ok(current);
        }

        let mut updated = apply_author_changes(&records, current, &changes)
            .inspect_err(|err| log::info!("rejected author {id} update: {err}"))?;
        updated.updated_at = Some(Utc::now());

        if let Some(slot) = records.authors.iter_mut().find(|a| a.id == id) {
            slot.clone_from(&updated);
        }
        backend.save(&records)?;

        log::debug!("updated {updated}");
        Ok(updated)
    }

    /// Look up an author by id
    pub fn author(&self, id: u64) -> StoreResult<Author> {
        let records = self.backend.lock().load()?;
        records.author(id).cloned().ok_or(StoreError::NotFound {
            kind: RecordKind::Author,
            id,
        })
    }

    /// Look up an author by exact name
    pub fn find_author_by_name(&self, name: &str) -> StoreResult<Option<Author>> {
        let records = self.backend.lock().load()?;
        Ok(records.authors.into_iter().find(|a| a.name == name))
    }

    /// All authors, ordered by id
    pub fn authors(&self) -> StoreResult<Vec<Author>> {
        let mut authors = self.backend.lock().load()?.authors;
        authors.sort_by_key(|a| a.id);
        Ok(authors)
    }

    /// Remove an author, returning the removed record
    pub fn delete_author(&self, id: u64) -> StoreResult<Author> {
        let backend = self.backend.lock();
        let mut records = backend.load()?;

        let index = records.authors.iter().position(|a| a.id == id).ok_or(
            StoreError::NotFound {
                kind: RecordKind::Author,
                id,
            },
        )?;
        let removed = records.authors.remove(index);
        backend.save(&records)?;

        log::debug!("deleted {removed}");
        Ok(removed)
    }

    // === Posts ===

    /// Validate and insert a new post
    pub fn create_post(&self, new: NewPost) -> StoreResult<Post> {
        let backend = self.backend.lock();
        let mut records = backend.load()?;

        let mut post = check_new_post(&new)
            .inspect_err(|err| log::info!("rejected post create: {err}"))?;
        post.id = records.next_post_id().ok_or(StoreError::IdsExhausted {
            kind: RecordKind::Post,
        })?;
        records.posts.push(post.clone());
        backend.save(&records)?;

        log::debug!("created {post}");
        Ok(post)
    }

    /// Validate and apply changes to an existing post
    ///
    /// An empty change set returns the post as stored, without touching
    /// `updated_at`.
    pub fn update_post(&self, id: u64, changes: PostChanges) -> StoreResult<Post> {
        let backend = self.backend.lock();
        let mut records = backend.load()?;

        let current = records.post(id).cloned().ok_or(StoreError::NotFound {
            kind: RecordKind::Post,
            id,
        })?;
        if changes.is_empty() {
            return Ok(current);
        }

        let mut updated = apply_post_changes(current, &changes)
            .inspect_err(|err| log::info!("rejected post {id} update: {err}"))?;
        updated.updated_at = Some(Utc::now());

        if let Some(slot) = records.posts.iter_mut().find(|p| p.id == id) {
            slot.clone_from(&updated);
        }
        backend.save(&records)?;

        log::debug!("updated {updated}");
        Ok(updated)
    }

    /// Look up a post by id
    pub fn post(&self, id: u64) -> StoreResult<Post> {
        let records = self.backend.lock().load()?;
        records.post(id).cloned().ok_or(StoreError::NotFound {
            kind: RecordKind::Post,
            id,
        })
    }

    /// Every post whose title is exactly `title`
    pub fn find_posts_by_title(&self, title: &str) -> StoreResult<Vec<Post>> {
        let records = self.backend.lock().load()?;
        Ok(records.posts.into_iter().filter(|p| p.title == title).collect())
    }

    /// All posts, ordered by id
    pub fn posts(&self) -> StoreResult<Vec<Post>> {
        let mut posts = self.backend.lock().load()?.posts;
        posts.sort_by_key(|p| p.id);
        Ok(posts)
    }

    /// Remove a post, returning the removed record
    pub fn delete_post(&self, id: u64) -> StoreResult<Post> {
        let backend = self.backend.lock();
        let mut records = backend.load()?;

        let index = records.posts.iter().position(|p| p.id == id).ok_or(
            StoreError::NotFound {
                kind: RecordKind::Post,
                id,
            },
        )?;
        let removed = records.posts.remove(index);
        backend.save(&records)?;

        log::debug!("deleted {removed}");
        Ok(removed)
    }
}

fn check_new_author(records: &RecordSet, new: &NewAuthor) -> ValidationResult<NewAuthor> {
    Ok(NewAuthor {
        name: validate_name(&new.name, records.author_names_except(None))?,
        phone_number: validate_phone_number(new.phone_number.as_deref())?,
    })
}

// Every field of the merged record is checked, not just the changed ones,
// so a record edited by hand in the backend cannot be saved back invalid.
fn apply_author_changes(
    records: &RecordSet,
    mut author: Author,
    changes: &AuthorChanges,
) -> ValidationResult<Author> {
    if let Some(name) = &changes.name {
        author.name.clone_from(name);
    }
    if let Some(phone_number) = &changes.phone_number {
        author.phone_number.clone_from(phone_number);
    }

    author.name = validate_name(&author.name, records.author_names_except(Some(author.id)))?;
    author.phone_number = validate_phone_number(author.phone_number.as_deref())?;
    Ok(author)
}

// Id is left at 0 for the caller to assign.
fn check_new_post(new: &NewPost) -> ValidationResult<Post> {
    Ok(Post {
        id: 0,
        title: validate_title(&new.title)?,
        content: validate_content(new.content.as_deref())?,
        summary: validate_summary(new.summary.as_deref())?,
        category: validate_category(new.category.as_deref())?,
        created_at: Utc::now(),
        updated_at: None,
    })
}

fn apply_post_changes(mut post: Post, changes: &PostChanges) -> ValidationResult<Post> {
    if let Some(title) = &changes.title {
        post.title.clone_from(title);
    }
    if let Some(content) = &changes.content {
        post.content.clone_from(content);
    }
    if let Some(summary) = &changes.summary {
        post.summary.clone_from(summary);
    }

    post.title = validate_title(&post.title)?;
    post.content = validate_content(post.content.as_deref())?;
    post.summary = validate_summary(post.summary.as_deref())?;
    // A stored category is already typed; only a requested one is parsed.
    if let Some(category) = &changes.category {
        post.category = validate_category(category.as_deref())?;
    }
    Ok(post)
}
