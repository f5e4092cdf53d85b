//! Domain models for bylines
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Author`] - A writer with a unique name and optional phone number
//! - [`Post`] - An editorial piece with title, content, summary and category
//! - [`Category`] - The fixed set of post categories
//! - [`RecordSet`] - The full record collection a backend loads and saves

mod author;
mod category;
mod post;
mod record_set;

pub use author::{Author, AuthorChanges, NewAuthor};
pub use category::Category;
pub use post::{NewPost, Post, PostChanges};
pub use record_set::{RecordSet, Sequences};
