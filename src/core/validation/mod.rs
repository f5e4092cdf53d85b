//! Field validators
//!
//! Each validator takes one candidate field value and returns either the
//! value to store or a [`ValidationError`]. They hold no state; the only
//! one that looks beyond its own argument is [`validate_name`], which is
//! handed the names of the other authors.
//!
//! - [`author`] - name and phone number rules
//! - [`post`] - title, content, summary and category rules

pub mod author;
mod error;
pub mod post;

pub use author::{validate_name, validate_phone_number};
pub use error::{ValidationError, ValidationResult};
pub use post::{
    CLICKBAIT_KEYWORDS, MAX_SUMMARY_CHARS, MIN_CONTENT_CHARS, validate_category, validate_content,
    validate_summary, validate_title,
};
