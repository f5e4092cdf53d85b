//! Validation error type

use thiserror::Error;

/// A field value that broke one of the record rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Author name was empty or only whitespace
    #[error("Author name cannot be empty")]
    NameEmpty,

    /// Another author already uses this name
    #[error("Author name must be unique: '{name}' is taken")]
    NameNotUnique {
        /// The rejected name
        name: String,
    },

    /// Phone number was not ten ASCII digits
    #[error("Phone number must be exactly 10 digits, got '{value}'")]
    PhoneFormat {
        /// The rejected value
        value: String,
    },

    /// Post title was empty or only whitespace
    #[error("Post title cannot be empty")]
    TitleEmpty,

    /// Post title had none of the clickbait keywords
    #[error("Post title must contain one of the following: Won't Believe, Secret, Top, Guess")]
    TitleMissingKeyword,

    /// Post content was shorter than the minimum
    #[error("Post content must be at least 250 characters long (got {len})")]
    ContentTooShort {
        /// Character count of the rejected content
        len: usize,
    },

    /// Post summary was longer than the maximum
    #[error("Post summary must be a maximum of 250 characters (got {len})")]
    SummaryTooLong {
        /// Character count of the rejected summary
        len: usize,
    },

    /// Post category was not one of the fixed categories
    #[error("Post category must be either Fiction or Non-Fiction, got '{value}'")]
    InvalidCategory {
        /// The rejected value
        value: String,
    },
}

impl ValidationError {
    /// Name of the field whose rule failed
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NameEmpty | Self::NameNotUnique { .. } => "name",
            Self::PhoneFormat { .. } => "phone_number",
            Self::TitleEmpty | Self::TitleMissingKeyword => "title",
            Self::ContentTooShort { .. } => "content",
            Self::SummaryTooLong { .. } => "summary",
            Self::InvalidCategory { .. } => "category",
        }
    }
}

/// Result of running a validator
pub type ValidationResult<T> = Result<T, ValidationError>;
