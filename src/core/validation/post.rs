//! Post field rules
//!
//! The title policy is editorial: every headline must carry at least one
//! clickbait keyword. Lengths are counted in characters, not bytes.

use super::error::{ValidationError, ValidationResult};
use crate::core::models::Category;

/// A title must contain at least one of these (case-sensitive)
pub const CLICKBAIT_KEYWORDS: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

/// Shortest accepted content, in characters
pub const MIN_CONTENT_CHARS: usize = 250;

/// Longest accepted summary, in characters
pub const MAX_SUMMARY_CHARS: usize = 250;

/// Accept a non-blank title containing a clickbait keyword
pub fn validate_title(candidate: &str) -> ValidationResult<String> {
    if candidate.trim().is_empty() {
        return Err(ValidationError::TitleEmpty);
    }

    if !CLICKBAIT_KEYWORDS.iter().any(|keyword| candidate.contains(keyword)) {
        return Err(ValidationError::TitleMissingKeyword);
    }

    Ok(candidate.to_string())
}

/// Accept absent content, or content of at least [`MIN_CONTENT_CHARS`]
pub fn validate_content(candidate: Option<&str>) -> ValidationResult<Option<String>> {
    let Some(value) = present(candidate) else {
        return Ok(None);
    };

    let len = value.chars().count();
    if len < MIN_CONTENT_CHARS {
        return Err(ValidationError::ContentTooShort { len });
    }

    Ok(Some(value.to_string()))
}

/// Accept an absent summary, or one of at most [`MAX_SUMMARY_CHARS`]
pub fn validate_summary(candidate: Option<&str>) -> ValidationResult<Option<String>> {
    let Some(value) = present(candidate) else {
        return Ok(None);
    };

    let len = value.chars().count();
    if len > MAX_SUMMARY_CHARS {
        return Err(ValidationError::SummaryTooLong { len });
    }

    Ok(Some(value.to_string()))
}

/// Accept an absent category, or the exact name of a [`Category`]
pub fn validate_category(candidate: Option<&str>) -> ValidationResult<Option<Category>> {
    let Some(value) = present(candidate) else {
        return Ok(None);
    };

    value.parse().map(Some).map_err(|_| ValidationError::InvalidCategory {
        value: value.to_string(),
    })
}

/// Optional text fields treat an empty string as absent
fn present(candidate: Option<&str>) -> Option<&str> {
    candidate.filter(|v| !v.is_empty())
}
