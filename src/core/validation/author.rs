//! Author field rules
//!
//! - name: not blank, and no other author may hold the exact same name
//! - phone number: optional, otherwise exactly ten ASCII digits

use super::error::{ValidationError, ValidationResult};

/// Required length of a phone number
pub const PHONE_DIGITS: usize = 10;

/// Accept a name if it is not blank and not already taken
///
/// `other_names` must hold the names of every author except the one
/// being written. Comparison is exact and case-sensitive.
pub fn validate_name<'a, I>(candidate: &str, other_names: I) -> ValidationResult<String>
where
    I: IntoIterator<Item = &'a str>,
{
    if candidate.trim().is_empty() {
        return Err(ValidationError::NameEmpty);
    }

    if other_names.into_iter().any(|existing| existing == candidate) {
        return Err(ValidationError::NameNotUnique {
            name: candidate.to_string(),
        });
    }

    Ok(candidate.to_string())
}

/// Accept an absent or empty phone number, or exactly ten digits
///
/// Empty input is treated the same as absent and yields `None`.
pub fn validate_phone_number(candidate: Option<&str>) -> ValidationResult<Option<String>> {
    let Some(value) = candidate.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let well_formed =
        value.chars().count() == PHONE_DIGITS && value.chars().all(|c| c.is_ascii_digit());

    if well_formed {
        Ok(Some(value.to_string()))
    } else {
        Err(ValidationError::PhoneFormat {
            value: value.to_string(),
        })
    }
}
