//! Parameterized tests using test-case
//!
//! Each rule is run against a table of accepted and rejected values.

use bylines::core::models::Category;
use bylines::core::validation::{
    ValidationError, validate_category, validate_content, validate_name, validate_phone_number,
    validate_summary, validate_title,
};
use test_case::test_case;

use super::common::text;

// =============================================================================
// Author Rules
// =============================================================================

#[test_case("Jane Doe", true ; "plain name")]
#[test_case(" Jane", true ; "leading space kept")]
#[test_case("", false ; "empty")]
#[test_case("   ", false ; "spaces only")]
#[test_case("\t", false ; "tab only")]
fn test_name_blankness(name: &str, accepted: bool) {
    assert_eq!(validate_name(name, []).is_ok(), accepted);
}

#[test_case("Jane Doe", false ; "exact duplicate")]
#[test_case("jane doe", true ; "different case")]
#[test_case("Jane Doe ", true ; "trailing space differs")]
#[test_case("Jane", true ; "prefix of existing")]
fn test_name_uniqueness(name: &str, accepted: bool) {
    let existing = ["Jane Doe", "John Roe"];
    assert_eq!(validate_name(name, existing).is_ok(), accepted);
}

#[test_case(Some("5551234567"), true ; "ten digits")]
#[test_case(Some("0000000000"), true ; "leading zeros")]
#[test_case(Some("555-123-4567"), false ; "dashes")]
#[test_case(Some("(555)1234567"), false ; "parentheses")]
#[test_case(Some("12345"), false ; "too short")]
#[test_case(Some("123456789012"), false ; "too long")]
#[test_case(Some("555123456O"), false ; "letter o")]
#[test_case(Some(""), true ; "empty means absent")]
#[test_case(None, true ; "absent")]
fn test_phone_number(phone: Option<&str>, accepted: bool) {
    assert_eq!(validate_phone_number(phone).is_ok(), accepted);
}

// =============================================================================
// Post Rules
// =============================================================================

#[test_case("Top 10 Secrets", true ; "top and secret")]
#[test_case("You Won't Believe What Happened", true ; "wont believe")]
#[test_case("Guess Again", true ; "guess")]
#[test_case("The Secret Garden", true ; "secret mid title")]
#[test_case("Desktop Tips", false ; "lowercase top inside word")]
#[test_case("My Day", false ; "no keyword")]
#[test_case("TOP TEN", false ; "upper case keyword")]
#[test_case("Wont Believe", false ; "missing apostrophe")]
#[test_case("", false ; "empty")]
#[test_case("  ", false ; "blank")]
fn test_title(title: &str, accepted: bool) {
    assert_eq!(validate_title(title).is_ok(), accepted);
}

#[test_case(0, true ; "empty means absent")]
#[test_case(1, false ; "one character")]
#[test_case(249, false ; "one short")]
#[test_case(250, true ; "exact minimum")]
#[test_case(5000, true ; "long")]
fn test_content_length(len: usize, accepted: bool) {
    let content = text(len);
    assert_eq!(validate_content(Some(content.as_str())).is_ok(), accepted);
}

#[test_case(0, true ; "empty means absent")]
#[test_case(1, true ; "one character")]
#[test_case(250, true ; "exact maximum")]
#[test_case(251, false ; "one over")]
fn test_summary_length(len: usize, accepted: bool) {
    let summary = text(len);
    assert_eq!(validate_summary(Some(summary.as_str())).is_ok(), accepted);
}

#[test_case(Some("Fiction"), Ok(Some(Category::Fiction)) ; "fiction")]
#[test_case(Some("Non-Fiction"), Ok(Some(Category::NonFiction)) ; "non fiction")]
#[test_case(None, Ok(None) ; "absent")]
#[test_case(Some("Drama"), Err(ValidationError::InvalidCategory { value: "Drama".to_string() }) ; "drama")]
#[test_case(Some("fiction"), Err(ValidationError::InvalidCategory { value: "fiction".to_string() }) ; "lowercase")]
fn test_category(category: Option<&str>, expected: Result<Option<Category>, ValidationError>) {
    assert_eq!(validate_category(category), expected);
}
