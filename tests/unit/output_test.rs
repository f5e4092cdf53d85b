//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use bylines::core::models::{Author, Category, Post};
use bylines::output::{AuthorInfo, AuthorResult, OperationResult, OutputMode, PostInfo};
use chrono::{TimeZone, Utc};

fn jane() -> Author {
    Author {
        id: 1,
        name: "Jane Doe".to_string(),
        phone_number: Some("1234567890".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        updated_at: None,
    }
}

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn author_result_serialization() {
    let result = AuthorResult {
        action: "created".to_string(),
        author: AuthorInfo::from(&jane()),
    };

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["action"], "created");
    assert_eq!(json["author"]["name"], "Jane Doe");
    assert_eq!(json["author"]["phone_number"], "1234567890");
    assert_eq!(json["author"]["created_at"], "2024-05-01T10:00:00+00:00");
    assert!(json["author"]["updated_at"].is_null());
}

#[test]
fn post_info_uses_category_name() {
    let post = Post {
        id: 2,
        title: "Top Secret".to_string(),
        content: None,
        summary: None,
        category: Some(Category::NonFiction),
        created_at: Utc::now(),
        updated_at: None,
    };

    let info = PostInfo::from(&post);
    assert_eq!(info.category.as_deref(), Some("Non-Fiction"));
}

#[test]
fn operation_result_failure_carries_field() {
    let result = OperationResult::failed("Phone number must be exactly 10 digits", Some("phone_number"));
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":false"));
    assert!(json.contains("\"field\":\"phone_number\""));

    let unnamed = serde_json::to_string(&OperationResult::failed("disk full", None)).unwrap();
    assert!(!unnamed.contains("field"));
}
