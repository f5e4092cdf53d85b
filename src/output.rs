//! Output formatting for human and JSON modes
//!
//! Command results are plain structs that render either as
//! human-readable text or as machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Author, Post};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// An author as shown to the user
#[derive(Debug, Serialize)]
pub struct AuthorInfo {
    /// Author id
    pub id: u64,
    /// Author name
    pub name: String,
    /// Phone number, if any
    pub phone_number: Option<String>,
    /// Creation time (RFC3339)
    pub created_at: String,
    /// Last update time (RFC3339), if ever updated
    pub updated_at: Option<String>,
}

impl From<&Author> for AuthorInfo {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.name.clone(),
            phone_number: author.phone_number.clone(),
            created_at: author.created_at.to_rfc3339(),
            updated_at: author.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// A post as shown to the user
#[derive(Debug, Serialize)]
pub struct PostInfo {
    /// Post id
    pub id: u64,
    /// Post title
    pub title: String,
    /// Body text, if any
    pub content: Option<String>,
    /// Teaser, if any
    pub summary: Option<String>,
    /// Category name, if any
    pub category: Option<String>,
    /// Creation time (RFC3339)
    pub created_at: String,
    /// Last update time (RFC3339), if ever updated
    pub updated_at: Option<String>,
}

impl From<&Post> for PostInfo {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            summary: post.summary.clone(),
            category: post.category.map(|c| c.to_string()),
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Result of a single-author command (add, update, show, remove)
#[derive(Debug, Serialize)]
pub struct AuthorResult {
    /// What happened, e.g. "created"
    pub action: String,
    /// The author
    pub author: AuthorInfo,
}

/// Result of a single-post command (add, update, show, remove)
#[derive(Debug, Serialize)]
pub struct PostResult {
    /// What happened, e.g. "created"
    pub action: String,
    /// The post
    pub post: PostInfo,
}

/// Result of `author list`
#[derive(Debug, Serialize)]
pub struct AuthorListResult {
    /// Authors, ordered by id
    pub authors: Vec<AuthorInfo>,
}

/// Result of `post list`
#[derive(Debug, Serialize)]
pub struct PostListResult {
    /// Posts, ordered by id
    pub posts: Vec<PostInfo>,
}

/// Result of a command that failed
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Always false; kept so JSON consumers can branch on it
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Field whose rule failed, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_author(author: &AuthorInfo) {
    println!("  {} {}", format!("[{}]", author.id).bold(), author.name);
    println!("      phone:   {}", author.phone_number.as_deref().unwrap_or("-"));
    println!("      created: {}", author.created_at);
    println!("      updated: {}", author.updated_at.as_deref().unwrap_or("-"));
}

fn print_post(post: &PostInfo) {
    println!("  {} {}", format!("[{}]", post.id).bold(), post.title);
    println!("      category: {}", post.category.as_deref().unwrap_or("-"));
    if let Some(summary) = &post.summary {
        println!("      summary:  {summary}");
    }
    if let Some(content) = &post.content {
        println!("      content:  {} characters", content.chars().count());
    }
    println!("      created:  {}", post.created_at);
    println!("      updated:  {}", post.updated_at.as_deref().unwrap_or("-"));
}

impl AuthorResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Author {}:", self.action);
                print_author(&self.author);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl PostResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Post {}:", self.action);
                print_post(&self.post);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl AuthorListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.authors.is_empty() {
                    println!("No authors found.");
                    return;
                }
                println!("Authors:\n");
                for author in &self.authors {
                    print_author(author);
                    println!();
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl PostListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.posts.is_empty() {
                    println!("No posts found.");
                    return;
                }
                println!("Posts:\n");
                for post in &self.posts {
                    print_post(post);
                    println!();
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl OperationResult {
    /// A failed operation
    #[must_use]
    pub fn failed(message: impl Into<String>, field: Option<&str>) -> Self {
        Self {
            success: false,
            message: message.into(),
            field: field.map(String::from),
        }
    }

    /// Render the result based on output mode
    ///
    /// Human mode writes to stderr.
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => eprintln!("{} {}", "error:".red().bold(), self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
