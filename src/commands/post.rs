//! Post command - manage posts

use bylines::config::GlobalConfig;
use bylines::core::models::{NewPost, Post, PostChanges};
use bylines::output::{OutputMode, PostInfo, PostListResult, PostResult};

use super::open_store;
use crate::cli::PostAction;

/// Handle post subcommands (add, update, show, list, remove)
pub fn post_cmd(action: PostAction, config: &GlobalConfig, mode: OutputMode) -> anyhow::Result<()> {
    let store = open_store(config);

    match action {
        PostAction::Add {
            title,
            content,
            summary,
            category,
        } => {
            let new = NewPost {
                title,
                content,
                summary,
                category,
            };
            let post = store.create_post(new)?;
            render("created", &post, mode);
        },
        PostAction::Update {
            id,
            title,
            content,
            clear_content,
            summary,
            clear_summary,
            category,
            clear_category,
        } => {
            let changes = PostChanges {
                title,
                content: optional_change(content, clear_content),
                summary: optional_change(summary, clear_summary),
                category: optional_change(category, clear_category),
            };
            if changes.is_empty() {
                anyhow::bail!(
                    "Nothing to update: pass --title, --content, --summary, --category or a --clear-* flag"
                );
            }
            let post = store.update_post(id, changes)?;
            render("updated", &post, mode);
        },
        PostAction::Show { id } => {
            let post = store.post(id)?;
            render("found", &post, mode);
        },
        PostAction::List => {
            let posts = store.posts()?;
            PostListResult {
                posts: posts.iter().map(PostInfo::from).collect(),
            }
            .render(mode);
        },
        PostAction::Remove { id } => {
            let post = store.delete_post(id)?;
            render("removed", &post, mode);
        },
    }

    Ok(())
}

/// Map a `--field` value and its `--clear-field` flag onto a change
fn optional_change(value: Option<String>, clear: bool) -> Option<Option<String>> {
    match (value, clear) {
        (Some(value), _) => Some(Some(value)),
        (None, true) => Some(None),
        (None, false) => None,
    }
}

fn render(action: &str, post: &Post, mode: OutputMode) {
    PostResult {
        action: action.to_string(),
        post: post.into(),
    }
    .render(mode);
}
