//! Author command - manage authors

use bylines::config::GlobalConfig;
use bylines::core::models::{Author, AuthorChanges, NewAuthor};
use bylines::output::{AuthorInfo, AuthorListResult, AuthorResult, OutputMode};

use super::open_store;
use crate::cli::AuthorAction;

/// Handle author subcommands (add, update, show, list, remove)
pub fn author_cmd(action: AuthorAction, config: &GlobalConfig, mode: OutputMode) -> anyhow::Result<()> {
    let store = open_store(config);

    match action {
        AuthorAction::Add { name, phone } => {
            let mut new = NewAuthor::new(name);
            new.phone_number = phone;
            let author = store.create_author(new)?;
            render("created", &author, mode);
        },
        AuthorAction::Update {
            id,
            name,
            phone,
            clear_phone,
        } => {
            let mut changes = AuthorChanges::default();
            if let Some(name) = name {
                changes = changes.name(name);
            }
            if let Some(phone) = phone {
                changes = changes.phone_number(phone);
            } else if clear_phone {
                changes = changes.clear_phone_number();
            }
            if changes.is_empty() {
                anyhow::bail!("Nothing to update: pass --name, --phone or --clear-phone");
            }
            let author = store.update_author(id, changes)?;
            render("updated", &author, mode);
        },
        AuthorAction::Show { id } => {
            let author = store.author(id)?;
            render("found", &author, mode);
        },
        AuthorAction::List => {
            let authors = store.authors()?;
            AuthorListResult {
                authors: authors.iter().map(AuthorInfo::from).collect(),
            }
            .render(mode);
        },
        AuthorAction::Remove { id } => {
            let author = store.delete_author(id)?;
            render("removed", &author, mode);
        },
    }

    Ok(())
}

fn render(action: &str, author: &Author, mode: OutputMode) {
    AuthorResult {
        action: action.to_string(),
        author: author.into(),
    }
    .render(mode);
}
