//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use bylines::config::GlobalConfig;
use bylines::core::services::StoreError;
use bylines::output::{OperationResult, OutputMode};

/// bylines - Authors and posts with write-time validation
#[derive(Parser, Debug)]
#[command(
    name = "bylines",
    version,
    about = "Authors and posts with write-time validation",
    long_about = "Keep a small collection of authors and posts.\n\n\
                  Every create and update is checked against the editorial rules:\n\
                  unique author names, ten digit phone numbers, clickbait titles,\n\
                  long enough content, short enough summaries, known categories."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Records file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage authors (add, update, show, list, remove)
    Author {
        #[command(subcommand)]
        action: AuthorAction,
    },

    /// Manage posts (add, update, show, list, remove)
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum AuthorAction {
    /// Add an author
    Add {
        /// Author name (must be unique)
        name: String,

        /// Ten digit phone number
        #[arg(short, long)]
        phone: Option<String>,
    },

    /// Change fields of an author
    Update {
        /// Author ID
        id: u64,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New ten digit phone number
        #[arg(short, long, conflicts_with = "clear_phone")]
        phone: Option<String>,

        /// Remove the phone number
        #[arg(long)]
        clear_phone: bool,
    },

    /// Show one author
    Show {
        /// Author ID
        id: u64,
    },

    /// List authors
    List,

    /// Remove an author
    Remove {
        /// Author ID
        id: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum PostAction {
    /// Add a post
    Add {
        /// Post title (must contain Won't Believe, Secret, Top or Guess)
        title: String,

        /// Body text (at least 250 characters)
        #[arg(short, long)]
        content: Option<String>,

        /// Teaser (at most 250 characters)
        #[arg(short, long)]
        summary: Option<String>,

        /// Category: Fiction or Non-Fiction
        #[arg(long)]
        category: Option<String>,
    },

    /// Change fields of a post
    Update {
        /// Post ID
        id: u64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New body text
        #[arg(short, long, conflicts_with = "clear_content")]
        content: Option<String>,

        /// Remove the body text
        #[arg(long)]
        clear_content: bool,

        /// New teaser
        #[arg(short, long, conflicts_with = "clear_summary")]
        summary: Option<String>,

        /// Remove the teaser
        #[arg(long)]
        clear_summary: bool,

        /// New category
        #[arg(long, conflicts_with = "clear_category")]
        category: Option<String>,

        /// Remove the category
        #[arg(long)]
        clear_category: bool,
    },

    /// Show one post
    Show {
        /// Post ID
        id: u64,
    },

    /// List posts
    List,

    /// Remove a post
    Remove {
        /// Post ID
        id: u64,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = GlobalConfig::load().with_records_path(cli.data);
    log::debug!("using {} backend at {}", config.store.backend, config.store.path.display());

    let result = match cli.command {
        Some(Command::Author { action }) => commands::author_cmd(action, &config, output_mode),
        Some(Command::Post { action }) => commands::post_cmd(action, &config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("bylines v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("bylines v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'bylines --help' for usage");
                println!("Run 'bylines author add <name>' to get started");
            }
            Ok(())
        },
    };

    if let Err(err) = result {
        let field = err
            .downcast_ref::<StoreError>()
            .and_then(StoreError::validation)
            .map(|v| v.field());
        OperationResult::failed(format!("{err:#}"), field).render(output_mode);
        std::process::exit(1);
    }

    Ok(())
}
