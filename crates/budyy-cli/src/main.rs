//! Budyy CLI - money profiles from questionnaire answers
//!
//! Usage:
//!   budyy init                          Initialize database
//!   budyy answers import --file a.json  Store a user's answers
//!   budyy profile <user>                Show a user's money profile
//!   budyy serve --port 3000             Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Status => commands::cmd_status(&cli.db, cli.no_encrypt),
        Commands::Answers { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None | Some(AnswersAction::List) => commands::cmd_answers_list(&db),
                Some(AnswersAction::Show { user }) => commands::cmd_answers_show(&db, &user),
                Some(AnswersAction::Import {
                    file,
                    user,
                    partial,
                }) => commands::cmd_answers_import(&db, &file, user.as_deref(), partial),
                Some(AnswersAction::Delete { user }) => commands::cmd_answers_delete(&db, &user),
            }
        }
        Commands::Profile { user, json } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_profile(&db, &user, json)
        }
        Commands::Preview { file, json } => commands::cmd_preview(&file, json),
        Commands::Serve {
            port,
            host,
            no_auth,
        } => commands::cmd_serve(&cli.db, &host, port, no_auth, cli.no_encrypt).await,
    }
}
