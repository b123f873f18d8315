//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Budyy - Know where you stand with money
#[derive(Parser)]
#[command(name = "budyy")]
#[command(about = "Money profile engine and answer store for Budyy", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "budyy.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set BUDYY_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Show database status (encryption, size, record count)
    Status,

    /// Manage stored questionnaire answers
    Answers {
        #[command(subcommand)]
        action: Option<AnswersAction>,
    },

    /// Show a user's money profile
    Profile {
        /// User id whose answers to profile
        user: String,

        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a profile from an answers JSON file without storing it
    Preview {
        /// JSON file with one answer record
        #[arg(short, long)]
        file: PathBuf,

        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a network.
        /// By default, the server requires an API key from BUDYY_API_KEYS.
        #[arg(long)]
        no_auth: bool,
    },
}

#[derive(Subcommand)]
pub enum AnswersAction {
    /// List users with stored answers
    List,

    /// Show a user's stored answers as JSON
    Show {
        /// User id
        user: String,
    },

    /// Import answers from a JSON file
    ///
    /// Accepts API field names or the questionnaire's q1..q16 column names.
    Import {
        /// JSON file with one answer record
        #[arg(short, long)]
        file: PathBuf,

        /// User id (defaults to the record's "user_id" field)
        #[arg(short, long)]
        user: Option<String>,

        /// Accept a record with required answers missing
        #[arg(long)]
        partial: bool,
    },

    /// Delete a user's stored answers
    Delete {
        /// User id
        user: String,
    },
}
