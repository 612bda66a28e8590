//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Options shared by every command
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// Database file (or set `HERO_REGISTRY_DATABASE` env var).
    #[clap(long, short = 'd', global = true)]
    pub database: Option<PathBuf>,

    /// Log every SQL statement sent to the database.
    #[clap(long, global = true)]
    pub echo: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "hero-registry", about = "Heroes, teams, and the store that keeps them")]
pub struct HeroCli {
    #[clap(flatten)]
    pub store: StoreArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the database tables (safe to run repeatedly).
    Init,

    /// Insert the demo teams and heroes in a single commit.
    Seed,

    /// List heroes with their team.
    List {
        /// Only heroes younger than this age.
        #[clap(long)]
        max_age: Option<u32>,

        /// Only heroes with this exact name.
        #[clap(long, short = 'n')]
        name: Option<String>,

        /// Skip this many matching heroes.
        #[clap(long, default_value_t = 0)]
        offset: u32,

        /// Return at most this many heroes.
        #[clap(long)]
        limit: Option<u32>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Change the age of the single hero with the given name.
    Update {
        /// Hero name (must match exactly one hero).
        #[clap(long, short = 'n')]
        name: String,

        /// New age.
        #[clap(long, conflicts_with = "clear_age", required_unless_present = "clear_age")]
        age: Option<u32>,

        /// Set the age to unknown.
        #[clap(long)]
        clear_age: bool,
    },

    /// Delete the single hero with the given name.
    Delete {
        /// Hero name (must match exactly one hero).
        #[clap(long, short = 'n')]
        name: String,
    },

    /// Serve the HTTP API.
    Serve {
        /// Bind address
        #[clap(long, short, default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on
        #[clap(long, short, default_value_t = 8000)]
        port: u16,
    },
}
