//! Hero Registry Library
//!
//! A small data-access layer over SQLite for heroes and the teams they
//! belong to, with a command line front end and a minimal HTTP API.
//!
//! ## Features
//!
//! - **Schema Management**: Idempotent creation of the `team` and `hero` tables
//! - **Relationship Cascade**: Insert heroes together with not-yet-saved teams in one commit
//! - **Outer Join Queries**: Heroes paired with their team (or none), filtered and paged
//! - **Exactly-One Updates/Deletes**: Filters that match zero or several rows fail loudly
//! - **Explicit Reloads**: Refresh a value from the store; refreshing a deleted row is an error
//! - **HTTP API**: `POST /heroes` and `GET /heroes`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hero_registry::storage::*;
//! use hero_registry::Page;
//!
//! # fn example() -> hero_registry::Result<()> {
//! let db = HeroDatabase::open("database.db", StoreOptions::default())?;
//! db.create_db_and_tables()?;
//!
//! let mut changes = ChangeSet::new();
//! let z_force = changes.team(NewTeam::new("Z-Force", "Sister Margaret's Bar"));
//! changes.hero(NewHero::new("Deadpond", "Dive Wilson").team(z_force));
//! db.create_with_relationships(changes)?;
//!
//! for (hero, team) in db.select_with_join(&HeroFilter::new(), Page::all())? {
//!     println!("{} -> {:?}", hero.name, team.map(|t| t.name));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database location to avoid passing it in every command:
//! ```bash
//! export HERO_REGISTRY_DATABASE=/path/to/database.db
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    ids::{HeroId, TeamId},
    page::Page,
};
pub use error::{RegistryError, Result};
pub use storage::{Hero, HeroDatabase, Team};

pub const DATABASE_PATH_ENV_VAR: &str = "HERO_REGISTRY_DATABASE";
