//! Command implementations for the hero registry CLI

pub mod heroes;
pub mod seed;
pub mod serve;

#[cfg(test)]
mod tests;

use crate::{
    cli::StoreArgs,
    storage::{HeroDatabase, StoreOptions},
    Result,
};
use std::path::PathBuf;

/// Resolve the database path from the CLI flag, the environment, or the default
pub fn resolve_database_path(database: Option<PathBuf>) -> Result<PathBuf> {
    HeroDatabase::resolve_path(database)
}

/// Open the process-wide database handle for a command
pub fn open_database(args: &StoreArgs) -> Result<HeroDatabase> {
    let path = resolve_database_path(args.database.clone())?;
    HeroDatabase::open(path, StoreOptions { echo: args.echo })
}

/// Handle the init command
pub fn handle_init(db: &HeroDatabase) -> Result<()> {
    db.create_db_and_tables()?;
    println!("✓ Tables ready at {}", db.path().display());
    Ok(())
}
