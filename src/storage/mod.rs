//! Storage layer for the hero registry
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `filters`: Row predicates for queries
//! - `schema`: Database connection and schema management
//! - `unit_of_work`: Scoped transactions over the shared connection
//! - `queries`: Repository operations

pub mod filters;
pub mod models;
pub mod queries;
pub mod schema;
pub mod unit_of_work;


// Re-export the main types and database struct for easy access
pub use filters::{HeroFilter, TeamFilter};
pub use models::*;
pub use schema::{HeroDatabase, StoreOptions};
pub use unit_of_work::UnitOfWork;
