//! Error types for the hero registry

use rusqlite::ErrorCode;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("Expected exactly one matching row, found {found}")]
    NotExactlyOne { found: usize },

    #[error("{entity} {id} no longer exists in the store and cannot be refreshed")]
    StaleReference { entity: &'static str, id: i64 },

    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Database error: {0}")]
    Database(rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database path not provided and {env_var} environment variable not set")]
    MissingDatabasePath { env_var: String },

    #[error("Change set refers to staged team #{index}, which does not exist")]
    InvalidPendingTeam { index: usize },
}

impl RegistryError {
    /// True when the failure came from a store-level constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, RegistryError::ConstraintViolation { .. })
    }
}

impl From<rusqlite::Error> for RegistryError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => RegistryError::ConstraintViolation {
                message: err.to_string(),
            },
            Some(
                ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::ReadOnly,
            ) => RegistryError::StoreUnavailable {
                message: err.to_string(),
            },
            _ => RegistryError::Database(err),
        }
    }
}
