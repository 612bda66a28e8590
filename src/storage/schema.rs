//! Database schema and connection management

use crate::error::{RegistryError, Result};
use crate::DATABASE_PATH_ENV_VAR;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Table and index declarations. Every statement is `IF NOT EXISTS`, so
/// running the whole batch again is a no-op.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS team (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    headquarters TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS hero (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    secret_name TEXT NOT NULL,
    age INTEGER,
    team_id INTEGER REFERENCES team(id)
);

CREATE INDEX IF NOT EXISTS ix_team_name ON team(name);
CREATE INDEX IF NOT EXISTS ix_hero_name ON hero(name);
CREATE INDEX IF NOT EXISTS ix_hero_age ON hero(age);
CREATE INDEX IF NOT EXISTS ix_hero_team_id ON hero(team_id);
"#;

/// Connection options applied when the store is opened
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOptions {
    /// Log every SQL statement sent to SQLite.
    pub echo: bool,
}

/// Process-wide handle to the hero database.
///
/// Cloning is cheap; every clone shares one connection. Work against the
/// store goes through [`HeroDatabase::unit_of_work`], which holds the
/// connection exclusively for the duration of one transaction.
#[derive(Clone)]
pub struct HeroDatabase {
    pub(crate) conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl HeroDatabase {
    /// Open (or create) the database file at `path`.
    ///
    /// Tables are not created here; call [`create_db_and_tables`](Self::create_db_and_tables)
    /// once at startup.
    pub fn open(path: impl Into<PathBuf>, options: StoreOptions) -> Result<Self> {
        let path = path.into();

        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| RegistryError::StoreUnavailable {
                    message: format!("cannot create {}: {}", parent.display(), e),
                })?;
            }
        }

        info!("Opening database at {}", path.display());
        let conn = Connection::open(&path)?;
        Self::from_connection(conn, path, options)
    }

    /// Open a private in-memory database (tests and demos).
    pub fn open_in_memory(options: StoreOptions) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, PathBuf::from(":memory:"), options)
    }

    fn from_connection(mut conn: Connection, path: PathBuf, options: StoreOptions) -> Result<Self> {
        if options.echo {
            conn.trace(Some(echo_statement));
        }
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        })
    }

    /// Exclusive access to the shared connection.
    ///
    /// A panic inside a unit-of-work poisons the lock, but the transaction
    /// guard has already rolled back by then, so the connection is reused.
    pub(crate) fn connection(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pick the database path: explicit value, then the environment, then
    /// the per-user data directory.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }
        if let Ok(path) = std::env::var(DATABASE_PATH_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        Self::default_path()
    }

    /// Get the default path to the database file
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| RegistryError::MissingDatabasePath {
            env_var: DATABASE_PATH_ENV_VAR.to_string(),
        })?;
        Ok(data_dir.join("hero-registry").join("database.db"))
    }

    /// Create the `team` and `hero` tables and their indexes if missing.
    pub fn create_db_and_tables(&self) -> Result<()> {
        let conn = self.connection();
        conn.execute_batch(SCHEMA)?;
        debug!("Schema materialized");
        Ok(())
    }

    /// Names of the user tables currently in the store, sorted.
    pub fn table_names(&self) -> Result<Vec<String>> {
        let conn = self.connection();
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(names)
    }
}

fn echo_statement(sql: &str) {
    info!(target: "hero_registry::sql", "{}", sql.trim());
}
