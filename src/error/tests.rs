//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod registry_error_tests {
    use super::*;

    fn constraint_failure() -> rusqlite::Error {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
            .unwrap();
        conn.execute("INSERT INTO t (name) VALUES (NULL)", [])
            .unwrap_err()
    }

    #[test]
    fn test_constraint_failure_conversion() {
        let error = RegistryError::from(constraint_failure());

        match &error {
            RegistryError::ConstraintViolation { message } => {
                assert!(message.contains("NOT NULL"));
            }
            _ => panic!("Expected ConstraintViolation error variant"),
        }
        assert!(error.is_constraint_violation());
    }

    #[test]
    fn test_other_sqlite_failure_conversion() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let sql_error = conn.execute("SELECT * FROM missing_table", []).unwrap_err();
        let error = RegistryError::from(sql_error);

        match error {
            RegistryError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_query_returned_no_rows_is_database_error() {
        let error = RegistryError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(error, RegistryError::Database(_)));
        assert!(!error.is_constraint_violation());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = RegistryError::from(io_error);

        match error {
            RegistryError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = RegistryError::from(json_error);

        match error {
            RegistryError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_not_exactly_one_display() {
        let none = RegistryError::NotExactlyOne { found: 0 };
        let many = RegistryError::NotExactlyOne { found: 3 };

        assert_eq!(none.to_string(), "Expected exactly one matching row, found 0");
        assert!(many.to_string().contains("found 3"));
    }

    #[test]
    fn test_stale_reference_display() {
        let error = RegistryError::StaleReference {
            entity: "Hero",
            id: 2,
        };
        assert_eq!(
            error.to_string(),
            "Hero 2 no longer exists in the store and cannot be refreshed"
        );
    }

    #[test]
    fn test_missing_database_path_error() {
        let error = RegistryError::MissingDatabasePath {
            env_var: "HERO_REGISTRY_DATABASE".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Database path not provided"));
        assert!(error_string.contains("HERO_REGISTRY_DATABASE"));
    }

    #[test]
    fn test_invalid_pending_team_display() {
        let error = RegistryError::InvalidPendingTeam { index: 4 };
        assert!(error.to_string().contains("#4"));
    }
}
