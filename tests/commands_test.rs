//! Integration tests for command handlers

use hero_registry::{
    commands::{
        heroes::{handle_delete, handle_update},
        open_database, resolve_database_path,
        seed::handle_seed,
    },
    cli::StoreArgs,
    storage::{HeroDatabase, HeroFilter, StoreOptions},
    Page, RegistryError, DATABASE_PATH_ENV_VAR,
};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_resolve_database_path_from_env_and_option() {
    std::env::set_var(DATABASE_PATH_ENV_VAR, "/tmp/from-env.db");

    let from_env = resolve_database_path(None).unwrap();
    assert_eq!(from_env, PathBuf::from("/tmp/from-env.db"));

    // Option should take precedence
    let explicit = resolve_database_path(Some(PathBuf::from("/tmp/explicit.db"))).unwrap();
    assert_eq!(explicit, PathBuf::from("/tmp/explicit.db"));

    std::env::remove_var(DATABASE_PATH_ENV_VAR);
}

#[test]
fn test_open_database_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("dir").join("heroes.db");

    let db = open_database(&StoreArgs {
        database: Some(path.clone()),
        echo: false,
    })
    .unwrap();
    db.create_db_and_tables().unwrap();

    assert!(path.exists());
    assert_eq!(db.path(), path.as_path());
}

#[test]
fn test_update_and_delete_commands() {
    let db = HeroDatabase::open_in_memory(StoreOptions::default()).unwrap();
    handle_seed(&db).unwrap();

    let hero = handle_update(&db, "Spider-Boy", Some(16)).unwrap();
    assert_eq!(hero.age, Some(16));

    let cleared = handle_update(&db, "Spider-Boy", None).unwrap();
    assert_eq!(cleared.age, None);

    let deleted = handle_delete(&db, "Spider-Boy").unwrap();
    assert_eq!(deleted.id, hero.id);
    assert!(db
        .select_heroes(&HeroFilter::new().name("Spider-Boy"), Page::all())
        .unwrap()
        .is_empty());
}

#[test]
fn test_update_missing_hero_fails() {
    let db = HeroDatabase::open_in_memory(StoreOptions::default()).unwrap();
    handle_seed(&db).unwrap();

    match handle_update(&db, "Nobody", Some(1)) {
        Err(RegistryError::NotExactlyOne { found }) => assert_eq!(found, 0),
        other => panic!("Expected NotExactlyOne error, got {:?}", other),
    }
}
