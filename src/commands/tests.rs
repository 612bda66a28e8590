//! Unit tests for command handlers

use super::heroes::{format_listing, handle_list, HeroListing, ListParams};
use super::seed::{demo_roster, handle_seed};
use super::*;
use crate::storage::{Hero, HeroFilter, StoreOptions, Team};
use crate::{HeroId, Page, TeamId};

fn seeded_db() -> HeroDatabase {
    let db = HeroDatabase::open_in_memory(StoreOptions::default()).unwrap();
    handle_seed(&db).unwrap();
    db
}

#[test]
fn test_demo_roster_shape() {
    let roster = demo_roster();
    assert_eq!(roster.team_count(), 3);
    assert_eq!(roster.hero_count(), 5);
}

#[test]
fn test_seed_links_every_hero() {
    let db = seeded_db();
    let rows = db.select_with_join(&HeroFilter::new(), Page::all()).unwrap();

    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|(hero, team)| {
        let team = team.as_ref().unwrap();
        hero.team_id == Some(team.id)
    }));
}

#[test]
fn test_seed_twice_duplicates_rows_not_tables() {
    let db = seeded_db();
    handle_seed(&db).unwrap();

    assert_eq!(db.table_names().unwrap(), vec!["hero", "team"]);
    assert_eq!(db.select_heroes(&HeroFilter::new(), Page::all()).unwrap().len(), 10);
}

#[test]
fn test_list_with_max_age_and_paging() {
    let db = seeded_db();

    let listings = handle_list(
        &db,
        ListParams {
            max_age: Some(40),
            offset: 1,
            ..Default::default()
        },
    )
    .unwrap();

    // Under 40: Black Lion (35), Princess Sure-E (25); skip the first
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].hero.name, "Princess Sure-E");
    assert_eq!(listings[0].team.as_ref().unwrap().name, "Wakanda");
}

#[test]
fn test_list_by_name() {
    let db = seeded_db();

    let listings = handle_list(
        &db,
        ListParams {
            name: Some("Deadpond".to_string()),
            as_json: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].team.as_ref().unwrap().name, "Z-Force");
}

#[test]
fn test_format_listing_without_team() {
    let listing = HeroListing {
        hero: Hero {
            id: HeroId::new(3),
            name: "Deadpond".to_string(),
            secret_name: "Dive Wilson".to_string(),
            age: None,
            team_id: None,
        },
        team: None,
    };

    assert_eq!(
        format_listing(&listing),
        "   3  Deadpond (Dive Wilson), age ?  [no team]"
    );
}

#[test]
fn test_format_listing_with_team() {
    let listing = HeroListing {
        hero: Hero {
            id: HeroId::new(12),
            name: "Black Lion".to_string(),
            secret_name: "Trevor Challa".to_string(),
            age: Some(35),
            team_id: Some(TeamId::new(1)),
        },
        team: Some(Team {
            id: TeamId::new(1),
            name: "Wakanda".to_string(),
            headquarters: "Wakanda".to_string(),
        }),
    };

    assert_eq!(
        format_listing(&listing),
        "  12  Black Lion (Trevor Challa), age 35  [Wakanda @ Wakanda]"
    );
}

#[test]
fn test_resolve_database_path_prefers_explicit() {
    let path = resolve_database_path(Some(PathBuf::from("/tmp/explicit.db"))).unwrap();
    assert_eq!(path, PathBuf::from("/tmp/explicit.db"));
}

#[test]
fn test_handle_init_is_idempotent() {
    let db = HeroDatabase::open_in_memory(StoreOptions::default()).unwrap();
    handle_init(&db).unwrap();
    handle_init(&db).unwrap();
    assert_eq!(db.table_names().unwrap(), vec!["hero", "team"]);
}
