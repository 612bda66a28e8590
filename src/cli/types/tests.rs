//! Unit tests for id and paging types

use super::{ids::*, page::Page};

#[test]
fn test_hero_id_round_trip_through_str() {
    let id: HeroId = "42".parse().unwrap();
    assert_eq!(id, HeroId::new(42));
    assert_eq!(id.to_string(), "42");
}

#[test]
fn test_team_id_rejects_garbage() {
    assert!("not_a_number".parse::<TeamId>().is_err());
}

#[test]
fn test_ids_serialize_as_plain_integers() {
    let json = serde_json::to_string(&HeroId::new(3)).unwrap();
    assert_eq!(json, "3");

    let team: TeamId = serde_json::from_str("9").unwrap();
    assert_eq!(team.as_i64(), 9);
}

#[test]
fn test_page_all_has_no_limit() {
    let page = Page::all();
    assert_eq!(page.sql_offset(), 0);
    assert_eq!(page.sql_limit(), -1);
}

#[test]
fn test_page_with_limit() {
    let page = Page::new(2, Some(3));
    assert_eq!(page.sql_offset(), 2);
    assert_eq!(page.sql_limit(), 3);
}
