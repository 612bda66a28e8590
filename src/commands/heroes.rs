//! List, update, and delete commands

use crate::{
    storage::{Hero, HeroDatabase, HeroFilter, HeroUpdate, Team},
    Page, Result,
};
use serde::Serialize;

/// One line of `list` output
#[derive(Debug, Clone, Serialize)]
pub struct HeroListing {
    pub hero: Hero,
    pub team: Option<Team>,
}

/// Parameters for the list command
#[derive(Debug, Default)]
pub struct ListParams {
    pub max_age: Option<u32>,
    pub name: Option<String>,
    pub offset: u32,
    pub limit: Option<u32>,
    pub as_json: bool,
}

impl ListParams {
    fn filter(&self) -> HeroFilter {
        let mut filter = HeroFilter::new();
        if let Some(age) = self.max_age {
            filter = filter.age_lt(age);
        }
        if let Some(name) = &self.name {
            filter = filter.name(name.clone());
        }
        filter
    }
}

/// Handle the list command
pub fn handle_list(db: &HeroDatabase, params: ListParams) -> Result<Vec<HeroListing>> {
    let rows = db.select_with_join(&params.filter(), Page::new(params.offset, params.limit))?;
    let listings: Vec<HeroListing> = rows
        .into_iter()
        .map(|(hero, team)| HeroListing { hero, team })
        .collect();

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
    } else if listings.is_empty() {
        println!("No heroes found");
    } else {
        for listing in &listings {
            println!("{}", format_listing(listing));
        }
    }

    Ok(listings)
}

pub(crate) fn format_listing(listing: &HeroListing) -> String {
    let hero = &listing.hero;
    let age = hero
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| "?".to_string());
    match &listing.team {
        Some(team) => format!(
            "{:>4}  {} ({}), age {}  [{} @ {}]",
            hero.id.as_i64(), hero.name, hero.secret_name, age, team.name, team.headquarters
        ),
        None => format!(
            "{:>4}  {} ({}), age {}  [no team]",
            hero.id.as_i64(), hero.name, hero.secret_name, age
        ),
    }
}

/// Handle the update command
pub fn handle_update(db: &HeroDatabase, name: &str, age: Option<u32>) -> Result<Hero> {
    let hero = db.update_by_filter(&HeroFilter::new().name(name), HeroUpdate::new().age(age))?;
    println!("✓ Updated hero: {:?}", hero);
    Ok(hero)
}

/// Handle the delete command
pub fn handle_delete(db: &HeroDatabase, name: &str) -> Result<Hero> {
    let filter = HeroFilter::new().name(name);
    let hero = db.delete_by_filter(&filter)?;
    println!("✓ Deleted hero: {:?}", hero);

    if db.select_heroes(&filter, Page::all())?.is_empty() {
        println!("There's no hero named {}", name);
    }
    Ok(hero)
}
