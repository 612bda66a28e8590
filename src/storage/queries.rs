//! Repository operations. Each call runs in its own unit-of-work.

use super::{
    filters::{HeroFilter, TeamFilter},
    models::*,
    schema::HeroDatabase,
    unit_of_work::UnitOfWork,
};
use crate::cli::types::{ids::TeamId, page::Page};
use crate::error::{RegistryError, Result};
use tracing::debug;

impl HeroDatabase {
    /// Insert every team and hero in `changes` in one transaction.
    ///
    /// Teams go in first so pending team references can be swapped for the
    /// ids the store just assigned; heroes are then inserted with their
    /// `team_id` already resolved. Any failure rolls back the whole batch.
    pub fn create_with_relationships(&self, changes: ChangeSet) -> Result<Created> {
        changes.validate()?;
        debug!(
            teams = changes.team_count(),
            heroes = changes.hero_count(),
            "Creating heroes and teams"
        );

        self.unit_of_work(|uow| {
            let mut created = Created::default();
            let mut team_members = Vec::new();

            for team in changes.teams {
                let saved = uow.insert_team(&team.name, &team.headquarters)?;
                team_members.push((saved.id, team.heroes));
                created.teams.push(saved);
            }

            let resolve = |team: Option<TeamRef>| -> Result<Option<TeamId>> {
                match team {
                    None => Ok(None),
                    Some(TeamRef::Saved(id)) => Ok(Some(id)),
                    Some(TeamRef::Pending(pending)) => created
                        .teams
                        .get(pending.index())
                        .map(|t| Some(t.id))
                        .ok_or(RegistryError::InvalidPendingTeam {
                            index: pending.index(),
                        }),
                }
            };

            let mut heroes = Vec::new();
            for hero in changes.heroes {
                let team_id = resolve(hero.team)?;
                heroes.push(insert_new_hero(uow, &hero, team_id)?);
            }
            // Heroes staged on a team belong to it, whatever their own ref says.
            for (team_id, members) in team_members {
                for hero in members {
                    heroes.push(insert_new_hero(uow, &hero, Some(team_id))?);
                }
            }

            created.heroes = heroes;
            Ok(created)
        })
    }

    /// Insert a single hero with no team.
    pub fn create_hero(&self, hero: HeroCreate) -> Result<Hero> {
        let hero = NewHero::from(hero);
        self.unit_of_work(|uow| insert_new_hero(uow, &hero, None))
    }

    /// Heroes paired with their team, or `None` when they have no team.
    ///
    /// Ordered by hero id; `page` applies after the filter.
    pub fn select_with_join(
        &self,
        filter: &HeroFilter,
        page: Page,
    ) -> Result<Vec<(Hero, Option<Team>)>> {
        self.unit_of_work(|uow| uow.find_heroes_with_team(filter, page))
    }

    pub fn select_heroes(&self, filter: &HeroFilter, page: Page) -> Result<Vec<Hero>> {
        self.unit_of_work(|uow| uow.find_heroes(filter, page))
    }

    pub fn select_teams(&self, filter: &TeamFilter) -> Result<Vec<Team>> {
        self.unit_of_work(|uow| uow.find_teams(filter))
    }

    /// The "many" side of a team, read from the store.
    pub fn heroes_of_team(&self, team_id: TeamId) -> Result<Vec<Hero>> {
        self.select_heroes(&HeroFilter::new().team(team_id), Page::all())
    }

    /// Apply `update` to the single hero matching `filter`.
    ///
    /// Returns the row as re-read from the store inside the same
    /// transaction that wrote it. Fails with [`RegistryError::NotExactlyOne`]
    /// unless exactly one hero matches.
    pub fn update_by_filter(&self, filter: &HeroFilter, update: HeroUpdate) -> Result<Hero> {
        self.unit_of_work(|uow| {
            let mut hero = single_hero(uow, filter)?;
            debug!(hero_id = %hero.id, "Updating hero");
            update.apply(&mut hero);
            uow.save_hero(&hero)?;
            uow.hero_by_id(hero.id)?
                .ok_or(RegistryError::StaleReference {
                    entity: "Hero",
                    id: hero.id.as_i64(),
                })
        })
    }

    /// Delete the single hero matching `filter`.
    ///
    /// The returned value is the hero as it was just before deletion. It is
    /// detached: passing it to [`refresh_hero`](Self::refresh_hero) fails with
    /// [`RegistryError::StaleReference`].
    pub fn delete_by_filter(&self, filter: &HeroFilter) -> Result<Hero> {
        self.unit_of_work(|uow| {
            let hero = single_hero(uow, filter)?;
            debug!(hero_id = %hero.id, "Deleting hero");
            uow.delete_hero(hero.id)?;
            Ok(hero)
        })
    }

    /// Delete the single team matching `filter`.
    ///
    /// Nothing cascades: while heroes still reference the team the store
    /// rejects the delete with a constraint violation.
    pub fn delete_team_by_filter(&self, filter: &TeamFilter) -> Result<Team> {
        self.unit_of_work(|uow| {
            let team = exactly_one(uow.count_teams(filter)?, || uow.find_teams(filter))?;
            debug!(team_id = %team.id, "Deleting team");
            uow.delete_team(team.id)?;
            Ok(team)
        })
    }

    /// Reload `hero` from the store.
    pub fn refresh_hero(&self, hero: &Hero) -> Result<Hero> {
        self.unit_of_work(|uow| {
            uow.hero_by_id(hero.id)?
                .ok_or(RegistryError::StaleReference {
                    entity: "Hero",
                    id: hero.id.as_i64(),
                })
        })
    }

    /// Reload `team` from the store.
    pub fn refresh_team(&self, team: &Team) -> Result<Team> {
        self.unit_of_work(|uow| {
            uow.team_by_id(team.id)?
                .ok_or(RegistryError::StaleReference {
                    entity: "Team",
                    id: team.id.as_i64(),
                })
        })
    }
}

fn insert_new_hero(uow: &UnitOfWork<'_>, hero: &NewHero, team_id: Option<TeamId>) -> Result<Hero> {
    uow.insert_hero(&hero.name, &hero.secret_name, hero.age, team_id)
}

fn single_hero(uow: &UnitOfWork<'_>, filter: &HeroFilter) -> Result<Hero> {
    exactly_one(uow.count_heroes(filter)?, || {
        uow.find_heroes(filter, Page::new(0, Some(1)))
    })
}

/// Rows are only fetched once the count says there is exactly one, so a
/// filter matching the whole table never loads it. Never silently pick the
/// first of several matches.
fn exactly_one<T>(found: usize, fetch: impl FnOnce() -> Result<Vec<T>>) -> Result<T> {
    if found != 1 {
        return Err(RegistryError::NotExactlyOne { found });
    }
    fetch()?
        .into_iter()
        .next()
        .ok_or(RegistryError::NotExactlyOne { found: 0 })
}
