//! Data models for the storage layer

use crate::cli::types::ids::{HeroId, TeamId};
use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};

/// Team as stored in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub headquarters: String,
}

/// Hero as stored in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub secret_name: String,
    pub age: Option<u32>,
    pub team_id: Option<TeamId>,
}

/// A team that has not been inserted yet.
///
/// Heroes staged through [`NewTeam::with_hero`] are linked to this team when
/// the change set is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub headquarters: String,
    pub heroes: Vec<NewHero>,
}

impl NewTeam {
    pub fn new(name: impl Into<String>, headquarters: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            headquarters: headquarters.into(),
            heroes: Vec::new(),
        }
    }

    /// Add a hero on the "many" side of the relationship.
    pub fn with_hero(mut self, hero: NewHero) -> Self {
        self.heroes.push(hero);
        self
    }
}

/// Reference from an unsaved hero to its team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRef {
    /// A team already in the store.
    Saved(TeamId),
    /// A team staged in the same [`ChangeSet`], by staging position.
    Pending(PendingTeam),
}

/// Handle returned by [`ChangeSet::team`]; resolves to a [`TeamId`] on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTeam(pub(crate) usize);

impl PendingTeam {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<PendingTeam> for TeamRef {
    fn from(pending: PendingTeam) -> Self {
        TeamRef::Pending(pending)
    }
}

impl From<TeamId> for TeamRef {
    fn from(id: TeamId) -> Self {
        TeamRef::Saved(id)
    }
}

/// A hero that has not been inserted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
    pub secret_name: String,
    pub age: Option<u32>,
    pub team: Option<TeamRef>,
}

impl NewHero {
    pub fn new(name: impl Into<String>, secret_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret_name: secret_name.into(),
            age: None,
            team: None,
        }
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn team(mut self, team: impl Into<TeamRef>) -> Self {
        self.team = Some(team.into());
        self
    }
}

/// Everything to insert in a single unit-of-work.
///
/// ```rust
/// use hero_registry::storage::{ChangeSet, NewHero, NewTeam};
///
/// let mut changes = ChangeSet::new();
/// let z_force = changes.team(NewTeam::new("Z-Force", "Sister Margaret's Bar"));
/// changes.hero(NewHero::new("Deadpond", "Dive Wilson").team(z_force));
/// changes.team(
///     NewTeam::new("Wakanda", "Wakanda")
///         .with_hero(NewHero::new("Black Lion", "Trevor Challa").age(35)),
/// );
/// assert_eq!(changes.team_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub(crate) teams: Vec<NewTeam>,
    pub(crate) heroes: Vec<NewHero>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a team and get a handle heroes can point at before it has an id.
    pub fn team(&mut self, team: NewTeam) -> PendingTeam {
        self.teams.push(team);
        PendingTeam(self.teams.len() - 1)
    }

    pub fn hero(&mut self, hero: NewHero) {
        self.heroes.push(hero);
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn hero_count(&self) -> usize {
        self.heroes.len() + self.teams.iter().map(|t| t.heroes.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.heroes.is_empty()
    }

    /// Fail fast on pending references that point outside this change set.
    ///
    /// Only heroes staged directly are checked. A hero staged on a team
    /// always joins that team and its own reference is never read.
    pub(crate) fn validate(&self) -> Result<()> {
        for hero in &self.heroes {
            if let Some(TeamRef::Pending(PendingTeam(index))) = hero.team {
                if index >= self.teams.len() {
                    return Err(RegistryError::InvalidPendingTeam { index });
                }
            }
        }
        Ok(())
    }
}

/// Rows written by a change set, with their assigned ids.
///
/// Teams appear in staging order. Heroes staged directly come first, then
/// heroes staged on a team, team by team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Created {
    pub teams: Vec<Team>,
    pub heroes: Vec<Hero>,
}

impl Created {
    pub fn hero_named(&self, name: &str) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.name == name)
    }

    pub fn team_named(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }
}

/// Field changes for an existing hero. `None` leaves a field untouched.
///
/// There is no id field; a stored id never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroUpdate {
    pub name: Option<String>,
    pub secret_name: Option<String>,
    pub age: Option<Option<u32>>,
    pub team_id: Option<Option<TeamId>>,
}

impl HeroUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn secret_name(mut self, secret_name: impl Into<String>) -> Self {
        self.secret_name = Some(secret_name.into());
        self
    }

    pub fn age(mut self, age: Option<u32>) -> Self {
        self.age = Some(age);
        self
    }

    pub fn team(mut self, team_id: Option<TeamId>) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.secret_name.is_none()
            && self.age.is_none()
            && self.team_id.is_none()
    }

    pub(crate) fn apply(&self, hero: &mut Hero) {
        if let Some(name) = &self.name {
            hero.name = name.clone();
        }
        if let Some(secret_name) = &self.secret_name {
            hero.secret_name = secret_name.clone();
        }
        if let Some(age) = self.age {
            hero.age = age;
        }
        if let Some(team_id) = self.team_id {
            hero.team_id = team_id;
        }
    }
}

/// Request body for creating a hero. Clients cannot pick the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroCreate {
    pub name: String,
    pub secret_name: String,
    #[serde(default)]
    pub age: Option<u32>,
}

impl From<HeroCreate> for NewHero {
    fn from(create: HeroCreate) -> Self {
        Self {
            name: create.name,
            secret_name: create.secret_name,
            age: create.age,
            team: None,
        }
    }
}

/// Response body for a created hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroRead {
    pub id: HeroId,
    pub name: String,
    pub secret_name: String,
    pub age: Option<u32>,
}

impl From<Hero> for HeroRead {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            secret_name: hero.secret_name,
            age: hero.age,
        }
    }
}
