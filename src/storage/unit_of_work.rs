//! Scoped transactional context over the shared connection

use super::{models::*, schema::HeroDatabase};
use crate::cli::types::{
    ids::{HeroId, TeamId},
    page::Page,
};
use crate::error::Result;
use crate::storage::filters::{HeroFilter, TeamFilter};
use rusqlite::{params, params_from_iter, OptionalExtension, Row, Transaction};
use tracing::debug;

const HERO_COLUMNS: &str = "h.id, h.name, h.secret_name, h.age, h.team_id";
const TEAM_COLUMNS: &str = "t.id, t.name, t.headquarters";

/// One open transaction. Only reachable through
/// [`HeroDatabase::unit_of_work`], so it can never outlive its scope or be
/// shared between callers.
pub struct UnitOfWork<'conn> {
    tx: Transaction<'conn>,
}

impl HeroDatabase {
    /// Run `work` inside a transaction.
    ///
    /// Commits when `work` returns `Ok`. On `Err` (or a panic) the
    /// transaction is rolled back and nothing it wrote is visible. The
    /// connection is released on every path.
    pub fn unit_of_work<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&UnitOfWork<'_>) -> Result<T>,
    {
        let mut conn = self.connection();
        let uow = UnitOfWork {
            tx: conn.transaction()?,
        };

        match work(&uow) {
            Ok(value) => {
                uow.tx.commit()?;
                debug!("Unit of work committed");
                Ok(value)
            }
            Err(err) => {
                // Dropping the transaction rolls it back.
                drop(uow);
                debug!("Unit of work rolled back: {}", err);
                Err(err)
            }
        }
    }
}

impl UnitOfWork<'_> {
    pub fn insert_team(&self, name: &str, headquarters: &str) -> Result<Team> {
        self.tx.execute(
            "INSERT INTO team (name, headquarters) VALUES (?, ?)",
            params![name, headquarters],
        )?;
        Ok(Team {
            id: TeamId::new(self.tx.last_insert_rowid()),
            name: name.to_string(),
            headquarters: headquarters.to_string(),
        })
    }

    pub fn insert_hero(
        &self,
        name: &str,
        secret_name: &str,
        age: Option<u32>,
        team_id: Option<TeamId>,
    ) -> Result<Hero> {
        self.tx.execute(
            "INSERT INTO hero (name, secret_name, age, team_id) VALUES (?, ?, ?, ?)",
            params![name, secret_name, age, team_id.map(|id| id.as_i64())],
        )?;
        Ok(Hero {
            id: HeroId::new(self.tx.last_insert_rowid()),
            name: name.to_string(),
            secret_name: secret_name.to_string(),
            age,
            team_id,
        })
    }

    pub fn hero_by_id(&self, id: HeroId) -> Result<Option<Hero>> {
        let hero = self
            .tx
            .query_row(
                &format!("SELECT {HERO_COLUMNS} FROM hero h WHERE h.id = ?"),
                params![id.as_i64()],
                |row| row_to_hero(row, 0),
            )
            .optional()?;
        Ok(hero)
    }

    pub fn team_by_id(&self, id: TeamId) -> Result<Option<Team>> {
        let team = self
            .tx
            .query_row(
                &format!("SELECT {TEAM_COLUMNS} FROM team t WHERE t.id = ?"),
                params![id.as_i64()],
                |row| row_to_team(row, 0),
            )
            .optional()?;
        Ok(team)
    }

    pub fn find_heroes(&self, filter: &HeroFilter, page: Page) -> Result<Vec<Hero>> {
        let (where_sql, mut values) = filter.to_sql();
        let query =
            format!("SELECT {HERO_COLUMNS} FROM hero h{where_sql} ORDER BY h.id LIMIT ? OFFSET ?");
        values.push(page.sql_limit().into());
        values.push(page.sql_offset().into());

        let mut stmt = self.tx.prepare(&query)?;
        let heroes = stmt
            .query_map(params_from_iter(values.iter()), |row| row_to_hero(row, 0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(heroes)
    }

    /// Heroes LEFT OUTER JOIN their team; heroes without a team pair with `None`.
    pub fn find_heroes_with_team(
        &self,
        filter: &HeroFilter,
        page: Page,
    ) -> Result<Vec<(Hero, Option<Team>)>> {
        let (where_sql, mut values) = filter.to_sql();
        let query = format!(
            "SELECT {HERO_COLUMNS}, {TEAM_COLUMNS}
             FROM hero h LEFT OUTER JOIN team t ON h.team_id = t.id{where_sql}
             ORDER BY h.id LIMIT ? OFFSET ?"
        );
        values.push(page.sql_limit().into());
        values.push(page.sql_offset().into());

        let mut stmt = self.tx.prepare(&query)?;
        let rows = stmt
            .query_map(params_from_iter(values.iter()), |row| {
                let hero = row_to_hero(row, 0)?;
                let team = match row.get::<_, Option<i64>>(5)? {
                    Some(_) => Some(row_to_team(row, 5)?),
                    None => None,
                };
                Ok((hero, team))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn count_heroes(&self, filter: &HeroFilter) -> Result<usize> {
        let (where_sql, values) = filter.to_sql();
        let count: i64 = self.tx.query_row(
            &format!("SELECT COUNT(*) FROM hero h{where_sql}"),
            params_from_iter(values.iter()),
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    pub fn count_teams(&self, filter: &TeamFilter) -> Result<usize> {
        let (where_sql, values) = filter.to_sql();
        let count: i64 = self.tx.query_row(
            &format!("SELECT COUNT(*) FROM team t{where_sql}"),
            params_from_iter(values.iter()),
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    pub fn find_teams(&self, filter: &TeamFilter) -> Result<Vec<Team>> {
        let (where_sql, values) = filter.to_sql();
        let query = format!("SELECT {TEAM_COLUMNS} FROM team t{where_sql} ORDER BY t.id");

        let mut stmt = self.tx.prepare(&query)?;
        let teams = stmt
            .query_map(params_from_iter(values.iter()), |row| row_to_team(row, 0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(teams)
    }

    /// Write every column of `hero` back to its row.
    pub fn save_hero(&self, hero: &Hero) -> Result<usize> {
        let rows = self.tx.execute(
            "UPDATE hero SET name = ?, secret_name = ?, age = ?, team_id = ? WHERE id = ?",
            params![
                hero.name,
                hero.secret_name,
                hero.age,
                hero.team_id.map(|id| id.as_i64()),
                hero.id.as_i64()
            ],
        )?;
        Ok(rows)
    }

    pub fn delete_hero(&self, id: HeroId) -> Result<usize> {
        let rows = self
            .tx
            .execute("DELETE FROM hero WHERE id = ?", params![id.as_i64()])?;
        Ok(rows)
    }

    pub fn delete_team(&self, id: TeamId) -> Result<usize> {
        let rows = self
            .tx
            .execute("DELETE FROM team WHERE id = ?", params![id.as_i64()])?;
        Ok(rows)
    }
}

/// Map hero columns starting at `offset`
fn row_to_hero(row: &Row, offset: usize) -> rusqlite::Result<Hero> {
    Ok(Hero {
        id: HeroId::new(row.get(offset)?),
        name: row.get(offset + 1)?,
        secret_name: row.get(offset + 2)?,
        age: row.get(offset + 3)?,
        team_id: row.get::<_, Option<i64>>(offset + 4)?.map(TeamId::new),
    })
}

fn row_to_team(row: &Row, offset: usize) -> rusqlite::Result<Team> {
    Ok(Team {
        id: TeamId::new(row.get(offset)?),
        name: row.get(offset + 1)?,
        headquarters: row.get(offset + 2)?,
    })
}
