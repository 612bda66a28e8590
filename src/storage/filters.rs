//! Row predicates for repository queries

use crate::cli::types::ids::TeamId;
use rusqlite::types::Value;

/// Predicate over the `hero` table. Conditions are ANDed; an empty filter
/// matches every hero.
///
/// Age comparisons never match heroes whose age is NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroFilter {
    pub name: Option<String>,
    pub age_lt: Option<u32>,
    pub age_gte: Option<u32>,
    pub team: Option<TeamId>,
    pub without_team: bool,
}

impl HeroFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age_lt(mut self, age: u32) -> Self {
        self.age_lt = Some(age);
        self
    }

    pub fn age_gte(mut self, age: u32) -> Self {
        self.age_gte = Some(age);
        self
    }

    pub fn team(mut self, team_id: TeamId) -> Self {
        self.team = Some(team_id);
        self
    }

    pub fn without_team(mut self) -> Self {
        self.without_team = true;
        self
    }

    /// Render as a SQL `WHERE` fragment against alias `h`, with its bound values.
    pub(crate) fn to_sql(&self) -> (String, Vec<Value>) {
        let mut clauses = Vec::new();
        let mut params = Vec::new();

        if let Some(name) = &self.name {
            clauses.push("h.name = ?");
            params.push(Value::Text(name.clone()));
        }
        if let Some(age) = self.age_lt {
            clauses.push("h.age < ?");
            params.push(Value::Integer(i64::from(age)));
        }
        if let Some(age) = self.age_gte {
            clauses.push("h.age >= ?");
            params.push(Value::Integer(i64::from(age)));
        }
        if let Some(team_id) = self.team {
            clauses.push("h.team_id = ?");
            params.push(Value::Integer(team_id.as_i64()));
        }
        if self.without_team {
            clauses.push("h.team_id IS NULL");
        }

        (where_clause(&clauses), params)
    }
}

/// Predicate over the `team` table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilter {
    pub name: Option<String>,
}

impl TeamFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Render as a SQL `WHERE` fragment against alias `t`.
    pub(crate) fn to_sql(&self) -> (String, Vec<Value>) {
        let mut clauses = Vec::new();
        let mut params = Vec::new();

        if let Some(name) = &self.name {
            clauses.push("t.name = ?");
            params.push(Value::Text(name.clone()));
        }

        (where_clause(&clauses), params)
    }
}

fn where_clause(clauses: &[&str]) -> String {
    if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_has_no_where_clause() {
        let (sql, params) = HeroFilter::new().to_sql();
        assert!(sql.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn test_conditions_are_anded_in_order() {
        let (sql, params) = HeroFilter::new().name("Deadpond").age_lt(35).to_sql();
        assert_eq!(sql, " WHERE h.name = ? AND h.age < ?");
        assert_eq!(
            params,
            vec![Value::Text("Deadpond".to_string()), Value::Integer(35)]
        );
    }

    #[test]
    fn test_without_team_binds_nothing() {
        let (sql, params) = HeroFilter::new().without_team().to_sql();
        assert_eq!(sql, " WHERE h.team_id IS NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn test_team_filter_by_name() {
        let (sql, params) = TeamFilter::new().name("Wakanda").to_sql();
        assert_eq!(sql, " WHERE t.name = ?");
        assert_eq!(params.len(), 1);
    }
}
