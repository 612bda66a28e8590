//! ID types for heroes and teams.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Type-safe wrapper for store-assigned Hero ids.
///
/// The store assigns ids on insert. A [`Hero`](crate::storage::Hero) value
/// can be built with any id, but the repository never writes one: inserts
/// take a [`NewHero`](crate::storage::NewHero) and updates go through
/// [`HeroUpdate`](crate::storage::HeroUpdate), neither of which has an id.
///
/// # Examples
///
/// ```rust
/// use hero_registry::HeroId;
///
/// let hero_id = HeroId::new(7);
/// assert_eq!(hero_id.as_i64(), 7);
/// assert_eq!(hero_id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HeroId(pub i64);

impl HeroId {
    /// Create a new HeroId from a rowid.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying rowid.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HeroId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for store-assigned Team ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
