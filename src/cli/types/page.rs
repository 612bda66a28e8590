//! Offset/limit pagination.

use serde::{Deserialize, Serialize};

/// A window over an ordered result set.
///
/// Rows are skipped (`offset`) and then capped (`limit`) after ordering by
/// primary key. A `limit` of `None` returns every remaining row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub offset: u32,
    pub limit: Option<u32>,
}

impl Page {
    /// Every row, unpaged.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(offset: u32, limit: Option<u32>) -> Self {
        Self { offset, limit }
    }

    /// SQLite treats a negative LIMIT as "no limit".
    pub(crate) fn sql_limit(&self) -> i64 {
        self.limit.map(i64::from).unwrap_or(-1)
    }

    pub(crate) fn sql_offset(&self) -> i64 {
        i64::from(self.offset)
    }
}
