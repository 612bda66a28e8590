//! Type-safe wrappers for hero registry identifiers and paging.

pub mod ids;
pub mod page;

#[cfg(test)]
mod tests;
