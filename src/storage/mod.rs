/// Storage layer for persisting diary entries
///
/// This module handles all database operations using SQLite. It provides
/// a small interface for inserting, updating and reading headache records,
/// with the date-range filters the report window needs.

pub mod schema;
pub mod sqlite;

// Re-export the main storage types
pub use sqlite::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::HeadacheRecord;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Schema creation failed: {0}")]
    Schema(String),

    #[error("An entry for {date} already exists")]
    DuplicateDate { date: String },

    #[error("No entry found for {date}")]
    NotFound { date: String },
}

/// Ordering of report rows by date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Ascending unless the newest-first option is set
    pub fn from_newest_first(newest_first: bool) -> Self {
        if newest_first {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// Trait defining the storage interface for diary entries
///
/// This trait keeps the validation and report code independent of the
/// concrete database, which also makes them easy to exercise in tests.
pub trait DiaryStorage {
    /// Persist a new entry; fails if its date is already recorded
    fn insert(&self, record: &HeadacheRecord) -> Result<(), StorageError>;

    /// Overwrite the mutable fields of the entry keyed by the record's date
    fn update(&self, record: &HeadacheRecord) -> Result<(), StorageError>;

    /// Whether an entry exists for the given ISO date key
    fn contains(&self, date_key: &str) -> Result<bool, StorageError>;

    /// Load a single entry by date
    fn get(&self, date_key: &str) -> Result<Option<HeadacheRecord>, StorageError>;

    /// Count entries on or after the given ISO date floor
    fn count_since(&self, floor: &str) -> Result<u64, StorageError>;

    /// Count entries of the given `YYYY-MM` month (string floor)
    fn count_for_month(&self, year_month: &str) -> Result<u64, StorageError>;

    /// Count all entries
    fn count_all(&self) -> Result<u64, StorageError>;

    /// Read entries on or after the given ISO date floor, ordered by date
    fn read_since(&self, floor: &str, order: SortOrder) -> Result<Vec<HeadacheRecord>, StorageError>;

    /// Read entries of the given `YYYY-MM` month, ordered by date
    fn read_for_month(
        &self,
        year_month: &str,
        order: SortOrder,
    ) -> Result<Vec<HeadacheRecord>, StorageError>;

    /// Read every entry, ordered by date
    fn read_all(&self, order: SortOrder) -> Result<Vec<HeadacheRecord>, StorageError>;
}
