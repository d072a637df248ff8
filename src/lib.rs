/// Public library interface for the headache diary
///
/// This module exports the diary session facade the presentation layer
/// talks to, together with the domain, storage, report and operation
/// types used by tests and embedding applications.

use std::path::PathBuf;

use chrono::Local;
use thiserror::Error;

// Internal modules
mod domain;
mod ops;
mod report;
mod storage;

// Re-export public modules and types
pub use domain::*;
pub use ops::*;
pub use report::*;
pub use storage::{DiaryStorage, SortOrder, SqliteStore, StorageError};

/// Errors that can occur while operating the diary
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One interactive diary session over a single database file
///
/// The session owns the store connection for the process lifetime and the
/// transient date cursor the entry form manipulates. The presentation
/// layer forwards picker events through `handle` and receives back the
/// validation status to render; saving persists the currently selected
/// date.
pub struct DiarySession {
    storage: SqliteStore,
    cursor: CalendarCursor,
}

impl DiarySession {
    /// Open (or create) the diary database and start on yesterday's date
    pub fn open(db_path: PathBuf) -> Result<Self, AppError> {
        tracing::info!("Opening diary at {:?}", db_path);

        let storage = SqliteStore::new(db_path)?;
        let cursor = CalendarCursor::yesterday(Local::now().date_naive());

        Ok(Self { storage, cursor })
    }

    /// The currently selected candidate date
    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    /// Apply a date-picker event and validate the resulting date
    pub fn handle(&mut self, event: CursorEvent) -> Result<DateStatus, AppError> {
        let today = Local::now().date_naive();
        self.cursor.apply(event, today);
        Ok(check_date(&self.storage, &self.cursor, today)?)
    }

    /// Save an entry for the currently selected date
    pub fn save_current(
        &self,
        intensity: i64,
        migraine: bool,
        medicine: bool,
        comment: Option<String>,
    ) -> Result<SaveEntryResponse, AppError> {
        let params = SaveEntryParams {
            date: Some(self.cursor.date_key()),
            intensity,
            migraine,
            medicine,
            comment,
        };
        save_entry(&self.storage, params, Local::now().date_naive())
    }

    /// Access the underlying store (used by the CLI and tests)
    pub fn storage(&self) -> &SqliteStore {
        &self.storage
    }
}
