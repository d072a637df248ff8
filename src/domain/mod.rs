/// Domain module containing core business logic and data types
///
/// This module defines the diary's core types (HeadacheRecord, Intensity,
/// CalendarCursor) together with the calendar arithmetic and the date
/// validation rules that decide what may be saved.

pub mod cursor;
pub mod record;
pub mod validate;

// Re-export public types for easy access
pub use cursor::*;
pub use record::*;
pub use validate::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid intensity: {0} (must be between 0 and 3)")]
    InvalidIntensity(i64),
}
