/// Maintenance edit of an existing entry
///
/// An edit is keyed by the immutable date and overwrites the four mutable
/// fields (intensity, migraine, medicine, comment). Editing a date with no
/// entry fails; the date itself never changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HeadacheRecord, Intensity};
use crate::storage::DiaryStorage;
use crate::AppError;

/// Parameters for editing an existing entry
#[derive(Debug, Deserialize)]
pub struct EditEntryParams {
    /// ISO date of the entry to edit
    pub date: String,
    /// Raw intensity value, 0..=3
    pub intensity: i64,
    pub migraine: bool,
    pub medicine: bool,
    pub comment: Option<String>,
}

/// Response from editing an entry
#[derive(Debug, Serialize)]
pub struct EditEntryResponse {
    pub date: String,
    pub message: String,
}

/// Overwrite the mutable fields of the entry for the given date
pub fn edit_entry<S: DiaryStorage>(
    storage: &S,
    params: EditEntryParams,
) -> Result<EditEntryResponse, AppError> {
    let date = NaiveDate::parse_from_str(&params.date, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(params.date.clone()))?;
    let intensity = Intensity::from_value(params.intensity)?;

    let record = HeadacheRecord::new(date, intensity, params.migraine, params.medicine, params.comment);
    storage.update(&record)?;

    tracing::info!("Edited entry for {}", record.date_key());

    Ok(EditEntryResponse {
        date: record.date_key(),
        message: format!("Entry for {} updated.", record.date_key()),
    })
}
