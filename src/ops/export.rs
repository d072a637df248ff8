/// Exporting a filtered report to a text file
///
/// Renders the report text and writes it to the chosen path in a single
/// call, so the file either appears complete or not at all. Choosing the
/// path (and cancelling the save dialog) belongs to the presentation
/// layer.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::report::{render, run_filter, FilterKind};
use crate::storage::{DiaryStorage, SortOrder};
use crate::AppError;

/// Parameters for exporting a report
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub filter: FilterKind,
    pub newest_first: bool,
    /// Destination file path chosen by the caller
    pub path: PathBuf,
}

/// Response from exporting a report
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub path: PathBuf,
    pub items: u64,
    pub message: String,
}

/// Render the filtered report and write it to the destination file
pub fn export_report<S: DiaryStorage>(
    storage: &S,
    params: ExportParams,
    today: NaiveDate,
    generated_at: NaiveDateTime,
) -> Result<ExportResponse, AppError> {
    let order = SortOrder::from_newest_first(params.newest_first);
    let report = run_filter(storage, params.filter, order, today)?;

    let text = render(&report.records, generated_at);
    std::fs::write(&params.path, text)?;

    tracing::info!("Report exported to {:?}", params.path);

    let message = format!("Report exported to \"{}\".", params.path.display());
    Ok(ExportResponse {
        path: params.path,
        items: report.count,
        message,
    })
}
