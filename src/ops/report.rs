/// Running a filtered report
///
/// Resolves the selected filter, fetches the matching count and the
/// ordered records, and produces the status line the presentation layer
/// shows under the report listing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::HeadacheRecord;
use crate::report::{run_filter, FilterKind};
use crate::storage::{DiaryStorage, SortOrder};
use crate::AppError;

/// Parameters for generating a report
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub filter: FilterKind,
    /// Most recent entries first when set
    pub newest_first: bool,
}

/// Response from generating a report
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub filter: FilterKind,
    pub count: u64,
    pub records: Vec<HeadacheRecord>,
    pub message: String,
}

/// Run the selected filter and assemble the report
pub fn run_report<S: DiaryStorage>(
    storage: &S,
    params: ReportParams,
    today: NaiveDate,
) -> Result<ReportResponse, AppError> {
    let order = SortOrder::from_newest_first(params.newest_first);
    let report = run_filter(storage, params.filter, order, today)?;

    let message = format!(
        "Report generated for {}. Returned items: {}",
        params.filter.description(),
        report.count
    );
    tracing::debug!("{}", message);

    Ok(ReportResponse {
        filter: params.filter,
        count: report.count,
        records: report.records,
        message,
    })
}
