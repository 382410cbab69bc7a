use crate::errors::{AppError, AppResult};
use crate::models::category::CategorySummary;
use std::path::Path;

/// Reload the categorized events CSV and sum duration per category.
///
/// Rows whose Category or Duration column fails numeric parsing (the
/// "Unknown" durations in particular) are skipped, matching the cleanup
/// the chart step has always done. A missing file is reported as
/// `MissingSourceFile` so the caller can tell the user to collect first.
pub fn summarize(path: &Path) -> AppResult<CategorySummary> {
    if !path.exists() {
        return Err(AppError::MissingSourceFile(path.display().to_string()));
    }

    let mut rdr = csv::Reader::from_path(path)?;
    let mut summary = CategorySummary::default();

    for record in rdr.records() {
        let record = record?;

        let (Some(category), Some(duration)) = (record.get(0), record.get(4)) else {
            continue;
        };
        let Ok(category) = category.trim().parse::<u64>() else {
            continue;
        };
        let Ok(hours) = duration.trim().parse::<f64>() else {
            continue;
        };

        summary.add(category, hours);
    }

    Ok(summary)
}
