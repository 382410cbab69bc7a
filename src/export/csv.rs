use crate::errors::AppResult;
use crate::models::category::CategoryIndex;
use csv::Writer;
use std::fs;
use std::path::Path;

/// Column order is a compatibility contract: the summarize step and any
/// external consumer address columns by this exact header.
pub const CSV_HEADERS: [&str; 5] = ["Category", "Summary", "Start", "End", "Duration (hours)"];

/// Write every (category, event) pair as a flat row, overwriting the
/// file. Rows come out in category encounter order, then within-category
/// insertion order. Events without a category are not written at all.
pub fn write_categorized_csv(path: &Path, index: &CategoryIndex) -> AppResult<()> {
    ensure_parent(path)?;
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(CSV_HEADERS)?;

    for (category, events) in index.iter() {
        for ev in events {
            wtr.write_record(&[
                category.to_string(),
                ev.title.clone(),
                ev.start.clone(),
                ev.end.clone(),
                ev.duration.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Truncate the file to just the header. Used when a run fetched zero
/// events and the config asks for stale data to be cleared.
pub fn write_header_only(path: &Path) -> AppResult<()> {
    ensure_parent(path)?;
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(CSV_HEADERS)?;
    wtr.flush()?;
    Ok(())
}

/// First run writes into a directory that may not exist yet.
pub(crate) fn ensure_parent(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
