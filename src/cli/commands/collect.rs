use crate::calendar::{CalendarClient, token};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::categorize::categorize;
use crate::core::normalize::normalize_all;
use crate::core::prompt::read_direction_and_days;
use crate::core::range::{Direction, compute_range};
use crate::core::summary::summarize;
use crate::errors::{AppError, AppResult};
use crate::export::csv::{write_categorized_csv, write_header_only};
use crate::ui::messages::{info, success, warning};
use chrono::{SecondsFormat, Utc};
use std::io;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Collect {
        direction,
        days,
        no_chart,
    } = cmd
    {
        let (direction, days) = resolve_window(direction.as_deref(), *days)?;

        let now = Utc::now();
        let (time_min, time_max) = compute_range(direction, days, now)?;

        info(format!(
            "Date range: Start={}, End={}",
            time_min.to_rfc3339_opts(SecondsFormat::Secs, true),
            time_max.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));

        let access_token = token::access_token(cfg, now)?;
        let client = CalendarClient::new();
        let raw = client.list_events(&access_token, &cfg.calendar_id, time_min, time_max)?;

        info(format!("Number of events fetched: {}", raw.len()));

        if raw.is_empty() {
            warning("No events found in the specified range.");
            if cfg.clear_on_empty {
                write_header_only(Path::new(&cfg.csv_file))?;
                info("Cleared previous CSV data (clear_on_empty is set).");
            }
            return Ok(());
        }

        let normalized = normalize_all(&raw);
        let index = categorize(&normalized);

        if index.is_empty() {
            warning("None of the fetched events have a numeric category prefix.");
            if cfg.clear_on_empty {
                write_header_only(Path::new(&cfg.csv_file))?;
            }
            return Ok(());
        }

        write_categorized_csv(Path::new(&cfg.csv_file), &index)?;
        success(format!(
            "Categorized {} events into {} categories: {}",
            index.event_count(),
            index.len(),
            cfg.csv_file
        ));

        if !*no_chart {
            let summary = summarize(Path::new(&cfg.csv_file))?;
            if summary.is_empty() {
                warning("All categorized events have unknown durations, skipping chart.");
            } else {
                crate::chart::html::write_chart(Path::new(&cfg.chart_file), &summary)?;
                success(format!("Chart saved to {}", cfg.chart_file));
            }
        }
    }
    Ok(())
}

/// Take direction/days from the flags when both given, otherwise fall
/// back to the interactive prompt loop on stdin.
fn resolve_window(direction: Option<&str>, days: Option<i64>) -> AppResult<(Direction, i64)> {
    match (direction, days) {
        (Some(direction), Some(days)) => {
            let direction: Direction = direction.parse()?;
            if days < 1 {
                return Err(AppError::InvalidInput(format!(
                    "day count must be a positive integer, got {}",
                    days
                )));
            }
            Ok((direction, days))
        }
        _ => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            Ok(read_direction_and_days(&mut input, &mut out)?)
        }
    }
}
