use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

/// Whether the query window lies before or after the anchor instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Past,
    Future,
}

impl FromStr for Direction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "past" => Ok(Direction::Past),
            "future" => Ok(Direction::Future),
            other => Err(AppError::InvalidInput(format!(
                "direction must be 'past' or 'future', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Past => write!(f, "past"),
            Direction::Future => write!(f, "future"),
        }
    }
}

/// Compute the half-open UTC interval covering `days` days before or
/// after `now`. The anchor is passed in explicitly so tests do not
/// depend on the wall clock.
pub fn compute_range(
    direction: Direction,
    days: i64,
    now: DateTime<Utc>,
) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    if days < 1 {
        return Err(AppError::InvalidInput(format!(
            "day count must be a positive integer, got {}",
            days
        )));
    }

    let out_of_range = || AppError::InvalidInput(format!("day count out of range: {}", days));
    let span = Duration::try_days(days).ok_or_else(out_of_range)?;

    Ok(match direction {
        Direction::Past => (now.checked_sub_signed(span).ok_or_else(out_of_range)?, now),
        Direction::Future => (now, now.checked_add_signed(span).ok_or_else(out_of_range)?),
    })
}
