use crate::models::event::{
    DurationHours, NO_END_TIME, NO_START_TIME, NO_TITLE, NormalizedEvent, RawEvent,
};
use chrono::DateTime;

/// Apply defaults and sentinels to a raw event and compute its duration.
/// Never fails: missing fields become sentinels, unparseable timestamps
/// become an Unknown duration.
pub fn normalize(raw: &RawEvent) -> NormalizedEvent {
    let title = match raw.title.as_deref() {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => NO_TITLE.to_string(),
    };

    let start = raw.start.clone().unwrap_or_else(|| NO_START_TIME.to_string());
    let end = raw.end.clone().unwrap_or_else(|| NO_END_TIME.to_string());

    // Only attempt duration math when both timestamps are real.
    let duration = if raw.start.is_some() && raw.end.is_some() {
        duration_hours(&start, &end)
    } else {
        DurationHours::Unknown
    };

    NormalizedEvent {
        title,
        start,
        end,
        duration,
    }
}

/// Normalize a batch and sort ascending by the raw start string.
/// Lexicographic order on well-formed ISO-8601 strings is chronological;
/// sentinel starts sort after the digits and end up at the tail.
pub fn normalize_all(raw: &[RawEvent]) -> Vec<NormalizedEvent> {
    let mut events: Vec<NormalizedEvent> = raw.iter().map(normalize).collect();
    events.sort_by(|a, b| a.start.cmp(&b.start));
    events
}

/// (end - start) in hours. Negative when end precedes start: the source
/// data is third-party and chronological sanity is not validated here.
fn duration_hours(start: &str, end: &str) -> DurationHours {
    match (
        DateTime::parse_from_rfc3339(start),
        DateTime::parse_from_rfc3339(end),
    ) {
        (Ok(s), Ok(e)) => DurationHours::Hours((e - s).num_milliseconds() as f64 / 3_600_000.0),
        _ => DurationHours::Unknown,
    }
}
