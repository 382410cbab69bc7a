use std::fmt;

/// Substituted when the provider supplied no title.
pub const NO_TITLE: &str = "No Title";
/// Sentinel for an absent start timestamp.
pub const NO_START_TIME: &str = "No Start Time";
/// Sentinel for an absent end timestamp.
pub const NO_END_TIME: &str = "No End Time";

/// Event as delivered by the calendar source, before normalization.
/// All-day events carry a bare date instead of a dateTime, so every
/// field may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEvent {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Event duration in hours, or `Unknown` when either timestamp is
/// absent or unparseable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationHours {
    Hours(f64),
    Unknown,
}

impl DurationHours {
    pub fn as_hours(&self) -> Option<f64> {
        match self {
            DurationHours::Hours(h) => Some(*h),
            DurationHours::Unknown => None,
        }
    }
}

impl fmt::Display for DurationHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationHours::Hours(h) => write!(f, "{}", h),
            DurationHours::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Normalized event: defaults and sentinels applied, duration computed.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub title: String,
    pub start: String, // ISO-8601 or NO_START_TIME
    pub end: String,   // ISO-8601 or NO_END_TIME
    pub duration: DurationHours,
}
