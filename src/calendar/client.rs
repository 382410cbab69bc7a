use crate::errors::{AppError, AppResult};
use crate::models::event::RawEvent;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

const CALENDARS_URL: &str = "https://www.googleapis.com/calendar/v3/calendars";
const MAX_RESULTS: &str = "500";

/// Wire format of the events.list response. Only the fields the
/// normalizer cares about are deserialized.
#[derive(Debug, Deserialize)]
struct EventsResponse {
    #[serde(default)]
    items: Vec<EventItem>,
}

#[derive(Debug, Deserialize)]
struct EventItem {
    summary: Option<String>,
    start: Option<EventTime>,
    end: Option<EventTime>,
}

/// Timed events carry `dateTime`; all-day events carry `date` instead,
/// which is treated as absent (no instant to compute a duration from).
#[derive(Debug, Deserialize)]
struct EventTime {
    #[serde(rename = "dateTime")]
    date_time: Option<String>,
}

/// Synchronous Google Calendar events client.
pub struct CalendarClient {
    http: Client,
    base_url: String,
}

impl CalendarClient {
    pub fn new() -> Self {
        Self::with_base_url(CALENDARS_URL)
    }

    /// Point the client at a different endpoint (used by tests to talk
    /// to a local mock server).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the events of `calendar_id` within [time_min, time_max),
    /// expanded to single events and ordered by start time.
    pub fn list_events(
        &self,
        access_token: &str,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> AppResult<Vec<RawEvent>> {
        let mut url = Url::parse(&format!("{}/{}/events", self.base_url, calendar_id))
            .map_err(|e| AppError::Calendar(format!("failed to build events URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("timeMin", &time_min.to_rfc3339_opts(SecondsFormat::Secs, true))
            .append_pair("timeMax", &time_max.to_rfc3339_opts(SecondsFormat::Secs, true))
            .append_pair("maxResults", MAX_RESULTS)
            .append_pair("singleEvents", "true")
            .append_pair("orderBy", "startTime");

        let response = self.http.get(url).bearer_auth(access_token).send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .unwrap_or_else(|_| "could not read error response".to_string());
            return Err(AppError::Calendar(format!(
                "events request failed: HTTP {} - {}",
                status, body
            )));
        }

        let parsed: EventsResponse = response.json()?;

        Ok(parsed
            .items
            .into_iter()
            .map(|item| RawEvent {
                title: item.summary,
                start: item.start.and_then(|t| t.date_time),
                end: item.end.and_then(|t| t.date_time),
            })
            .collect())
    }
}

impl Default for CalendarClient {
    fn default() -> Self {
        Self::new()
    }
}
