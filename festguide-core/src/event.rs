//! The event record as it appears in the fixture.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GuideError, GuideResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// A scheduled event. Immutable once loaded into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    /// Display name
    pub event: String,
    pub category: String,
    pub description: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Local time of day, `HH:mm`
    pub start_time: String,
    pub end_time: String,
    /// Display only
    pub duration: String,
    /// Display only
    pub symbols: String,
    pub host: String,
    pub location: String,
    /// Missing or null in some fixtures; treated as no tags.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Event {
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// The start of this event as a local, timezone-less instant.
    pub fn start_instant(&self) -> GuideResult<NaiveDateTime> {
        let date = self.calendar_date();
        let time = NaiveTime::parse_from_str(self.start_time.trim(), TIME_FORMAT).ok();

        match (date, time) {
            (Some(date), Some(time)) => Ok(date.and_time(time)),
            _ => Err(GuideError::UnparsableInstant {
                id: self.id.clone(),
                date: self.date.clone(),
                start_time: self.start_time.clone(),
            }),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// "2024-01-01 | 10:00 – 11:00"
    pub fn render_time_span(&self) -> String {
        format!("{} | {} – {}", self.date, self.start_time, self.end_time)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.event)
    }
}

#[cfg(test)]
pub(crate) fn make_test_event(id: &str, date: &str, start_time: &str, host: &str) -> Event {
    Event {
        id: id.to_string(),
        event: format!("Event {}", id),
        category: String::new(),
        description: String::new(),
        date: date.to_string(),
        start_time: start_time.to_string(),
        end_time: String::new(),
        duration: String::new(),
        symbols: String::new(),
        host: host.to_string(),
        location: String::new(),
        tags: vec![],
    }
}

/// A at 2024-01-01 10:00 (H1), B at 2024-01-01 09:00 (H1), C at 2024-01-02 08:00 (H2).
#[cfg(test)]
pub(crate) fn make_abc_events() -> Vec<Event> {
    vec![
        make_test_event("A", "2024-01-01", "10:00", "H1"),
        make_test_event("B", "2024-01-01", "09:00", "H1"),
        make_test_event("C", "2024-01-02", "08:00", "H2"),
    ]
}
