//! The event catalog: a read-only snapshot of the fixture.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{GuideError, GuideResult};
use crate::event::Event;

/// A fixture record that was dropped while loading.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

/// All events of the guide, in fixture order.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
    skipped: Vec<SkippedRecord>,
}

impl EventCatalog {
    /// Load the fixture file at `path`.
    pub fn load(path: &Path) -> GuideResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            events = catalog.len(),
            skipped = catalog.skipped.len(),
            "loaded event catalog"
        );
        Ok(catalog)
    }

    /// Parse a JSON array of event records.
    ///
    /// Records that are missing a field, have a field of the wrong type, or
    /// reuse an id already seen are skipped with a diagnostic. Only a fixture
    /// that is not a JSON array at all is an error.
    pub fn from_json(content: &str) -> GuideResult<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| GuideError::Fixture(e.to_string()))?;

        let Value::Array(records) = value else {
            return Err(GuideError::Fixture(
                "expected a JSON array of events".to_string(),
            ));
        };

        let mut events = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();
        let mut seen_ids = HashSet::new();

        for (index, record) in records.into_iter().enumerate() {
            match parse_record(index, record, &seen_ids) {
                Ok(event) => {
                    seen_ids.insert(event.id.clone());
                    events.push(event);
                }
                Err(GuideError::MalformedRecord { index, reason }) => {
                    warn!(index, %reason, "skipping malformed event record");
                    skipped.push(SkippedRecord { index, reason });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(EventCatalog { events, skipped })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Like `get`, but missing ids are an error.
    pub fn require(&self, id: &str) -> GuideResult<&Event> {
        self.get(id)
            .ok_or_else(|| GuideError::EventNotFound(id.to_string()))
    }

    /// Records dropped while loading.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn parse_record(index: usize, record: Value, seen_ids: &HashSet<String>) -> GuideResult<Event> {
    let event: Event = serde_json::from_value(record).map_err(|e| GuideError::MalformedRecord {
        index,
        reason: e.to_string(),
    })?;

    if event.id.trim().is_empty() {
        return Err(GuideError::MalformedRecord {
            index,
            reason: "empty id".to_string(),
        });
    }

    if seen_ids.contains(&event.id) {
        return Err(GuideError::MalformedRecord {
            index,
            reason: format!("duplicate id '{}'", event.id),
        });
    }

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, date: &str) -> String {
        format!(
            r#"{{"id": "{id}", "event": "Event {id}", "category": "Talk",
                "description": "", "date": "{date}", "startTime": "10:00",
                "endTime": "11:00", "duration": "1h", "symbols": "",
                "host": "Host", "location": "Tent", "tags": ["Kid Friendly"]}}"#
        )
    }

    #[test]
    fn test_from_json_keeps_fixture_order() {
        let json = format!("[{}, {}]", record("2", "2024-01-02"), record("1", "2024-01-01"));
        let catalog = EventCatalog::from_json(&json).unwrap();

        let ids: Vec<_> = catalog.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert!(catalog.skipped().is_empty());
    }

    #[test]
    fn test_from_json_skips_malformed_records() {
        let json = format!(
            r#"[{}, {{"id": "broken", "event": "No date"}}, {}, {{"id": 7}}]"#,
            record("1", "2024-01-01"),
            record("2", "2024-01-02")
        );
        let catalog = EventCatalog::from_json(&json).unwrap();

        assert_eq!(catalog.len(), 2);
        let skipped: Vec<_> = catalog.skipped().iter().map(|s| s.index).collect();
        assert_eq!(skipped, vec![1, 3]);
    }

    #[test]
    fn test_from_json_wrong_tag_type_is_malformed() {
        let json = r#"[{"id": "1", "event": "x", "category": "", "description": "",
            "date": "2024-01-01", "startTime": "10:00", "endTime": "11:00",
            "duration": "", "symbols": "", "host": "", "location": "",
            "tags": "Kid Friendly"}]"#;
        let catalog = EventCatalog::from_json(json).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.skipped().len(), 1);
    }

    #[test]
    fn test_from_json_null_or_missing_tags_are_empty() {
        let json = r#"[{"id": "1", "event": "x", "category": "", "description": "",
            "date": "2024-01-01", "startTime": "10:00", "endTime": "11:00",
            "duration": "", "symbols": "", "host": "", "location": "",
            "tags": null},
            {"id": "2", "event": "y", "category": "", "description": "",
            "date": "2024-01-01", "startTime": "10:00", "endTime": "11:00",
            "duration": "", "symbols": "", "host": "", "location": ""}]"#;
        let catalog = EventCatalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.skipped().is_empty());
        assert!(catalog.get("1").unwrap().tags.is_empty());
        assert!(catalog.get("2").unwrap().tags.is_empty());
    }

    #[test]
    fn test_from_json_drops_duplicate_ids() {
        let json = format!("[{}, {}]", record("1", "2024-01-01"), record("1", "2024-01-05"));
        let catalog = EventCatalog::from_json(&json).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("1").unwrap().date, "2024-01-01");
        assert!(catalog.skipped()[0].reason.contains("duplicate"));
    }

    #[test]
    fn test_from_json_keeps_records_with_unparsable_dates() {
        let json = format!("[{}]", record("1", "someday"));
        let catalog = EventCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(matches!(
            EventCatalog::from_json(r#"{"events": []}"#),
            Err(GuideError::Fixture(_))
        ));
        assert!(matches!(
            EventCatalog::from_json("not json"),
            Err(GuideError::Fixture(_))
        ));
    }

    #[test]
    fn test_from_json_is_idempotent() {
        let json = format!("[{}, {}]", record("1", "2024-01-01"), record("2", "2024-01-02"));
        let first = EventCatalog::from_json(&json).unwrap();
        let second = EventCatalog::from_json(&json).unwrap();
        assert_eq!(first.events(), second.events());
    }

    #[test]
    fn test_require_missing_id() {
        let catalog = EventCatalog::from_json("[]").unwrap();
        assert!(matches!(
            catalog.require("nope"),
            Err(GuideError::EventNotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, format!("[{}]", record("1", "2024-01-01"))).unwrap();

        let catalog = EventCatalog::load(&path).unwrap();
        assert_eq!(catalog.get("1").unwrap().host, "Host");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = EventCatalog::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(GuideError::Io(_))));
    }
}
