//! Free-text search over the catalog.

use crate::event::Event;

/// Result of a search. An empty query is not the same as a query that
/// matched nothing, and screens show different text for each.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    EmptyQuery,
    Matches(Vec<&'a Event>),
}

impl<'a> SearchOutcome<'a> {
    /// Matched events; empty for an empty query.
    pub fn events(&self) -> &[&'a Event] {
        match self {
            SearchOutcome::EmptyQuery => &[],
            SearchOutcome::Matches(events) => events,
        }
    }

    pub fn into_events(self) -> Vec<&'a Event> {
        match self {
            SearchOutcome::EmptyQuery => Vec::new(),
            SearchOutcome::Matches(events) => events,
        }
    }
}

/// Case-insensitive substring search over name, description, host, location
/// and tags, in input order.
///
/// Fields are matched one at a time, so a query never matches across the
/// boundary of two fields.
pub fn search<'a>(events: &'a [Event], query: &str) -> SearchOutcome<'a> {
    let query = query.trim();
    if query.is_empty() {
        return SearchOutcome::EmptyQuery;
    }

    let needle = query.to_lowercase();
    SearchOutcome::Matches(
        events
            .iter()
            .filter(|event| matches(event, &needle))
            .collect(),
    )
}

fn matches(event: &Event, needle: &str) -> bool {
    searchable_fields(event).any(|field| field.to_lowercase().contains(needle))
}

fn searchable_fields(event: &Event) -> impl Iterator<Item = &str> {
    [
        event.event.as_str(),
        event.description.as_str(),
        event.host.as_str(),
        event.location.as_str(),
    ]
    .into_iter()
    .chain(event.tags.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{make_abc_events, make_test_event};

    fn ids(outcome: &SearchOutcome) -> Vec<String> {
        outcome.events().iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_search_matches_host_case_insensitively() {
        let events = make_abc_events();
        let outcome = search(&events, "h2");
        assert_eq!(ids(&outcome), vec!["C"]);
    }

    #[test]
    fn test_empty_query_differs_from_no_matches() {
        let events = make_abc_events();
        assert_eq!(search(&events, ""), SearchOutcome::EmptyQuery);
        assert_eq!(search(&events, "   \t"), SearchOutcome::EmptyQuery);
        assert_eq!(search(&events, "nothing like this"), SearchOutcome::Matches(vec![]));
    }

    #[test]
    fn test_search_covers_all_text_fields() {
        let mut event = make_test_event("1", "2024-01-01", "10:00", "Pyro Camp");
        event.event = "Fire Show".to_string();
        event.description = "Big FLAMES tonight".to_string();
        event.location = "Main Square".to_string();
        event.tags = vec!["Adult Only".to_string()];
        let events = vec![event];

        for query in ["fire", "flames", "pyro", "square", "adult"] {
            assert_eq!(ids(&search(&events, query)), vec!["1"], "query {}", query);
        }
    }

    #[test]
    fn test_search_ignores_category_and_symbols() {
        let mut event = make_test_event("1", "2024-01-01", "10:00", "");
        event.category = "Workshop".to_string();
        event.symbols = "Zebra".to_string();
        let events = vec![event];

        assert!(search(&events, "workshop").events().is_empty());
        assert!(search(&events, "zebra").events().is_empty());
    }

    #[test]
    fn test_search_does_not_match_across_fields() {
        let mut event = make_test_event("1", "2024-01-01", "10:00", "Sun");
        event.event = "Morning".to_string();
        event.description = "Yoga".to_string();
        let events = vec![event];

        assert!(search(&events, "morning yoga").events().is_empty());
        assert!(search(&events, "yogasun").events().is_empty());
    }

    #[test]
    fn test_search_trims_query_and_preserves_order() {
        let events = vec![
            make_test_event("2", "2024-01-02", "10:00", "Camp Two"),
            make_test_event("1", "2024-01-01", "10:00", "Camp One"),
        ];
        assert_eq!(ids(&search(&events, "  camp ")), vec!["2", "1"]);
    }

    #[test]
    fn test_search_unicode_case_folding() {
        let mut event = make_test_event("1", "2024-01-01", "10:00", "ÅSA");
        event.location = "Straße".to_string();
        let events = vec![event];
        assert_eq!(ids(&search(&events, "åsa")), vec!["1"]);
        assert_eq!(ids(&search(&events, "STRASSE")).len(), 0);
    }
}
