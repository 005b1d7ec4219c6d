//! Tag filtering.

use std::collections::BTreeSet;

use crate::event::Event;

/// Tags offered as filter chips when the config does not override them.
pub const DEFAULT_AVAILABLE_TAGS: [&str; 6] = [
    "Kid Friendly",
    "Sex Positive",
    "Queer Inclusive",
    "Adult Only",
    "Sober Only",
    "Warning: Sensory content",
];

/// The set of active tags. An event passes when it carries every active tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    active: BTreeSet<String>,
}

impl TagFilter {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TagFilter {
            active: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Activate `tag`, or deactivate it if already active.
    pub fn toggle(&mut self, tag: &str) {
        if !self.active.remove(tag) {
            self.active.insert(tag.to_string());
        }
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.active.contains(tag)
    }

    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.active.iter().all(|tag| event.has_tag(tag))
    }

    /// Events carrying all active tags, in input order. With no active tags
    /// every event passes.
    pub fn filter<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|e| self.matches(e)).collect()
    }

    /// Same as `filter`, for an already derived view.
    pub fn filter_refs<'a>(&self, events: &[&'a Event]) -> Vec<&'a Event> {
        events.iter().copied().filter(|e| self.matches(e)).collect()
    }
}
