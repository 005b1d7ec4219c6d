//! Per-screen view state.
//!
//! Screens own these values and pass them to rendering explicitly; nothing
//! here is shared or global.

use std::collections::HashSet;

use chrono::{Days, NaiveDateTime};

use crate::error::{GuideError, GuideResult};
use crate::event::DATE_FORMAT;
use crate::kv::KeyValueStore;

/// Key the pending undo is stored under, as a JSON string or `null`.
pub const UNDO_KEY: &str = "lastUnliked";

/// Which collapsible sections of a screen are open, by section key (a date,
/// a location, a category).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSections {
    expanded: HashSet<String>,
}

impl ExpandedSections {
    /// The day view starts with tomorrow's section open.
    pub fn for_day_view(now: NaiveDateTime) -> Self {
        let mut sections = Self::default();
        if let Some(tomorrow) = now.date().checked_add_days(Days::new(1)) {
            sections.expand(&tomorrow.format(DATE_FORMAT).to_string());
        }
        sections
    }

    pub fn all<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExpandedSections {
            expanded: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    pub fn expand(&mut self, key: &str) {
        self.expanded.insert(key.to_string());
    }

    /// Flip a section and return whether it is now open.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    /// "▼" for open sections, "▶" for closed ones.
    pub fn marker(&self, key: &str) -> &'static str {
        if self.is_expanded(key) { "▼" } else { "▶" }
    }
}

/// The event most recently unliked from the likes screen, so it can be
/// liked again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoUnlike {
    last_removed: Option<String>,
}

impl UndoUnlike {
    /// Remember `id`, replacing any earlier removal.
    pub fn record(&mut self, id: &str) {
        self.last_removed = Some(id.to_string());
    }

    pub fn pending(&self) -> Option<&str> {
        self.last_removed.as_deref()
    }

    /// Take the id to re-like, clearing the undo.
    pub fn take(&mut self) -> Option<String> {
        self.last_removed.take()
    }

    pub fn dismiss(&mut self) {
        self.last_removed = None;
    }

    /// Load the pending undo left by an earlier run. A missing key means
    /// nothing to undo.
    pub async fn load<S: KeyValueStore>(kv: &S) -> GuideResult<Self> {
        let stored = kv
            .get(UNDO_KEY)
            .await
            .map_err(|e| GuideError::PersistenceRead(e.to_string()))?;

        let last_removed = match stored {
            Some(content) => serde_json::from_str(&content).map_err(|e| {
                GuideError::PersistenceRead(format!("corrupt {}: {}", UNDO_KEY, e))
            })?,
            None => None,
        };

        Ok(UndoUnlike { last_removed })
    }

    pub async fn save<S: KeyValueStore>(&self, kv: &S) -> GuideResult<()> {
        let content = serde_json::to_string(&self.last_removed)
            .map_err(|e| GuideError::PersistenceWrite(e.to_string()))?;
        kv.set(UNDO_KEY, &content)
            .await
            .map_err(|e| GuideError::PersistenceWrite(e.to_string()))
    }
}
