//! Grouping events by host, location or category.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::event::Event;
use crate::temporal::sort_by_start;

/// Letters shown in the alphabet jump bar when the config does not override them.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZÅÄÖÆ";

/// Bucket for group keys whose first letter is not in the alphabet.
pub const CATCH_ALL_LETTER: char = '#';

pub type GroupedEvents<'a> = HashMap<String, Vec<&'a Event>>;

/// Event field a grouped view is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Host,
    Location,
    Category,
}

impl GroupField {
    pub fn key<'e>(&self, event: &'e Event) -> &'e str {
        match self {
            GroupField::Host => &event.host,
            GroupField::Location => &event.location,
            GroupField::Category => &event.category,
        }
    }

    /// Key used when the field is blank.
    pub fn default_key(&self) -> &'static str {
        match self {
            GroupField::Host => "Unknown Host",
            GroupField::Location => "Unknown Location",
            GroupField::Category => "Uncategorized",
        }
    }

    pub fn group<'a>(&self, events: &'a [Event]) -> GroupedEvents<'a> {
        group_by(events, |e| self.key(e), self.default_key())
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GroupField::Host => write!(f, "Host"),
            GroupField::Location => write!(f, "Location"),
            GroupField::Category => write!(f, "Category"),
        }
    }
}

/// Bucket `events` by `key_fn`, substituting `default_key` for blank keys.
///
/// Every event lands in exactly one group. Within a group events are ordered
/// by start, ties and unparsable starts keeping input order.
pub fn group_by<'a, F>(events: &'a [Event], key_fn: F, default_key: &str) -> GroupedEvents<'a>
where
    F: Fn(&'a Event) -> &'a str,
{
    let mut groups: GroupedEvents<'a> = HashMap::new();

    for event in events {
        let key = key_fn(event);
        let key = if key.trim().is_empty() { default_key } else { key };
        groups.entry(key.to_string()).or_default().push(event);
    }

    for members in groups.values_mut() {
        sort_by_start(members);
    }

    groups
}

/// Group keys in case-insensitive alphabetical order.
pub fn sorted_group_keys(groups: &GroupedEvents) -> Vec<String> {
    let mut keys: Vec<String> = groups.keys().cloned().collect();
    keys.sort_by(|a, b| compare_keys(a, b));
    keys
}

/// Case-insensitive comparison, falling back to exact order so that keys
/// differing only in case still sort deterministically.
fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Group keys sharing a first letter, for the alphabet jump bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBucket {
    pub letter: char,
    pub keys: Vec<String>,
}

impl LetterBucket {
    /// Section identifier the rendering layer jumps to for this letter.
    pub fn anchor(&self) -> String {
        format!("section-{}", self.letter)
    }

    pub fn is_catch_all(&self) -> bool {
        self.letter == CATCH_ALL_LETTER
    }
}

/// Bucket `keys` by uppercased first letter.
///
/// Only letters listed in `alphabet` get their own bucket; anything else
/// (digits, punctuation, unlisted accented letters) goes to `#`. Buckets come
/// out in alphabet order with `#` last, and empty buckets are omitted.
pub fn letter_buckets<S: AsRef<str>>(keys: &[S], alphabet: &str) -> Vec<LetterBucket> {
    let letters: Vec<char> = alphabet.chars().collect();
    let mut by_letter: HashMap<char, Vec<String>> = HashMap::new();

    for key in keys {
        let key = key.as_ref();
        let letter = key
            .chars()
            .next()
            .map(uppercase)
            .filter(|c| letters.contains(c))
            .unwrap_or(CATCH_ALL_LETTER);
        by_letter.entry(letter).or_default().push(key.to_string());
    }

    // The catch-all sorts last even if the alphabet lists it
    let mut order: Vec<char> = letters
        .into_iter()
        .filter(|&c| c != CATCH_ALL_LETTER)
        .collect();
    order.push(CATCH_ALL_LETTER);

    order
        .into_iter()
        .filter_map(|letter| {
            let mut keys = by_letter.remove(&letter)?;
            keys.sort_by(|a, b| compare_keys(a, b));
            Some(LetterBucket { letter, keys })
        })
        .collect()
}

/// Single-char uppercase; characters that uppercase to several (like `ß`) are
/// kept as they are.
fn uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
