//! Chronological views: the today / tomorrow / later day partition.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::error::GuideResult;
use crate::event::Event;
use crate::tags::TagFilter;

/// Events of a catalog split by day relative to `now`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayPartition<'a> {
    /// Events later today that have not started yet
    pub today: Vec<&'a Event>,
    pub tomorrow: Vec<&'a Event>,
    /// Events after tomorrow, by date
    pub later: BTreeMap<NaiveDate, Vec<&'a Event>>,
    /// Events whose start could not be parsed; never in any day bucket
    pub unparsable: Vec<&'a Event>,
}

/// Title shown above the day view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Headline {
    Today,
    Tomorrow,
    Upcoming,
}

impl Headline {
    pub fn title(&self) -> &'static str {
        match self {
            Headline::Today => "Welcome To Borderland",
            Headline::Tomorrow => "Tomorrow's Events",
            Headline::Upcoming => "Upcoming Events",
        }
    }
}

/// The comparable start of `event`.
pub fn instant(event: &Event) -> GuideResult<NaiveDateTime> {
    event.start_instant()
}

/// Split `events` into today / tomorrow / later relative to `now`.
///
/// Past events (and events today that already started) land in no bucket.
/// Each bucket is sorted by start; equal starts keep input order.
pub fn partition<'a>(events: &'a [Event], now: NaiveDateTime) -> DayPartition<'a> {
    let today = now.date();
    let Some(tomorrow) = today.checked_add_days(Days::new(1)) else {
        return DayPartition::default();
    };

    let mut partition = DayPartition::default();

    for (event, start) in with_instants(events, &mut partition.unparsable) {
        let date = start.date();
        if date == today {
            if start > now {
                partition.today.push(event);
            }
        } else if date == tomorrow {
            partition.tomorrow.push(event);
        } else if date > tomorrow {
            partition.later.entry(date).or_default().push(event);
        }
    }

    partition
}

/// All events with a parseable start, oldest first.
pub fn chronological(events: &[Event]) -> Vec<&Event> {
    let mut unparsable = Vec::new();
    with_instants(events, &mut unparsable)
        .into_iter()
        .map(|(event, _)| event)
        .collect()
}

/// Sort events by start, keeping input order for ties. Events without a
/// parseable start go last, in input order.
pub(crate) fn sort_by_start(events: &mut Vec<&Event>) {
    let mut keyed: Vec<_> = events
        .drain(..)
        .map(|e| (e.start_instant().ok(), e))
        .collect();

    keyed.sort_by_key(|(start, _)| (start.is_none(), *start));

    events.extend(keyed.into_iter().map(|(_, e)| e));
}

/// Pair each event with its start, sorted by start. Unparsable events are
/// reported and pushed to `unparsable` instead.
fn with_instants<'a>(
    events: &'a [Event],
    unparsable: &mut Vec<&'a Event>,
) -> Vec<(&'a Event, NaiveDateTime)> {
    let mut dated = Vec::with_capacity(events.len());

    for event in events {
        match event.start_instant() {
            Ok(start) => dated.push((event, start)),
            Err(e) => {
                warn!(id = %event.id, "{}", e);
                unparsable.push(event);
            }
        }
    }

    dated.sort_by_key(|(_, start)| *start);
    dated
}

impl<'a> DayPartition<'a> {
    pub fn headline(&self) -> Headline {
        if !self.today.is_empty() {
            Headline::Today
        } else if !self.tomorrow.is_empty() {
            Headline::Tomorrow
        } else {
            Headline::Upcoming
        }
    }

    /// Apply a tag filter to every day bucket. Dates whose events are all
    /// filtered out stay present with an empty list.
    pub fn filtered(&self, filter: &TagFilter) -> DayPartition<'a> {
        DayPartition {
            today: filter.filter_refs(&self.today),
            tomorrow: filter.filter_refs(&self.tomorrow),
            later: self
                .later
                .iter()
                .map(|(date, events)| (*date, filter.filter_refs(events)))
                .collect(),
            unparsable: self.unparsable.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.tomorrow.is_empty() && self.later.values().all(Vec::is_empty)
    }
}
