use std::collections::HashSet;

use anyhow::Result;
use chrono::{Days, NaiveDateTime};
use festguide_core::Event;
use festguide_core::event::DATE_FORMAT;
use festguide_core::tags::TagFilter;
use festguide_core::temporal;
use festguide_core::view::ExpandedSections;
use owo_colors::OwoColorize;

use crate::guide::Guide;
use crate::render::{
    CardDetail, Render, day_title, pluralize, render_card, render_section_header,
    render_tag_chips, tomorrow_title,
};

pub async fn run(guide: &Guide, tags: Vec<String>, now: NaiveDateTime, expand_all: bool) -> Result<()> {
    let liked = guide.like_store().await?.all().await;
    let filter = TagFilter::new(tags);

    let lines = day_view(
        guide.catalog.events(),
        &guide.config.available_tags,
        &filter,
        &liked,
        now,
        expand_all,
    );
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

fn day_view(
    events: &[Event],
    available_tags: &[String],
    filter: &TagFilter,
    liked: &HashSet<String>,
    now: NaiveDateTime,
    expand_all: bool,
) -> Vec<String> {
    let partition = temporal::partition(events, now);
    let shown = partition.filtered(filter);

    let mut sections = ExpandedSections::for_day_view(now);
    if expand_all {
        for date in partition.later.keys() {
            sections.expand(&date.format(DATE_FORMAT).to_string());
        }
    }

    let card = |event: &Event| {
        render_card(event, Some(liked.contains(&event.id)), CardDetail::TimeSpan)
    };

    let mut lines = vec![
        partition.headline().render(),
        render_tag_chips(available_tags, filter),
        String::new(),
        "Here's what's happening today 👇".bold().to_string(),
    ];
    lines.extend(shown.today.iter().map(|e| card(*e)));

    // Header follows the unfiltered day so a tag filter never hides it
    if !partition.tomorrow.is_empty() {
        if let Some(tomorrow) = now.date().checked_add_days(Days::new(1)) {
            let key = tomorrow.format(DATE_FORMAT).to_string();
            lines.push(String::new());
            lines.push(render_section_header(
                sections.marker(&key),
                &tomorrow_title(tomorrow),
            ));
            if sections.is_expanded(&key) {
                lines.extend(shown.tomorrow.iter().map(|e| card(*e)));
            }
        }
    }

    for (date, events) in &shown.later {
        let key = date.format(DATE_FORMAT).to_string();
        lines.push(String::new());
        lines.push(render_section_header(sections.marker(&key), &day_title(*date)));
        if sections.is_expanded(&key) {
            lines.extend(events.iter().map(|e| card(*e)));
        }
    }

    if !partition.unparsable.is_empty() {
        let count = partition.unparsable.len();
        lines.push(String::new());
        lines.push(
            format!(
                "{} {} without a valid start time not shown",
                count,
                pluralize("event", count)
            )
            .dimmed()
            .to_string(),
        );
    }

    lines
}
