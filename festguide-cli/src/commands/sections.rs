use anyhow::Result;
use festguide_core::grouping::{self, GroupField};
use festguide_core::view::ExpandedSections;
use owo_colors::OwoColorize;

use crate::guide::Guide;
use crate::render::{CardDetail, pluralize, render_card, render_section_header};

/// Collapsible sections of events, one per location or category.
pub fn run(guide: &Guide, field: GroupField, expand_all: bool) -> Result<()> {
    let groups = field.group(guide.catalog.events());
    let keys = grouping::sorted_group_keys(&groups);

    let sections = if expand_all {
        ExpandedSections::all(keys.iter().cloned())
    } else {
        ExpandedSections::default()
    };

    let detail = match field {
        GroupField::Location => CardDetail::DateAndHost,
        _ => CardDetail::DateAndLocation,
    };

    println!("{}", format!("Events by {}", field).bold());

    for key in &keys {
        let events = &groups[key];
        let title = format!(
            "{} {}",
            key,
            format!("({} {})", events.len(), pluralize("event", events.len())).dimmed()
        );

        println!();
        println!("{}", render_section_header(sections.marker(key), &title));

        if sections.is_expanded(key) {
            for event in events {
                println!("{}", render_card(event, None, detail));
            }
        }
    }

    Ok(())
}
