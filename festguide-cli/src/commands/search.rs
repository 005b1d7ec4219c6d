use std::collections::HashSet;

use anyhow::Result;
use festguide_core::search::{self, SearchOutcome};
use owo_colors::OwoColorize;

use crate::guide::Guide;
use crate::render::{CardDetail, render_card, render_id};

pub async fn run(guide: &Guide, query: &str) -> Result<()> {
    let outcome = search::search(guide.catalog.events(), query);

    let liked = if outcome.events().is_empty() {
        HashSet::new()
    } else {
        guide.like_store().await?.all().await
    };

    for line in search_results(&outcome, &liked) {
        println!("{}", line);
    }

    Ok(())
}

fn search_results(outcome: &SearchOutcome, liked: &HashSet<String>) -> Vec<String> {
    let mut lines = vec!["Search Events".bold().to_string()];

    match outcome {
        SearchOutcome::EmptyQuery => {
            lines.push("Type something to search for.".dimmed().to_string());
        }
        SearchOutcome::Matches(matches) if matches.is_empty() => {
            lines.push("No events found.".dimmed().to_string());
        }
        SearchOutcome::Matches(matches) => {
            for event in matches {
                lines.push(render_card(
                    event,
                    Some(liked.contains(&event.id)),
                    CardDetail::DateAndLocation,
                ));
                lines.push(render_id(event));
            }
        }
    }

    lines
}
