use anyhow::Result;
use festguide_core::grouping::{self, GroupField};
use owo_colors::OwoColorize;

use crate::guide::Guide;
use crate::render::{CardDetail, Render, render_alphabet_bar, render_liked};

pub async fn run(guide: &Guide) -> Result<()> {
    let likes = guide.like_store().await?;
    let alphabet = &guide.config.alphabet;

    let groups = GroupField::Host.group(guide.catalog.events());
    let keys = grouping::sorted_group_keys(&groups);
    let buckets = grouping::letter_buckets(&keys, alphabet);

    println!("{}", "Events by Host".bold());
    println!("{}", render_alphabet_bar(alphabet, &buckets));

    for bucket in &buckets {
        println!();
        println!("{}", bucket.render());

        for host in &bucket.keys {
            println!("{}", host.bold());
            if let Some(events) = groups.get(host) {
                for liked in likes.decorate(events).await {
                    println!("{}", render_liked(&liked, CardDetail::DateAndLocation));
                }
            }
        }
    }

    Ok(())
}
