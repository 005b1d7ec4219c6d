use anyhow::Result;
use owo_colors::OwoColorize;

use crate::guide::Guide;
use crate::render::{CardDetail, render_card, render_id};

pub async fn run(guide: &Guide) -> Result<()> {
    let likes = guide.like_store().await?;
    let liked = likes.liked_events(guide.catalog.events()).await;

    println!("{}", "Liked Events".bold());

    if liked.is_empty() {
        println!("{}", "No liked events yet.".dimmed());
        return Ok(());
    }

    for event in liked {
        println!("{}", render_card(event, Some(true), CardDetail::DateAndLocation));
        println!("{}", render_id(event));
    }

    Ok(())
}
