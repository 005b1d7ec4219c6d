use anyhow::Result;
use owo_colors::OwoColorize;

use crate::guide::Guide;

pub async fn run(guide: &Guide, id: &str) -> Result<()> {
    let event = guide.catalog.require(id)?;
    let likes = guide.like_store().await?;

    if !event.tags.is_empty() {
        let tags: Vec<String> = event.tags.iter().map(|t| format!("[{}]", t)).collect();
        println!("{}", tags.join(" ").dimmed());
    }

    let heart = if likes.is_liked(id).await {
        "♥".red().to_string()
    } else {
        "♡".dimmed().to_string()
    };
    println!("{} {}", event.event.bold(), heart);

    if !event.description.is_empty() {
        println!();
        println!("{}", event.description);
    }

    println!();
    println!("{}", "Time".bold());
    println!("  {}", event.render_time_span());

    println!("{}", "Location".bold());
    println!("  {}", event.location);

    println!("{}", "Host".bold());
    println!("  {}", event.host);

    if !event.category.is_empty() {
        println!("{}", "Category".bold());
        println!("  {}", event.category);
    }

    Ok(())
}
