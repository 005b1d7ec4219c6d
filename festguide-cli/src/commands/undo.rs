use anyhow::Result;
use festguide_core::view::UndoUnlike;
use owo_colors::OwoColorize;

use crate::guide::Guide;

pub async fn run(guide: &Guide) -> Result<()> {
    let store = guide.store();
    let mut undo = UndoUnlike::load(&store).await?;

    let Some(id) = undo.take() else {
        println!("{}", "Nothing to undo.".dimmed());
        return Ok(());
    };

    let likes = guide.like_store().await?;
    if !likes.is_liked(&id).await {
        likes.toggle(&id).await?;
    }
    undo.save(&store).await?;

    let name = guide.catalog.get(&id).map_or(id.as_str(), |e| e.event.as_str());
    println!("{} Liked {} again", "♥".red(), name.bold());

    Ok(())
}
