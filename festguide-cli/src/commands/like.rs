use anyhow::Result;
use festguide_core::view::UndoUnlike;
use owo_colors::OwoColorize;

use crate::guide::Guide;

pub async fn run(guide: &Guide, id: &str) -> Result<()> {
    let event = guide.catalog.require(id)?;
    let store = guide.store();
    let likes = guide.like_store().await?;
    let mut undo = UndoUnlike::load(&store).await?;

    if likes.toggle(id).await? {
        if undo.pending() == Some(id) {
            undo.dismiss();
            undo.save(&store).await?;
        }
        println!("{} Liked {}", "♥".red(), event.event.bold());
    } else {
        undo.record(id);
        undo.save(&store).await?;
        println!("Removed {} from your likes", event.event.bold());
        println!("{}", "Undo with: festguide undo".dimmed());
    }

    Ok(())
}
