use std::path::PathBuf;

use anyhow::{Context, Result};
use festguide_core::EventCatalog;
use festguide_core::config::GuideConfig;
use festguide_core::kv::FileStore;
use festguide_core::likes::LikeStore;

/// Everything a screen needs: config, the loaded catalog, and access to likes.
pub struct Guide {
    pub config: GuideConfig,
    pub catalog: EventCatalog,
}

impl Guide {
    pub fn load(fixture: Option<PathBuf>) -> Result<Self> {
        let config = GuideConfig::load()?;
        let path = fixture.unwrap_or_else(|| config.fixture_path());

        let catalog = EventCatalog::load(&path)
            .with_context(|| format!("Could not load events from {}", path.display()))?;

        if catalog.is_empty() {
            anyhow::bail!(
                "No events found in {}.\n\n\
                Point festguide at an event fixture with:\n  \
                festguide --fixture <path> today",
                path.display()
            );
        }

        Ok(Guide { config, catalog })
    }

    /// The data directory store that likes and the pending undo live in.
    pub fn store(&self) -> FileStore {
        FileStore::new(self.config.data_path())
    }

    pub async fn like_store(&self) -> Result<LikeStore<FileStore>> {
        let likes = LikeStore::open(self.store())
            .await
            .context("Could not open liked events")?;
        Ok(likes)
    }
}
