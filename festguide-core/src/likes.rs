//! The persisted set of liked events.

use std::collections::HashSet;

use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{GuideError, GuideResult};
use crate::event::Event;
use crate::kv::KeyValueStore;
use crate::temporal::sort_by_start;

/// Key the liked ids are stored under, as a JSON array of strings.
pub const LIKES_KEY: &str = "likedEvents";

/// An event paired with whether the user liked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Liked<'a> {
    pub event: &'a Event,
    pub liked: bool,
}

/// Liked event ids, backed by a key-value store.
///
/// Every toggle writes the whole id list before the in-memory copy changes,
/// and toggles run one at a time, so a toggle that returned `Ok` is never
/// lost or overwritten by a stale write.
pub struct LikeStore<S> {
    kv: S,
    // Insertion order, matching the persisted array
    liked: Mutex<Vec<String>>,
}

impl<S: KeyValueStore> LikeStore<S> {
    /// Load the liked ids from `kv`. A missing key is an empty set; a value
    /// that is not a JSON array of strings is an error.
    pub async fn open(kv: S) -> GuideResult<Self> {
        let stored = kv
            .get(LIKES_KEY)
            .await
            .map_err(|e| GuideError::PersistenceRead(e.to_string()))?;

        let liked = match stored {
            Some(content) => parse_liked(&content)?,
            None => Vec::new(),
        };

        debug!(count = liked.len(), "opened like store");

        Ok(LikeStore {
            kv,
            liked: Mutex::new(liked),
        })
    }

    pub async fn is_liked(&self, id: &str) -> bool {
        self.liked.lock().await.iter().any(|l| l == id)
    }

    pub async fn all(&self) -> HashSet<String> {
        self.liked.lock().await.iter().cloned().collect()
    }

    /// Like `id` if it is not liked, unlike it otherwise. Returns the new state.
    ///
    /// On a failed write nothing changes, in memory or on disk.
    pub async fn toggle(&self, id: &str) -> GuideResult<bool> {
        let mut liked = self.liked.lock().await;

        let mut updated = liked.clone();
        let now_liked = match updated.iter().position(|l| l == id) {
            Some(pos) => {
                updated.remove(pos);
                false
            }
            None => {
                updated.push(id.to_string());
                true
            }
        };

        let content = serde_json::to_string(&updated)
            .map_err(|e| GuideError::PersistenceWrite(e.to_string()))?;
        self.kv
            .set(LIKES_KEY, &content)
            .await
            .map_err(|e| GuideError::PersistenceWrite(e.to_string()))?;

        *liked = updated;
        debug!(id, liked = now_liked, "toggled like");

        Ok(now_liked)
    }

    /// Pair each event of a view with its liked flag.
    pub async fn decorate<'a>(&self, events: &[&'a Event]) -> Vec<Liked<'a>> {
        let liked = self.all().await;
        events
            .iter()
            .copied()
            .map(|event| Liked {
                event,
                liked: liked.contains(&event.id),
            })
            .collect()
    }

    /// The liked events of a catalog, by start time.
    pub async fn liked_events<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let liked = self.all().await;
        let mut matching: Vec<&Event> = events.iter().filter(|e| liked.contains(&e.id)).collect();
        sort_by_start(&mut matching);
        matching
    }

    pub fn into_store(self) -> S {
        self.kv
    }
}

fn parse_liked(content: &str) -> GuideResult<Vec<String>> {
    let ids: Vec<String> = serde_json::from_str(content)
        .map_err(|e| GuideError::PersistenceRead(format!("corrupt {}: {}", LIKES_KEY, e)))?;

    // Older writers could append an id twice
    let mut seen = HashSet::new();
    Ok(ids.into_iter().filter(|id| seen.insert(id.clone())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::make_abc_events;
    use crate::kv::{FileStore, MemoryStore};
    use std::io;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Memory store whose writes can be switched to fail.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_writes: AtomicBool,
    }

    impl KeyValueStore for FlakyStore {
        async fn get(&self, key: &str) -> io::Result<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> io::Result<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(io::Error::other("disk full"));
            }
            self.inner.set(key, value).await
        }
    }

    async fn persisted(store: &impl KeyValueStore) -> Option<Vec<String>> {
        let content = store.get(LIKES_KEY).await.unwrap()?;
        Some(serde_json::from_str(&content).unwrap())
    }

    #[tokio::test]
    async fn test_like_survives_restart() {
        let likes = LikeStore::open(MemoryStore::new()).await.unwrap();
        assert!(!likes.is_liked("A").await);

        assert!(likes.toggle("A").await.unwrap());
        assert!(likes.is_liked("A").await);

        // Simulated restart: reopen from the persisted value
        let likes = LikeStore::open(likes.into_store()).await.unwrap();
        assert!(likes.is_liked("A").await);

        assert!(!likes.toggle("A").await.unwrap());
        assert!(!likes.is_liked("A").await);
    }

    #[tokio::test]
    async fn test_like_survives_restart_on_disk() {
        let dir = tempfile::TempDir::new().unwrap();

        let likes = LikeStore::open(FileStore::new(dir.path())).await.unwrap();
        likes.toggle("A").await.unwrap();
        likes.toggle("B").await.unwrap();
        drop(likes);

        let likes = LikeStore::open(FileStore::new(dir.path())).await.unwrap();
        assert_eq!(
            likes.all().await,
            HashSet::from(["A".to_string(), "B".to_string()])
        );
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
        let kv = MemoryStore::new();
        kv.set(LIKES_KEY, r#"["x","y"]"#).await.unwrap();
        let likes = LikeStore::open(kv).await.unwrap();

        for id in ["x", "z"] {
            let before = likes.is_liked(id).await;
            likes.toggle(id).await.unwrap();
            likes.toggle(id).await.unwrap();
            assert_eq!(likes.is_liked(id).await, before);
        }

        let kv = likes.into_store();
        let mut stored = persisted(&kv).await.unwrap();
        stored.sort();
        assert_eq!(stored, vec!["x", "y"]);
    }

    #[tokio::test]
    async fn test_persisted_array_keeps_like_order() {
        let likes = LikeStore::open(MemoryStore::new()).await.unwrap();
        for id in ["c", "a", "b"] {
            likes.toggle(id).await.unwrap();
        }
        likes.toggle("a").await.unwrap();

        let kv = likes.into_store();
        assert_eq!(persisted(&kv).await.unwrap(), vec!["c", "b"]);
    }

    #[tokio::test]
    async fn test_failed_write_changes_nothing() {
        let likes = LikeStore::open(FlakyStore::default()).await.unwrap();
        likes.toggle("A").await.unwrap();

        likes.kv.fail_writes.store(true, Ordering::SeqCst);
        let result = likes.toggle("B").await;
        assert!(matches!(result, Err(GuideError::PersistenceWrite(_))));
        assert!(!likes.is_liked("B").await);

        let result = likes.toggle("A").await;
        assert!(result.is_err());
        assert!(likes.is_liked("A").await);

        assert_eq!(persisted(&likes.kv).await.unwrap(), vec!["A"]);

        // Retry once the store recovers
        likes.kv.fail_writes.store(false, Ordering::SeqCst);
        assert!(likes.toggle("B").await.unwrap());
    }

    #[tokio::test]
    async fn test_open_rejects_corrupt_value() {
        let kv = MemoryStore::new();
        kv.set(LIKES_KEY, "{not json").await.unwrap();
        assert!(matches!(
            LikeStore::open(kv).await,
            Err(GuideError::PersistenceRead(_))
        ));

        let kv = MemoryStore::new();
        kv.set(LIKES_KEY, "[1, 2]").await.unwrap();
        assert!(LikeStore::open(kv).await.is_err());
    }

    #[tokio::test]
    async fn test_open_surfaces_read_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let kv = FileStore::new(dir.path());
        std::fs::create_dir_all(kv.path_for(LIKES_KEY)).unwrap();

        assert!(matches!(
            LikeStore::open(kv).await,
            Err(GuideError::PersistenceRead(_))
        ));
    }

    #[tokio::test]
    async fn test_open_drops_duplicate_ids() {
        let kv = MemoryStore::new();
        kv.set(LIKES_KEY, r#"["a","a","b"]"#).await.unwrap();
        let likes = LikeStore::open(kv).await.unwrap();

        assert!(!likes.toggle("a").await.unwrap());
        assert!(!likes.is_liked("a").await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_toggles_are_not_lost() {
        let likes = Arc::new(LikeStore::open(MemoryStore::new()).await.unwrap());

        let mut handles = Vec::new();
        for i in 0..20 {
            let likes = Arc::clone(&likes);
            handles.push(tokio::spawn(async move {
                likes.toggle(&format!("event-{}", i)).await.unwrap();
            }));
        }
        // Same id toggled an even number of times ends up unliked
        for _ in 0..6 {
            let likes = Arc::clone(&likes);
            handles.push(tokio::spawn(async move {
                likes.toggle("shared").await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(likes.all().await.len(), 20);
        assert!(!likes.is_liked("shared").await);

        let stored = persisted(&likes.kv).await.unwrap();
        assert_eq!(stored.len(), 20);
    }

    #[tokio::test]
    async fn test_decorate_and_liked_events() {
        let events = make_abc_events();
        let likes = LikeStore::open(MemoryStore::new()).await.unwrap();
        likes.toggle("A").await.unwrap();
        likes.toggle("B").await.unwrap();

        let view: Vec<&Event> = events.iter().collect();
        let flags: Vec<bool> = likes.decorate(&view).await.iter().map(|l| l.liked).collect();
        assert_eq!(flags, vec![true, true, false]);

        let liked: Vec<&str> = likes
            .liked_events(&events)
            .await
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(liked, vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_liked_ids_not_in_catalog_are_kept() {
        let events = make_abc_events();
        let likes = LikeStore::open(MemoryStore::new()).await.unwrap();
        likes.toggle("gone").await.unwrap();

        assert!(likes.liked_events(&events).await.is_empty());
        assert!(likes.is_liked("gone").await);
    }
}
