//! Server-side snapshot cache backing the "cached delivery" channel.

use std::time::Duration;
use std::time::Instant;

use tokio::sync::OnceCell;
use tokio::sync::RwLock;

use crate::pending_entry::PendingEntry;

/// Snapshots older than this are treated as absent rather than served stale.
const SNAPSHOT_MAX_AGE: Duration = Duration::from_secs(300);

#[derive(Clone, Debug)]
struct Snapshot {
    entries: Vec<PendingEntry>,
    stored_at: Instant,
}

/// Holds the most recent confirmed pending list.
///
/// Every confirmed fetch stores into this; the cached delivery endpoint
/// reads from it without ever contacting the daemon.
#[derive(Default)]
pub struct EntryCache {
    inner: RwLock<Option<Snapshot>>,
}

impl EntryCache {
    pub async fn store(&self, entries: &[PendingEntry]) {
        let mut write_lock = self.inner.write().await;
        *write_lock = Some(Snapshot {
            entries: entries.to_vec(),
            stored_at: Instant::now(),
        });
    }

    /// Returns the stored list, or `None` when nothing usable is cached.
    pub async fn snapshot(&self) -> Option<Vec<PendingEntry>> {
        self.snapshot_within(SNAPSHOT_MAX_AGE).await
    }

    async fn snapshot_within(&self, max_age: Duration) -> Option<Vec<PendingEntry>> {
        let read_lock = self.inner.read().await;
        match &*read_lock {
            Some(snapshot) if snapshot.stored_at.elapsed() < max_age => {
                Some(snapshot.entries.clone())
            }
            _ => None,
        }
    }
}

/// The process-wide cache instance used by the server functions.
pub async fn shared() -> &'static EntryCache {
    static CACHE: OnceCell<EntryCache> = OnceCell::const_new();
    CACHE.get_or_init(|| async { EntryCache::default() }).await
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    fn entry(id: i64) -> PendingEntry {
        PendingEntry {
            id,
            task_name: "sync-shows".to_string(),
            title: format!("Some Show S01E0{id}"),
            url: format!("https://example.test/{id}"),
            approved: false,
            added: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
            extra: Default::default(),
        }
    }

    #[tokio::test]
    async fn empty_cache_yields_nothing() {
        let cache = EntryCache::default();
        assert_eq!(cache.snapshot().await, None);
    }

    #[tokio::test]
    async fn stored_list_is_served_back() {
        let cache = EntryCache::default();
        let entries = vec![entry(1), entry(2)];

        cache.store(&entries).await;
        assert_eq!(cache.snapshot().await, Some(entries));
    }

    #[tokio::test]
    async fn aged_out_snapshot_is_absent() {
        let cache = EntryCache::default();
        cache.store(&[entry(1)]).await;

        assert_eq!(cache.snapshot_within(Duration::ZERO).await, None);
    }

    #[tokio::test]
    async fn store_replaces_wholesale() {
        let cache = EntryCache::default();
        cache.store(&[entry(1), entry(2)]).await;
        cache.store(&[entry(3)]).await;

        assert_eq!(cache.snapshot().await, Some(vec![entry(3)]));
    }
}
