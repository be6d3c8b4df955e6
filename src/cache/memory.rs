use super::CacheStore;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

// Cap for TTLs too large to add to an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// Map size that triggers the first sweep of expired entries on write.
const SWEEP_THRESHOLD: usize = 64;

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        now <= self.expires_at
    }
}

#[derive(Debug)]
struct Entries {
    map: HashMap<String, CacheEntry>,
    // Size at which the next `put` sweeps expired entries.
    sweep_at: usize,
}

impl Default for Entries {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            sweep_at: SWEEP_THRESHOLD,
        }
    }
}

impl Entries {
    fn sweep(&mut self, now: Instant) {
        self.map.retain(|_, e| e.is_live(now));
        self.sweep_at = (self.map.len() * 2).max(SWEEP_THRESHOLD);
    }
}

/// In-process store backed by a `HashMap`.
///
/// Expired entries are evicted when read, and swept in bulk once the map has doubled in size
/// since the last sweep.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Entries>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .map
            .values()
            .filter(|e| e.is_live(now))
            .count()
    }

    /// Whether the store holds no live entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Number of entries held, including expired ones not evicted yet.
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.map.len()
    }

    /// Drops expired entries.
    pub async fn purge_expired(&self) {
        self.entries.write().await.sweep(Instant::now());
    }
}

impl CacheStore for MemoryStore {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Option<String>> {
        Box::pin(async move {
            let now = Instant::now();
            {
                let guard = self.entries.read().await;
                match guard.map.get(key) {
                    Some(entry) if entry.is_live(now) => return Some(entry.body.clone()),
                    Some(_) => {}
                    None => return None,
                }
            }

            // Expired: evict, unless a writer refreshed it in the meantime.
            let mut guard = self.entries.write().await;
            if guard.map.get(key).is_some_and(|e| !e.is_live(now)) {
                guard.map.remove(key);
            }
            None
        })
    }

    fn put<'a>(&'a self, key: &'a str, value: String, ttl: Duration) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            let now = Instant::now();
            let entry = CacheEntry {
                body: value,
                expires_at: now.checked_add(ttl).unwrap_or(now + FAR_FUTURE),
            };
            let mut guard = self.entries.write().await;
            guard.map.insert(key.to_string(), entry);
            if guard.map.len() >= guard.sweep_at {
                guard.sweep(now);
            }
        })
    }

    fn forget<'a>(&'a self, key: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            self.entries.write().await.map.remove(key);
        })
    }

    fn flush(&self) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            *self.entries.write().await = Entries::default();
        })
    }
}

/// A store that never keeps anything; every read-through call reaches the service.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl CacheStore for NullStore {
    fn get<'a>(&'a self, _key: &'a str) -> BoxFuture<'a, Option<String>> {
        Box::pin(async { None })
    }

    fn put<'a>(&'a self, _key: &'a str, _value: String, _ttl: Duration) -> BoxFuture<'a, ()> {
        Box::pin(async {})
    }

    fn forget<'a>(&'a self, _key: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(async {})
    }

    fn flush(&self) -> BoxFuture<'_, ()> {
        Box::pin(async {})
    }
}
