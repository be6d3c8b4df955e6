use super::CacheStore;
use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

// Cap for TTLs too large to express as a calendar offset.
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// Minimum time between two sweeps of the cache directory.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

const ENTRY_EXT: &str = "json";

#[derive(Debug, Serialize, Deserialize)]
struct FileEntry {
    expires_at: DateTime<Utc>,
    value: String,
}

impl FileEntry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        now <= self.expires_at
    }
}

/// Store keeping one JSON file per key under a directory, so results survive restarts.
///
/// Each file records its own expiry as a wall-clock timestamp. Expired files are removed when
/// read, and the directory is swept at most once an hour on write. Writes go to a temporary
/// file that is renamed into place, so a reader never sees a half-written entry.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    seq: AtomicU64,
    last_sweep: Mutex<Option<Instant>>,
}

impl FileStore {
    /// A store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            seq: AtomicU64::new(0),
            last_sweep: Mutex::new(None),
        }
    }

    /// `mnb-rs` under the system temporary directory.
    #[must_use]
    pub fn default_dir() -> PathBuf {
        std::env::temp_dir().join("mnb-rs")
    }

    /// The directory entries are written to.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Removes every expired or unreadable entry file.
    pub async fn purge_expired(&self) {
        let now = Utc::now();
        for path in self.entry_files().await {
            if read_entry(&path).await.is_none_or(|e| !e.is_live(now)) {
                remove(&path).await;
            }
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys may carry any character; percent-encoding keeps them a single file name.
        let name: String = url::form_urlencoded::byte_serialize(key.as_bytes()).collect();
        self.dir.join(format!("{name}.{ENTRY_EXT}"))
    }

    async fn entry_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let Ok(mut dir) = tokio::fs::read_dir(&self.dir).await else {
            return files;
        };
        while let Ok(Some(entry)) = dir.next_entry().await {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == ENTRY_EXT) {
                files.push(path);
            }
        }
        files
    }

    async fn sweep_if_due(&self) {
        let now = Instant::now();
        {
            let mut last = self.last_sweep.lock().await;
            if last.is_some_and(|at| now.duration_since(at) < SWEEP_INTERVAL) {
                return;
            }
            *last = Some(now);
        }
        self.purge_expired().await;
    }

    async fn write(&self, path: &Path, entry: &FileEntry) -> std::io::Result<()> {
        let body = serde_json::to_vec(entry)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let tmp = self.dir.join(format!(
            ".{}.{}.tmp",
            std::process::id(),
            self.seq.fetch_add(1, Ordering::Relaxed)
        ));
        tokio::fs::write(&tmp, body).await?;
        if let Err(e) = tokio::fs::rename(&tmp, path).await {
            remove(&tmp).await;
            return Err(e);
        }
        Ok(())
    }
}

impl CacheStore for FileStore {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Option<String>> {
        Box::pin(async move {
            let path = self.path_for(key);
            match read_entry(&path).await {
                Some(entry) if entry.is_live(Utc::now()) => Some(entry.value),
                Some(_) => {
                    remove(&path).await;
                    None
                }
                None => None,
            }
        })
    }

    fn put<'a>(&'a self, key: &'a str, value: String, ttl: Duration) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            self.sweep_if_due().await;

            let now = Utc::now();
            let expires_at = chrono::Duration::from_std(ttl.min(FAR_FUTURE))
                .ok()
                .and_then(|d| now.checked_add_signed(d))
                .unwrap_or(now);
            let entry = FileEntry { expires_at, value };

            let path = self.path_for(key);
            if let Err(_e) = self.write(&path, &entry).await {
                #[cfg(feature = "tracing")]
                tracing::warn!(key, path = %path.display(), error = %_e, "could not write cache file");
            }
        })
    }

    fn forget<'a>(&'a self, key: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            remove(&self.path_for(key)).await;
        })
    }

    fn flush(&self) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            for path in self.entry_files().await {
                remove(&path).await;
            }
        })
    }
}

async fn read_entry(path: &Path) -> Option<FileEntry> {
    let raw = tokio::fs::read(path).await.ok()?;
    serde_json::from_slice(&raw).ok()
}

async fn remove(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %path.display(), error = %_e, "could not remove cache file");
        }
    }
}
