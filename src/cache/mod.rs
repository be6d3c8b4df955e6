//! Cache stores and the read-through primitive the client is built on.

mod file;
mod key;
mod memory;

pub use file::FileStore;
pub use key::CacheKey;
pub use memory::{MemoryStore, NullStore};

use crate::core::MnbError;
use futures::future::BoxFuture;
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Defines the behavior of the cache for an API call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise, fetch from the network
    /// and write the result to the cache. (Default)
    #[default]
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write the new result to
    /// the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

/// A key-value store holding serialized results with an expiry.
///
/// Implementations must not panic on backend failures: a failed read is a miss and a failed
/// write is dropped.
pub trait CacheStore: Send + Sync {
    /// Returns the stored value for `key` unless it is absent or expired.
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Option<String>>;

    /// Stores `value` under `key` for `ttl`.
    fn put<'a>(&'a self, key: &'a str, value: String, ttl: Duration) -> BoxFuture<'a, ()>;

    /// Removes `key`.
    fn forget<'a>(&'a self, key: &'a str) -> BoxFuture<'a, ()>;

    /// Removes every entry.
    fn flush(&self) -> BoxFuture<'_, ()>;
}

/// Resolves a store by its configured name.
///
/// | Name | Store |
/// |---|---|
/// | `file` | [`FileStore`] rooted at `dir` |
/// | `memory` (alias `array`) | [`MemoryStore`] |
/// | `none` (alias `null`) | [`NullStore`] |
///
/// Names are matched case-insensitively; `dir` is only used by `file`.
///
/// # Errors
///
/// Returns [`MnbError::Config`] for unknown names.
pub fn store_by_name(name: &str, dir: &Path) -> Result<Arc<dyn CacheStore>, MnbError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "file" => Ok(Arc::new(FileStore::new(dir))),
        "memory" | "array" => Ok(Arc::new(MemoryStore::new())),
        "none" | "null" => Ok(Arc::new(NullStore)),
        other => Err(MnbError::Config(format!("unknown cache store {other:?}"))),
    }
}

/// Returns the cached value for `key`, or runs `producer`, stores its result for `ttl` and
/// returns it.
///
/// Errors from `producer` are returned as-is and nothing is stored. A stored entry that no
/// longer decodes as `T` counts as a miss. A zero `ttl` never stores.
pub async fn read_through<T, F, Fut>(
    store: &dyn CacheStore,
    key: &str,
    ttl: Duration,
    mode: CacheMode,
    producer: F,
) -> Result<T, MnbError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, MnbError>>,
{
    if mode == CacheMode::Use
        && let Some(stored) = store.get(key).await
    {
        match serde_json::from_str(&stored) {
            Ok(value) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(key, "cache hit");
                return Ok(value);
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(key, error = %_e, "discarding undecodable cache entry");
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(key, ?mode, "cache miss");

    let value = producer().await?;

    if mode != CacheMode::Bypass && !ttl.is_zero() {
        match serde_json::to_string(&value) {
            Ok(encoded) => store.put(key, encoded, ttl).await,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(key, error = %_e, "could not encode value for cache");
            }
        }
    }

    Ok(value)
}
