use crate::core::MnbError;
use crate::core::client::constants::{
    DEFAULT_CACHE_KEY_PREFIX, DEFAULT_CACHE_STORE, DEFAULT_CACHE_TTL_MINUTES, DEFAULT_WSDL_URL,
};
use crate::cache::FileStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Settings a host application supplies to build an [`MnbClient`](crate::MnbClient).
///
/// Missing fields take their defaults when deserialized, so a partial config file works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MnbConfig {
    /// Location of the service WSDL (`MNB_SOAP_WSDL`).
    pub wsdl_url: String,
    /// Name of the cache store to use, `memory`, `file` or `none` (`MNB_CACHE_DRIVER`).
    pub cache_store: String,
    /// Directory of the `file` store (`MNB_CACHE_PATH`).
    pub cache_path: PathBuf,
    /// Prefix of every cache key (`MNB_CACHE_KEY`).
    pub cache_key_prefix: String,
    /// Minutes a cached result stays valid (`MNB_CACHE_MINUTES`).
    pub cache_ttl_minutes: u64,
}

impl Default for MnbConfig {
    fn default() -> Self {
        Self {
            wsdl_url: DEFAULT_WSDL_URL.to_string(),
            cache_store: DEFAULT_CACHE_STORE.to_string(),
            cache_path: FileStore::default_dir(),
            cache_key_prefix: DEFAULT_CACHE_KEY_PREFIX.to_string(),
            cache_ttl_minutes: DEFAULT_CACHE_TTL_MINUTES,
        }
    }
}

impl MnbConfig {
    /// Reads the configuration from the process environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MnbError::Config`] if `MNB_CACHE_MINUTES` is not a non-negative integer.
    pub fn from_env() -> Result<Self, MnbError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), but reads variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`MnbError::Config`] if `MNB_CACHE_MINUTES` is not a non-negative integer.
    pub fn from_vars<F>(lookup: F) -> Result<Self, MnbError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = var("MNB_SOAP_WSDL") {
            cfg.wsdl_url = url;
        }
        if let Some(store) = var("MNB_CACHE_DRIVER") {
            cfg.cache_store = store;
        }
        if let Some(dir) = var("MNB_CACHE_PATH") {
            cfg.cache_path = PathBuf::from(dir);
        }
        if let Some(prefix) = var("MNB_CACHE_KEY") {
            cfg.cache_key_prefix = prefix;
        }
        if let Some(minutes) = var("MNB_CACHE_MINUTES") {
            cfg.cache_ttl_minutes = minutes.trim().parse().map_err(|_| {
                MnbError::Config(format!("MNB_CACHE_MINUTES must be a whole number, got {minutes:?}"))
            })?;
        }

        Ok(cfg)
    }

    /// The TTL as a `Duration`.
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_minutes.saturating_mul(60))
    }
}
