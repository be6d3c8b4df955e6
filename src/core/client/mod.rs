//! Public client surface + builder.
//! Defaults live in `constants`; the query methods are implemented next to their parsers in
//! `currencies`, `rates` and `interval`.

pub(crate) mod constants;

use crate::cache::{self, CacheKey, CacheMode, CacheStore, FileStore};
use crate::core::{MnbConfig, MnbError};
use crate::soap::{HttpTransport, MnbService, Transport};
use constants::{DEFAULT_CACHE_KEY_PREFIX, DEFAULT_CACHE_STORE, DEFAULT_CACHE_TTL_MINUTES, DEFAULT_WSDL_URL};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Caching client for the MNB exchange-rate service.
///
/// Every query is answered from the cache when possible; otherwise the service is called, the
/// payload validated, and the normalized result stored for the configured TTL. Failed calls are
/// never cached.
///
/// # Example
///
/// ```no_run
/// # use mnb_rs::MnbClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), mnb_rs::MnbError> {
/// let client = MnbClient::builder().build().await?;
/// let eur = client.exchange_rate("EUR", None).await?;
/// println!("1 EUR = {} HUF", eur.per_unit());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MnbClient {
    service: MnbService,
    cache: Arc<dyn CacheStore>,
    key_prefix: String,
    ttl: Duration,
    cache_mode: CacheMode,
}

impl fmt::Debug for MnbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MnbClient")
            .field("key_prefix", &self.key_prefix)
            .field("ttl", &self.ttl)
            .field("cache_mode", &self.cache_mode)
            .finish_non_exhaustive()
    }
}

impl MnbClient {
    /// Create a new builder.
    pub fn builder() -> MnbClientBuilder {
        MnbClientBuilder::default()
    }

    /// Builds a client from host-supplied settings.
    ///
    /// # Errors
    ///
    /// Fails with [`MnbError::Config`] for an unknown cache store and with
    /// [`MnbError::Connection`] when the WSDL endpoint cannot be resolved.
    pub async fn from_config(config: &MnbConfig) -> Result<Self, MnbError> {
        Self::builder()
            .wsdl_url(&config.wsdl_url)
            .cache_store_name(&config.cache_store)
            .cache_path(&config.cache_path)
            .cache_key_prefix(&config.cache_key_prefix)
            .cache_ttl(config.cache_ttl())
            .build()
            .await
    }

    /// Builds a client from the `MNB_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`MnbConfig::from_env`] and [`MnbClient::from_config`].
    pub async fn from_env() -> Result<Self, MnbError> {
        Self::from_config(&MnbConfig::from_env()?).await
    }

    /// Replaces the transport used for remote calls.
    pub fn set_transport(&mut self, transport: Arc<dyn Transport>) {
        self.service.set_transport(transport);
    }

    /// Replaces the cache store.
    pub fn set_cache(&mut self, cache: Arc<dyn CacheStore>) {
        self.cache = cache;
    }

    /// Changes how subsequent calls use the cache.
    pub fn set_cache_mode(&mut self, mode: CacheMode) {
        self.cache_mode = mode;
    }

    /// The remote data source.
    pub fn service(&self) -> &MnbService {
        &self.service
    }

    /// The cache store.
    pub fn cache(&self) -> &Arc<dyn CacheStore> {
        &self.cache
    }

    /// Prefix of every cache key.
    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    /// How long results are cached.
    pub const fn cache_ttl(&self) -> Duration {
        self.ttl
    }

    /// The cache mode applied to every call.
    pub const fn cache_mode(&self) -> CacheMode {
        self.cache_mode
    }

    /// The full cache key for `key` under this client's prefix.
    pub fn cache_key(&self, key: &CacheKey) -> String {
        key.render(&self.key_prefix)
    }

    /// Removes every entry from the cache store.
    pub async fn clear_cache(&self) {
        self.cache.flush().await;
    }

    /// Removes a single cached result.
    pub async fn forget(&self, key: &CacheKey) {
        self.cache.forget(&self.cache_key(key)).await;
    }

    pub(crate) async fn remember<T, F, Fut>(&self, key: CacheKey, producer: F) -> Result<T, MnbError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, MnbError>>,
    {
        let key = self.cache_key(&key);
        cache::read_through(&*self.cache, &key, self.ttl, self.cache_mode, producer).await
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures an [`MnbClient`].
#[derive(Default)]
pub struct MnbClientBuilder {
    wsdl_url: Option<String>,
    endpoint: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,

    transport: Option<Arc<dyn Transport>>,
    cache_store: Option<Arc<dyn CacheStore>>,
    cache_store_name: Option<String>,
    cache_path: Option<PathBuf>,
    cache_key_prefix: Option<String>,
    cache_ttl: Option<Duration>,
    cache_mode: CacheMode,
}

impl MnbClientBuilder {
    /// Override the WSDL location (default: `https://www.mnb.hu/arfolyamok.asmx?wsdl`).
    pub fn wsdl_url(mut self, url: impl Into<String>) -> Self {
        self.wsdl_url = Some(url.into());
        self
    }

    /// Post SOAP requests to this endpoint without downloading the WSDL.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Use this transport instead of connecting over HTTP. No endpoint resolution happens.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use this cache store. Takes precedence over [`cache_store_name`](Self::cache_store_name).
    pub fn cache_store(mut self, store: Arc<dyn CacheStore>) -> Self {
        self.cache_store = Some(store);
        self
    }

    /// Pick a built-in store by name: `memory` (default), `file` or `none`.
    pub fn cache_store_name(mut self, name: impl Into<String>) -> Self {
        self.cache_store_name = Some(name.into());
        self
    }

    /// Directory of the `file` store (default: [`FileStore::default_dir`]).
    pub fn cache_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(dir.into());
        self
    }

    /// Prefix of every cache key (default: `mnb`).
    pub fn cache_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.cache_key_prefix = Some(prefix.into());
        self
    }

    /// How long results are cached (default: 1440 minutes). Zero disables storing.
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// How calls use the cache (default: [`CacheMode::Use`]).
    pub fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Builds the client, resolving the SOAP endpoint right away.
    ///
    /// # Errors
    ///
    /// Fails with [`MnbError::Config`] for an unknown cache store name and with
    /// [`MnbError::Connection`] when the endpoint cannot be resolved.
    pub async fn build(self) -> Result<MnbClient, MnbError> {
        let cache = match self.cache_store {
            Some(store) => store,
            None => cache::store_by_name(
                self.cache_store_name
                    .as_deref()
                    .unwrap_or(DEFAULT_CACHE_STORE),
                &self.cache_path.unwrap_or_else(FileStore::default_dir),
            )?,
        };

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => {
                let mut tb = HttpTransport::builder()
                    .wsdl_url(self.wsdl_url.as_deref().unwrap_or(DEFAULT_WSDL_URL));
                if let Some(endpoint) = self.endpoint {
                    tb = tb.endpoint(endpoint);
                }
                if let Some(ua) = self.user_agent {
                    tb = tb.user_agent(ua);
                }
                if let Some(t) = self.timeout {
                    tb = tb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    tb = tb.connect_timeout(ct);
                }
                Arc::new(tb.connect().await?)
            }
        };

        Ok(MnbClient {
            service: MnbService::new(transport),
            cache,
            key_prefix: self
                .cache_key_prefix
                .unwrap_or_else(|| DEFAULT_CACHE_KEY_PREFIX.to_string()),
            ttl: self
                .cache_ttl
                .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TTL_MINUTES * 60)),
            cache_mode: self.cache_mode,
        })
    }
}
