//! Centralized constants for the default endpoint, cache settings and UA.

/// Identifies this crate to the MNB service.
pub(crate) const USER_AGENT: &str = concat!("mnb-rs/", env!("CARGO_PKG_VERSION"));

/// Published WSDL of the MNB exchange-rate service.
pub(crate) const DEFAULT_WSDL_URL: &str = "https://www.mnb.hu/arfolyamok.asmx?wsdl";

/// Store used when none is configured.
pub(crate) const DEFAULT_CACHE_STORE: &str = "memory";

/// Prefix put in front of every cache key.
pub(crate) const DEFAULT_CACHE_KEY_PREFIX: &str = "mnb";

/// How long cached results are kept, in minutes (24 hours).
pub(crate) const DEFAULT_CACHE_TTL_MINUTES: u64 = 1440;
