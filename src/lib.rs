//! mnb-rs: caching client for the Hungarian National Bank (MNB) exchange-rate service.
//!
//! The MNB publishes official HUF exchange rates through a SOAP service. Calling it is slow and
//! rate-limited, so every query goes through a cache: the first call fetches and validates the
//! payload, later calls within the TTL are answered from the store.
//!
//! ```no_run
//! # use mnb_rs::MnbClient;
//! # #[tokio::main]
//! # async fn main() -> Result<(), mnb_rs::MnbError> {
//! let client = MnbClient::from_env().await?;
//!
//! if client.has_currency("EUR").await? {
//!     let today = client.current_exchange_rates().await?;
//!     println!("EUR today: {:?}", today.get("EUR"));
//!     let past = client.exchange_rate_at("EUR", "2024-01-02").await?;
//!     println!("EUR on 2024-01-02: {}", past.rate);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod core;
mod currencies;
pub mod interval;
pub mod rates;
pub mod soap;

pub use cache::{CacheKey, CacheMode, CacheStore, FileStore, MemoryStore, NullStore};
pub use crate::core::{MnbClient, MnbClientBuilder, MnbConfig, MnbError, ToRateDate};
pub use interval::DateInterval;
pub use rates::{ExchangeRate, RateTable};
pub use soap::{HttpTransport, MnbService, Operation, SoapCall, Transport};
