use super::wire::parse_currencies;
use crate::cache::CacheKey;
use crate::core::{MnbClient, MnbError};

impl MnbClient {
    /// Currency codes the bank publishes rates for, in the order the service lists them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload has no `Currencies/Curr` entries.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn currencies(&self) -> Result<Vec<String>, MnbError> {
        self.remember(CacheKey::Currencies, || async move {
            let xml = self.service().fetch_currencies().await?;
            parse_currencies(&xml)
        })
        .await
    }

    /// Whether `code` is among [`currencies`](Self::currencies). Shares its cache entry.
    ///
    /// # Errors
    ///
    /// Same as [`currencies`](Self::currencies).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn has_currency(&self, code: &str) -> Result<bool, MnbError> {
        Ok(self.currencies().await?.iter().any(|c| c == code))
    }
}
