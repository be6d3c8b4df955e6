use super::model::DateInterval;
use super::wire::parse_interval;
use crate::cache::CacheKey;
use crate::core::{MnbClient, MnbError};
use chrono::NaiveDate;

impl MnbClient {
    /// The most recent day the bank published rates for.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload has no valid `enddate`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn last_opening_date(&self) -> Result<NaiveDate, MnbError> {
        self.remember(CacheKey::End, || async move {
            Ok(self.fetch_interval().await?.last)
        })
        .await
    }

    /// The earliest day the bank published rates for.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload has no valid `startdate`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn first_opening_date(&self) -> Result<NaiveDate, MnbError> {
        self.remember(CacheKey::Start, || async move {
            Ok(self.fetch_interval().await?.first)
        })
        .await
    }

    /// Both opening dates, cached as one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a valid interval.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn date_interval(&self) -> Result<DateInterval, MnbError> {
        self.remember(CacheKey::Interval, move || self.fetch_interval())
            .await
    }

    async fn fetch_interval(&self) -> Result<DateInterval, MnbError> {
        let xml = self.service().fetch_date_interval().await?;
        parse_interval(&xml)
    }
}
