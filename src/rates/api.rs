use super::model::{ExchangeRate, RateTable};
use super::wire::{parse_rate_table, parse_single_rate};
use crate::cache::CacheKey;
use crate::core::{MnbClient, MnbError, ToRateDate};
use chrono::NaiveDate;

impl MnbClient {
    /// Rates of the latest publishing day for every currency.
    ///
    /// One table is cached for all currencies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload has no `Day/Rate` entries.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn current_exchange_rates(&self) -> Result<RateTable, MnbError> {
        self.remember(CacheKey::Current, || async move {
            let xml = self.service().fetch_current_rates().await?;
            parse_rate_table(&xml)
        })
        .await
    }

    /// The latest rate of `code`, looked up in [`current_exchange_rates`](Self::current_exchange_rates).
    ///
    /// # Errors
    ///
    /// Same as [`current_exchange_rates`](Self::current_exchange_rates).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn current_exchange_rate(&self, code: &str) -> Result<Option<ExchangeRate>, MnbError> {
        Ok(self.current_exchange_rates().await?.get(code).copied())
    }

    /// The official rate of `code` on `date`, or on the last opening date when `date` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if resolving the last opening date fails, the request fails, or the
    /// payload has no rate for `code`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn exchange_rate(
        &self,
        code: &str,
        date: Option<NaiveDate>,
    ) -> Result<ExchangeRate, MnbError> {
        let date = match date {
            Some(d) => d,
            None => self.last_opening_date().await?,
        };

        let key = CacheKey::Rate {
            code: code.to_string(),
            date,
        };
        self.remember(key, || async move {
            let xml = self
                .service()
                .fetch_exchange_rates(date, date, &[code])
                .await?;
            parse_single_rate(&xml, code)
        })
        .await
    }

    /// Like [`exchange_rate`](Self::exchange_rate), accepting any [`ToRateDate`] value.
    ///
    /// # Errors
    ///
    /// Returns [`MnbError::InvalidDate`] when `date` cannot be read, otherwise the same errors
    /// as [`exchange_rate`](Self::exchange_rate).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, date), err))]
    pub async fn exchange_rate_at(
        &self,
        code: &str,
        date: impl ToRateDate,
    ) -> Result<ExchangeRate, MnbError> {
        let date = date.to_rate_date()?;
        self.exchange_rate(code, Some(date)).await
    }
}
