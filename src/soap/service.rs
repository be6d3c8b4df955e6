use super::{Operation, SoapCall, Transport};
use crate::core::MnbError;
use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;

/// The remote data source: the four MNB operations on top of a [`Transport`].
///
/// Every method returns the raw result payload; parsing it is the caller's business.
#[derive(Clone)]
pub struct MnbService {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for MnbService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MnbService").finish_non_exhaustive()
    }
}

impl MnbService {
    /// Wraps a transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Swaps the underlying transport.
    pub fn set_transport(&mut self, transport: Arc<dyn Transport>) {
        self.transport = transport;
    }

    /// Invokes `GetCurrencies`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the transport reports.
    pub async fn fetch_currencies(&self) -> Result<String, MnbError> {
        self.call(SoapCall::new(Operation::GetCurrencies)).await
    }

    /// Invokes `GetCurrentExchangeRates`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the transport reports.
    pub async fn fetch_current_rates(&self) -> Result<String, MnbError> {
        self.call(SoapCall::new(Operation::GetCurrentExchangeRates))
            .await
    }

    /// Invokes `GetExchangeRates` for an inclusive date range and one or more currencies.
    ///
    /// # Errors
    ///
    /// Returns [`MnbError::Config`] when `codes` is empty; otherwise propagates whatever the
    /// transport reports.
    pub async fn fetch_exchange_rates<S: AsRef<str>>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        codes: &[S],
    ) -> Result<String, MnbError> {
        if codes.is_empty() {
            return Err(MnbError::Config(
                "at least one currency code is required".into(),
            ));
        }
        let names = codes
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(",");

        let call = SoapCall::new(Operation::GetExchangeRates)
            .param("startDate", iso(start))
            .param("endDate", iso(end))
            .param("currencyNames", names);
        self.call(call).await
    }

    /// Invokes `GetDateInterval`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the transport reports.
    pub async fn fetch_date_interval(&self) -> Result<String, MnbError> {
        self.call(SoapCall::new(Operation::GetDateInterval)).await
    }

    async fn call(&self, call: SoapCall) -> Result<String, MnbError> {
        self.transport.invoke(&call).await
    }
}

pub(crate) fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
