//! SOAP plumbing: the remote operations, the transport seam and the data source built on it.

mod envelope;
mod http;
mod service;
mod wsdl;

pub use http::{HttpTransport, HttpTransportBuilder};
pub use service::MnbService;

use crate::core::MnbError;
use futures::future::BoxFuture;
use std::fmt;

/// Namespace of the MNB web service messages.
pub(crate) const SERVICE_NS: &str = "http://www.mnb.hu/webservices/";

/// The remote operations this crate knows how to invoke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List of currency codes the bank publishes rates for.
    GetCurrencies,
    /// Rates of the most recent publishing day.
    GetCurrentExchangeRates,
    /// Rates for a date range and a set of currencies.
    GetExchangeRates,
    /// First and last day the bank has published rates for.
    GetDateInterval,
}

impl Operation {
    /// Every operation, in a stable order.
    pub const ALL: [Operation; 4] = [
        Operation::GetCurrencies,
        Operation::GetCurrentExchangeRates,
        Operation::GetExchangeRates,
        Operation::GetDateInterval,
    ];

    /// The SOAP operation name as it appears in the WSDL.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Operation::GetCurrencies => "GetCurrencies",
            Operation::GetCurrentExchangeRates => "GetCurrentExchangeRates",
            Operation::GetExchangeRates => "GetExchangeRates",
            Operation::GetDateInterval => "GetDateInterval",
        }
    }

    /// Element wrapping the operation's response.
    #[must_use]
    pub const fn response_element(self) -> &'static str {
        match self {
            Operation::GetCurrencies => "GetCurrenciesResponse",
            Operation::GetCurrentExchangeRates => "GetCurrentExchangeRatesResponse",
            Operation::GetExchangeRates => "GetExchangeRatesResponse",
            Operation::GetDateInterval => "GetDateIntervalResponse",
        }
    }

    /// Element holding the operation's payload string.
    #[must_use]
    pub const fn result_element(self) -> &'static str {
        match self {
            Operation::GetCurrencies => "GetCurrenciesResult",
            Operation::GetCurrentExchangeRates => "GetCurrentExchangeRatesResult",
            Operation::GetExchangeRates => "GetExchangeRatesResult",
            Operation::GetDateInterval => "GetDateIntervalResult",
        }
    }

    /// `SOAPAction` used when the WSDL binding does not declare one.
    #[must_use]
    pub fn default_soap_action(self) -> String {
        format!("{SERVICE_NS}MNBArfolyamServiceSoap/{}", self.name())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single remote invocation: the operation plus its named parameters, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoapCall {
    /// The operation to invoke.
    pub operation: Operation,
    /// Parameter name/value pairs, serialized as child elements of the request element.
    pub params: Vec<(&'static str, String)>,
}

impl SoapCall {
    /// A call without parameters.
    #[must_use]
    pub const fn new(operation: Operation) -> Self {
        Self {
            operation,
            params: Vec::new(),
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A request/response RPC client able to invoke the service operations.
///
/// Implementations return the operation's result payload (the text of the `<...Result>`
/// element, usually an XML document) or a typed error. [`HttpTransport`] is the production
/// implementation; tests can substitute their own.
pub trait Transport: Send + Sync {
    /// Invokes `call` and returns its raw result payload.
    fn invoke<'a>(&'a self, call: &'a SoapCall) -> BoxFuture<'a, Result<String, MnbError>>;
}
