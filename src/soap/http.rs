//! `reqwest`-backed SOAP transport.

use super::envelope;
use super::wsdl::{self, ServiceDescription};
use super::{SoapCall, Transport};
use crate::core::MnbError;
use crate::core::client::constants::USER_AGENT;
use futures::future::BoxFuture;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use std::time::Duration;
use url::Url;

/// SOAP over HTTP, using an endpoint resolved from the service's WSDL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    service: ServiceDescription,
}

impl HttpTransport {
    /// Create a new builder.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    /// The URL SOAP requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.service.endpoint
    }

    async fn post(&self, call: &SoapCall) -> Result<String, MnbError> {
        let operation = call.operation;
        let action = self.service.soap_action(operation);

        #[cfg(feature = "tracing")]
        tracing::debug!(%operation, endpoint = %self.service.endpoint, "invoking SOAP operation");

        let resp = self
            .http
            .post(self.service.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("text/xml; charset=utf-8"))
            .header("SOAPAction", format!("\"{action}\""))
            .body(envelope::request_body(call))
            .send()
            .await
            .map_err(|e| MnbError::transport(operation, e))?;

        let status = resp.status();
        let url = resp.url().to_string();
        let text = resp
            .text()
            .await
            .map_err(|e| MnbError::transport(operation, e))?;

        if !status.is_success() {
            // Faults travel with a 500; report them as faults rather than bare statuses.
            return match envelope::unwrap_result(operation, &text) {
                Err(fault @ MnbError::Fault { .. }) => Err(fault),
                _ => Err(MnbError::Status {
                    operation,
                    status: status.as_u16(),
                    url,
                    body: (!text.is_empty()).then_some(text),
                }),
            };
        }

        envelope::unwrap_result(operation, &text)
    }
}

impl Transport for HttpTransport {
    fn invoke<'a>(&'a self, call: &'a SoapCall) -> BoxFuture<'a, Result<String, MnbError>> {
        Box::pin(self.post(call))
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and connects an [`HttpTransport`].
#[derive(Default, Debug)]
pub struct HttpTransportBuilder {
    wsdl_url: Option<String>,
    endpoint: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl HttpTransportBuilder {
    /// Location of the service WSDL. The SOAP endpoint is read from it on connect.
    pub fn wsdl_url(mut self, url: impl Into<String>) -> Self {
        self.wsdl_url = Some(url.into());
        self
    }

    /// Post to this endpoint directly instead of resolving it from the WSDL.
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

    /// Builds the HTTP client and resolves the SOAP endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`MnbError::Connection`] if the URL is invalid, the WSDL cannot be downloaded,
    /// or the document is not a WSDL.
    pub async fn connect(self) -> Result<HttpTransport, MnbError> {
        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb
            .build()
            .map_err(|e| MnbError::connection_with("could not build HTTP client", e))?;

        let service = match (self.endpoint, self.wsdl_url) {
            (Some(endpoint), _) => ServiceDescription::fixed(parse_http_url(&endpoint)?),
            (None, Some(wsdl_url)) => resolve(&http, &parse_http_url(&wsdl_url)?).await?,
            (None, None) => return Err(MnbError::connection("no WSDL URL configured")),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(endpoint = %service.endpoint, "SOAP endpoint resolved");

        Ok(HttpTransport { http, service })
    }
}

fn parse_http_url(raw: &str) -> Result<Url, MnbError> {
    let url = Url::parse(raw)
        .map_err(|e| MnbError::connection_with(format!("invalid URL {raw:?}"), e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(MnbError::connection(format!(
            "unsupported URL scheme {other:?} in {raw:?}"
        ))),
    }
}

async fn resolve(http: &reqwest::Client, wsdl_url: &Url) -> Result<ServiceDescription, MnbError> {
    let resp = http
        .get(wsdl_url.clone())
        .send()
        .await
        .map_err(|e| MnbError::connection_with(format!("could not fetch WSDL from {wsdl_url}"), e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(MnbError::connection(format!(
            "WSDL request to {wsdl_url} returned status {}",
            status.as_u16()
        )));
    }

    let document = resp
        .text()
        .await
        .map_err(|e| MnbError::connection_with("could not read WSDL body", e))?;

    wsdl::describe(wsdl_url, &document)
}
