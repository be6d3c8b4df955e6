use crate::soap::Operation;
use thiserror::Error;

/// Boxed lower-level cause carried by connection and transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The primary error type for all fallible operations in this crate.
///
/// Every failure that can happen between a public [`MnbClient`](crate::MnbClient) call and the
/// remote service surfaces as one of these variants. Failures that happened after a payload was
/// received keep that payload around; see [`MnbError::xml`].
#[derive(Debug, Error)]
pub enum MnbError {
    /// The SOAP endpoint could not be resolved while the client was being built.
    #[error("failed to initialize SOAP API connection: {message}")]
    Connection {
        /// What went wrong during endpoint resolution.
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<BoxError>,
    },

    /// A remote call failed in transit (connection reset, timeout, unreadable body, ...).
    #[error("{operation} call failed: {source}")]
    Transport {
        /// The remote operation that was being invoked.
        operation: Operation,
        /// The underlying transport error.
        #[source]
        source: BoxError,
    },

    /// The endpoint answered with an unsuccessful HTTP status code.
    #[error("{operation} returned unexpected status {status} at {url}")]
    Status {
        /// The remote operation that was being invoked.
        operation: Operation,
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The response body, if one could be read.
        body: Option<String>,
    },

    /// The endpoint returned a SOAP fault instead of a result.
    #[error("{operation} returned a SOAP fault: {message}")]
    Fault {
        /// The remote operation that was being invoked.
        operation: Operation,
        /// The `faultstring` reported by the service.
        message: String,
        /// The raw response envelope.
        xml: String,
    },

    /// The payload was empty, malformed, or missing the expected data.
    #[error("unexpected response format: {message}")]
    Format {
        /// Which part of the payload was unusable.
        message: String,
        /// The raw payload exactly as it was received.
        xml: String,
    },

    /// A date argument could not be reduced to a calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The client configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl MnbError {
    pub(crate) fn connection(message: impl Into<String>) -> Self {
        MnbError::Connection {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn connection_with(
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        MnbError::Connection {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Wraps a transport-level error raised while invoking `operation`.
    ///
    /// Custom [`Transport`](crate::soap::Transport) implementations should use this to report
    /// their own failures.
    pub fn transport(operation: Operation, source: impl Into<BoxError>) -> Self {
        MnbError::Transport {
            operation,
            source: source.into(),
        }
    }

    /// Builds a format error that keeps the offending payload for diagnostics.
    pub fn format(message: impl Into<String>, xml: impl Into<String>) -> Self {
        MnbError::Format {
            message: message.into(),
            xml: xml.into(),
        }
    }

    /// The raw payload received from the service, when the failure happened after one arrived.
    #[must_use]
    pub fn xml(&self) -> Option<&str> {
        match self {
            MnbError::Format { xml, .. } | MnbError::Fault { xml, .. } => Some(xml),
            MnbError::Status { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// Whether this error was raised while building the client.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, MnbError::Connection { .. })
    }
}
