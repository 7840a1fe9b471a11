//! Web API transport port

use std::future::Future;

use serde::de::DeserializeOwned;
use slackweb_domain::{ApiMethod, Args};
use thiserror::Error;

use super::CancellationReceiver;

/// Errors surfaced by an [`ApiTransport`].
///
/// Callers of the stars client see these unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be sent or the response not read.
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The server answered with a non-success HTTP status.
    #[error("unexpected HTTP status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The server asked the client to slow down (HTTP 429).
    #[error("rate limited{}", retry_hint(.retry_after_secs))]
    RateLimited {
        /// Seconds from the `Retry-After` header, when present.
        retry_after_secs: Option<u64>,
    },

    /// The server answered `ok: false`.
    #[error("{method} failed: {code}")]
    Platform {
        /// Method that was called.
        method: ApiMethod,
        /// Error code reported by the server, e.g. `already_starred`.
        code: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The caller cancelled the operation.
    #[error("operation cancelled")]
    Cancelled,
}

impl TransportError {
    /// Returns true for a caller-initiated cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns the server error code of an `ok: false` response.
    #[must_use]
    pub fn platform_code(&self) -> Option<&str> {
        match self {
            Self::Platform { code, .. } => Some(code),
            _ => None,
        }
    }
}

fn retry_hint(retry_after_secs: &Option<u64>) -> String {
    retry_after_secs
        .map(|secs| format!(", retry after {secs}s"))
        .unwrap_or_default()
}

/// Port for calling Web API methods.
///
/// Implementations own HTTP, authentication headers, JSON decoding and
/// error translation. A `cancel` receiver, when given, must be honoured:
/// the call resolves to [`TransportError::Cancelled`] once it fires.
pub trait ApiTransport: Send + Sync {
    /// Calls a method that returns no payload beyond success.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails for any reason.
    fn post(
        &self,
        method: ApiMethod,
        args: Args,
        cancel: Option<CancellationReceiver>,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Calls a method and decodes its response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the body does not decode.
    fn get<T>(
        &self,
        method: ApiMethod,
        args: Args,
        cancel: Option<CancellationReceiver>,
    ) -> impl Future<Output = Result<T, TransportError>> + Send
    where
        T: DeserializeOwned + Send + 'static;
}
