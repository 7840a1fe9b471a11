//! Web API transport implementation using reqwest.
//!
//! This adapter implements the `ApiTransport` port. `post` calls send their
//! arguments as a form-encoded body, `get` calls as query parameters; both
//! decode the response envelope.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use slackweb_application::{ApiTransport, CancellationReceiver, TransportError};
use slackweb_domain::{ApiMethod, Args, HttpVerb};

use crate::config::ClientConfig;
use crate::serialization::decode_envelope;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Web API transport backed by `reqwest::Client`.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ReqwestApiTransport {
    client: Client,
    base_url: Url,
    token: Option<String>,
    timeout_ms: u64,
}

impl ReqwestApiTransport {
    /// Creates a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the client cannot be
    /// created.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        Self::with_client(client, config)
    }

    /// Creates a transport with a custom reqwest client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_client(client: Client, config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self {
            client,
            base_url: Self::normalize_base_url(&config.base_url)?,
            token: config.token.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    /// Parses the base URL, making sure method names join under its path.
    fn normalize_base_url(base_url: &str) -> Result<Url, TransportError> {
        let mut base = base_url.trim_end_matches('/').to_string();
        base.push('/');
        Url::parse(&base).map_err(|e| TransportError::InvalidRequest(format!("{e}: {base_url}")))
    }

    /// Returns the endpoint URL for a method.
    fn endpoint(&self, method: ApiMethod) -> Result<Url, TransportError> {
        self.base_url
            .join(method.as_str())
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))
    }

    /// Builds the HTTP request for a call.
    fn build_request(
        &self,
        verb: HttpVerb,
        method: ApiMethod,
        args: &Args,
    ) -> Result<RequestBuilder, TransportError> {
        let mut url = self.endpoint(method)?;

        let builder = match verb {
            HttpVerb::Get => {
                if !args.is_empty() {
                    url.query_pairs_mut()
                        .extend_pairs(args.iter().map(|(k, v)| (k, v.to_string())));
                }
                self.client.get(url)
            }
            HttpVerb::Post => {
                let body = serde_urlencoded::to_string(args)
                    .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                self.client
                    .post(url)
                    .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                    .body(body)
            }
        };

        let builder = builder.timeout(Duration::from_millis(self.timeout_ms));
        Ok(match &self.token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        })
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }
        if error.is_builder() {
            return TransportError::InvalidRequest(error.to_string());
        }
        if error.is_decode() {
            return TransportError::Decode(error.to_string());
        }
        TransportError::Network(error.to_string())
    }

    /// Sends the request and returns the raw success body.
    async fn execute(&self, request: RequestBuilder) -> Result<Vec<u8>, TransportError> {
        let response = request
            .send()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout_ms))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok());
            return Err(TransportError::RateLimited { retry_after_secs });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| Self::map_error(&e, self.timeout_ms))
    }

    /// Performs one call, racing it against the cancel signal.
    async fn call<T: DeserializeOwned>(
        &self,
        method: ApiMethod,
        args: Args,
        cancel: Option<CancellationReceiver>,
    ) -> Result<T, TransportError> {
        let verb = method.verb();
        tracing::debug!(%verb, %method, args = args.len(), "calling Web API");

        if cancel.as_ref().is_some_and(CancellationReceiver::is_cancelled) {
            return Err(TransportError::Cancelled);
        }

        let request = self.build_request(verb, method, &args)?;
        let body = match cancel {
            Some(mut cancel) => {
                tokio::select! {
                    result = self.execute(request) => result?,
                    () = cancel.cancelled() => {
                        tracing::debug!(%method, "call cancelled");
                        return Err(TransportError::Cancelled);
                    }
                }
            }
            None => self.execute(request).await?,
        };

        decode_envelope(method, &body)
    }
}

impl ApiTransport for ReqwestApiTransport {
    async fn post(
        &self,
        method: ApiMethod,
        args: Args,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        self.call::<IgnoredAny>(method, args, cancel).await.map(|_| ())
    }

    async fn get<T>(
        &self,
        method: ApiMethod,
        args: Args,
        cancel: Option<CancellationReceiver>,
    ) -> Result<T, TransportError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.call(method, args, cancel).await
    }
}
