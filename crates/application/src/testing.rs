//! In-memory transport double.
//!
//! [`RecordingTransport`] records every call it receives and answers from a
//! queue of canned responses. No sockets are opened.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use serde_json::Value;
use slackweb_domain::{ApiMethod, Args, HttpVerb};

use crate::ports::{ApiTransport, CancellationReceiver, TransportError};

/// A call observed by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Verb the client picked.
    pub verb: HttpVerb,
    /// Method that was called.
    pub method: ApiMethod,
    /// Arguments as received.
    pub args: Args,
    /// Whether a cancel receiver was forwarded.
    pub had_cancel: bool,
}

#[derive(Default)]
struct Inner {
    calls: Vec<RecordedCall>,
    replies: VecDeque<Result<Value, TransportError>>,
}

/// Transport double that records calls and replays canned replies.
///
/// Replies are consumed in FIFO order by both `post` and `get`. A `post`
/// with no queued reply succeeds; a `get` with no queued reply fails with
/// [`TransportError::InvalidRequest`].
#[derive(Clone, Default)]
pub struct RecordingTransport {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingTransport {
    /// Creates a transport with no queued replies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply body.
    pub fn push_ok(&self, body: Value) {
        self.lock().replies.push_back(Ok(body));
    }

    /// Queues a failure.
    pub fn push_err(&self, error: TransportError) {
        self.lock().replies.push_back(Err(error));
    }

    /// Returns every call received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(
        &self,
        verb: HttpVerb,
        method: ApiMethod,
        args: Args,
        cancel: Option<&CancellationReceiver>,
    ) -> Result<Option<Value>, TransportError> {
        let mut inner = self.lock();
        inner.calls.push(RecordedCall {
            verb,
            method,
            args,
            had_cancel: cancel.is_some(),
        });

        if cancel.is_some_and(CancellationReceiver::is_cancelled) {
            return Err(TransportError::Cancelled);
        }

        inner.replies.pop_front().transpose()
    }
}

impl ApiTransport for RecordingTransport {
    async fn post(
        &self,
        method: ApiMethod,
        args: Args,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        self.record(HttpVerb::Post, method, args, cancel.as_ref())
            .map(|_| ())
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
        let body = self
            .record(HttpVerb::Get, method, args, cancel.as_ref())?
            .ok_or_else(|| {
                TransportError::InvalidRequest(format!("no reply queued for {method}"))
            })?;

        serde_json::from_value(body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}
