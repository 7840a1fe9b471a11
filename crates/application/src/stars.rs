//! Stars API client
//!
//! Translates typed stars operations into `stars.add`, `stars.remove` and
//! `stars.list` calls on an [`ApiTransport`].
//!
//! The client keeps no state besides the transport handle, validates
//! nothing locally and returns transport results unchanged. Every operation
//! forwards its cancel receiver as is.

use std::sync::Arc;

use slackweb_domain::{ApiMethod, ListStarsRequest, StarListResponse, StarTarget};

use crate::ports::{ApiTransport, CancellationReceiver, TransportError};

/// Client for the stars resource.
///
/// # Example
///
/// ```ignore
/// let transport = ReqwestApiTransport::new(&config)?;
/// let stars = StarsApi::new(Arc::new(transport));
///
/// stars.add_to_message("C024BE91L", "1700000000.000100", None).await?;
/// let page = stars.list(&ListStarsRequest::default(), None).await?;
/// ```
pub struct StarsApi<T> {
    transport: Arc<T>,
}

impl<T> Clone for StarsApi<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: ApiTransport> StarsApi<T> {
    /// Creates a client over the given transport.
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Adds a star to `target`.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn add(
        &self,
        target: &StarTarget,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        self.post_target(ApiMethod::StarsAdd, target, cancel).await
    }

    /// Removes a star from `target`.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn remove(
        &self,
        target: &StarTarget,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        self.post_target(ApiMethod::StarsRemove, target, cancel).await
    }

    /// Adds a star to a file.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn add_to_file(
        &self,
        file_id: &str,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        self.add(&StarTarget::file(file_id), cancel).await
    }

    /// Adds a star to a file comment.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn add_to_file_comment(
        &self,
        file_comment_id: &str,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        self.add(&StarTarget::file_comment(file_comment_id), cancel).await
    }

    /// Adds a star to a channel, private group or DM.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn add_to_channel(
        &self,
        channel_id: &str,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        self.add(&StarTarget::channel(channel_id), cancel).await
    }

    /// Adds a star to the message posted at `ts` in `channel_id`.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn add_to_message(
        &self,
        channel_id: &str,
        ts: &str,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        self.add(&StarTarget::message(channel_id, ts), cancel).await
    }

    /// Removes a star from a file.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn remove_from_file(
        &self,
        file_id: &str,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        self.remove(&StarTarget::file(file_id), cancel).await
    }

    /// Removes a star from a file comment.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn remove_from_file_comment(
        &self,
        file_comment_id: &str,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        self.remove(&StarTarget::file_comment(file_comment_id), cancel).await
    }

    /// Removes a star from a channel, private group or DM.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn remove_from_channel(
        &self,
        channel_id: &str,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        self.remove(&StarTarget::channel(channel_id), cancel).await
    }

    /// Removes a star from the message posted at `ts` in `channel_id`.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn remove_from_message(
        &self,
        channel_id: &str,
        ts: &str,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        self.remove(&StarTarget::message(channel_id, ts), cancel).await
    }

    /// Lists the items starred by the authenticated user.
    ///
    /// To page through everything, feed [`StarListResponse::next_cursor`]
    /// back in as `request.cursor` until it is `None`.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged; no partial result is kept.
    pub async fn list(
        &self,
        request: &ListStarsRequest,
        cancel: Option<CancellationReceiver>,
    ) -> Result<StarListResponse, TransportError> {
        let method = ApiMethod::StarsList;
        tracing::debug!(
            %method,
            count = request.count,
            page = request.page,
            has_cursor = request.cursor.is_some(),
            "listing stars"
        );
        self.transport
            .get::<StarListResponse>(method, request.to_args(), cancel)
            .await
    }

    async fn post_target(
        &self,
        method: ApiMethod,
        target: &StarTarget,
        cancel: Option<CancellationReceiver>,
    ) -> Result<(), TransportError> {
        tracing::debug!(%method, ?target, "posting star change");
        self.transport.post(method, target.to_args(), cancel).await
    }
}
