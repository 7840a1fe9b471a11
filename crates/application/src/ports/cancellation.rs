//! Cancellation signal port
//!
//! A [`CancellationToken`] is held by whoever may abort an operation; the
//! matching [`CancellationReceiver`] travels with the operation down to the
//! transport, which decides how to stop.

use tokio::sync::watch;

/// Sending half of a cancellation signal.
#[derive(Debug)]
pub struct CancellationToken {
    sender: watch::Sender<bool>,
}

/// Receiving half of a cancellation signal.
///
/// Cheap to clone; every clone observes the same signal.
#[derive(Debug, Clone)]
pub struct CancellationReceiver {
    receiver: watch::Receiver<bool>,
}

impl CancellationToken {
    /// Creates a new token and its receiver.
    #[must_use]
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (Self, CancellationReceiver) {
        let (sender, receiver) = watch::channel(false);
        (Self { sender }, CancellationReceiver { receiver })
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns true once cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Returns another receiver for this token.
    #[must_use]
    pub fn receiver(&self) -> CancellationReceiver {
        CancellationReceiver {
            receiver: self.sender.subscribe(),
        }
    }
}

impl CancellationReceiver {
    /// Returns true once cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Completes when cancellation is requested.
    ///
    /// Completes immediately if it already was. Never completes if the
    /// token is dropped without cancelling.
    pub async fn cancelled(&mut self) {
        if self.receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
