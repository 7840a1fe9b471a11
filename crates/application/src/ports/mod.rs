//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the stars client and the outside
//! world. Each port is implemented by an adapter in the infrastructure layer.

mod api_transport;
mod cancellation;

pub use api_transport::{ApiTransport, TransportError};
pub use cancellation::{CancellationReceiver, CancellationToken};
