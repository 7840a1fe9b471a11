//! Slackweb Application - Stars client and ports
//!
//! This crate defines the application layer with:
//! - Port traits (the Web API transport and cancellation signals)
//! - The stars client that maps typed operations onto Web API calls
//! - Use cases composed from the client

pub mod ports;
pub mod stars;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod use_cases;

pub use ports::{ApiTransport, CancellationReceiver, CancellationToken, TransportError};
pub use stars::StarsApi;
pub use use_cases::{CollectStarredItems, CollectStarredItemsInput, CollectStarredItemsOutput};
