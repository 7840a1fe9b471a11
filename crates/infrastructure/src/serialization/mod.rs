//! Web API payload decoding.

mod envelope;

pub use envelope::*;
