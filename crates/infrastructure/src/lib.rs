//! Slackweb Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading.

pub mod adapters;
pub mod config;
pub mod serialization;

pub use adapters::ReqwestApiTransport;
pub use self::config::{ClientConfig, ConfigError};
pub use serialization::{UNKNOWN_ERROR_CODE, decode_envelope};
