//! Infrastructure adapters

mod reqwest_transport;

pub use reqwest_transport::ReqwestApiTransport;
