//! Application use cases built on the stars client.

mod collect_starred_items;

pub use collect_starred_items::*;
