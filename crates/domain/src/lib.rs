//! Slackweb Domain - Stars resource types
//!
//! This crate defines the data model of the stars facet of the Web API.
//! All types here are pure Rust with no I/O dependencies.

pub mod args;
pub mod item;
pub mod method;
pub mod pagination;
pub mod response;
pub mod star;

pub use args::{ArgValue, Args};
pub use item::{StarredFile, StarredFileComment, StarredItem, StarredItemKind, StarredMessage};
pub use method::{ApiMethod, HttpVerb};
pub use pagination::{DEFAULT_COUNT, DEFAULT_PAGE, ListStarsRequest, Paging, ResponseMetadata};
pub use response::StarListResponse;
pub use star::StarTarget;
