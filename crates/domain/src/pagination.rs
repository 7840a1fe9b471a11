//! Pagination types for `stars.list`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::args::Args;

/// Default number of items per page.
pub const DEFAULT_COUNT: u32 = 100;

/// Default page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Arguments of a `stars.list` call.
///
/// `cursor` is an opaque token taken from a previous response's
/// [`ResponseMetadata::next_cursor`]. When both `page` and `cursor` are set,
/// both are sent and the server decides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStarsRequest {
    /// Number of items to return per page.
    #[serde(default = "default_count")]
    pub count: u32,
    /// Page number of results to return.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Continuation cursor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

const fn default_count() -> u32 {
    DEFAULT_COUNT
}

const fn default_page() -> u32 {
    DEFAULT_PAGE
}

impl Default for ListStarsRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            page: DEFAULT_PAGE,
            cursor: None,
        }
    }
}

impl ListStarsRequest {
    /// Creates a request with default paging.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the continuation cursor.
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Builds the call arguments. `cursor` is left out when absent.
    #[must_use]
    pub fn to_args(&self) -> Args {
        Args::new()
            .with("count", self.count)
            .with("page", self.page)
            .with_opt("cursor", self.cursor.as_deref())
    }
}

/// Pagination metadata attached to cursor-paginated responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Cursor for the next page. `None` once the list is exhausted; the
    /// server's empty string is read as `None`.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_cursor: Option<String>,
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|cursor| !cursor.is_empty()))
}

/// Legacy page-number paging block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Items per page.
    #[serde(default)]
    pub count: u32,
    /// Total number of items.
    #[serde(default)]
    pub total: u32,
    /// Current page.
    #[serde(default)]
    pub page: u32,
    /// Total number of pages.
    #[serde(default)]
    pub pages: u32,
}
