//! Collect starred items use case.

use slackweb_domain::{ListStarsRequest, StarredItem};

use crate::ports::{ApiTransport, CancellationReceiver, TransportError};
use crate::stars::StarsApi;

/// Input for collecting starred items across pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectStarredItemsInput {
    /// First page to request; its cursor, if any, is the starting point.
    pub first_page: ListStarsRequest,
    /// Stop after this many pages even if more remain.
    pub max_pages: Option<usize>,
}

impl Default for CollectStarredItemsInput {
    fn default() -> Self {
        Self {
            first_page: ListStarsRequest::default(),
            max_pages: None,
        }
    }
}

/// Output of collecting starred items.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectStarredItemsOutput {
    /// Items from every fetched page, in server order.
    pub items: Vec<StarredItem>,
    /// Number of pages fetched.
    pub pages: usize,
    /// Cursor to resume from when `max_pages` cut the walk short.
    pub next_cursor: Option<String>,
}

/// Use case for following `stars.list` cursors until the list is exhausted.
pub struct CollectStarredItems<T> {
    stars: StarsApi<T>,
}

impl<T: ApiTransport> CollectStarredItems<T> {
    /// Creates a new `CollectStarredItems` use case.
    #[must_use]
    pub const fn new(stars: StarsApi<T>) -> Self {
        Self { stars }
    }

    /// Fetches pages until the server stops returning a cursor.
    ///
    /// The walk also stops once `max_pages` pages were fetched (zero means
    /// no call at all) or when the server hands back the cursor it was just
    /// given. Both cases return the cursor to resume from.
    ///
    /// `count` and `page` of the first request are kept for every call; only
    /// the cursor changes between pages.
    ///
    /// # Errors
    ///
    /// Returns the first transport error; items fetched before it are
    /// discarded.
    pub async fn execute(
        &self,
        input: CollectStarredItemsInput,
        cancel: Option<CancellationReceiver>,
    ) -> Result<CollectStarredItemsOutput, TransportError> {
        let mut request = input.first_page;
        let mut items = Vec::new();
        let mut pages = 0;

        loop {
            if input.max_pages.is_some_and(|max| pages >= max) {
                tracing::info!(pages, "page limit reached, stopping");
                return Ok(CollectStarredItemsOutput {
                    items,
                    pages,
                    next_cursor: request.cursor,
                });
            }

            let response = self.stars.list(&request, cancel.clone()).await?;
            pages += 1;

            let next_cursor = response.next_cursor().map(str::to_string);
            tracing::debug!(
                page = pages,
                items = response.items.len(),
                has_more = next_cursor.is_some(),
                "fetched stars page"
            );
            items.extend(response.items);

            let Some(cursor) = next_cursor else {
                return Ok(CollectStarredItemsOutput {
                    items,
                    pages,
                    next_cursor: None,
                });
            };

            if request.cursor.as_deref() == Some(cursor.as_str()) {
                tracing::warn!(%cursor, pages, "server repeated the cursor, stopping");
                return Ok(CollectStarredItemsOutput {
                    items,
                    pages,
                    next_cursor: Some(cursor),
                });
            }

            request.cursor = Some(cursor);
        }
    }
}
