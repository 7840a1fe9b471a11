//! Response types

use serde::{Deserialize, Serialize};

use crate::item::StarredItem;
use crate::pagination::{Paging, ResponseMetadata};

/// Body of a successful `stars.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarListResponse {
    /// Starred items, in server order.
    #[serde(default)]
    pub items: Vec<StarredItem>,
    /// Cursor pagination metadata, when the server sent any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_metadata: Option<ResponseMetadata>,
    /// Page-number paging block, when the server sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

impl StarListResponse {
    /// Returns the cursor to pass to the next `stars.list` call, or `None`
    /// when there are no more results.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.response_metadata
            .as_ref()
            .and_then(|metadata| metadata.next_cursor.as_deref())
    }

    /// Returns true if another page can be requested with a cursor.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_cursor().is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::item::StarredItemKind;

    #[test]
    fn test_next_cursor_from_metadata() {
        let response: StarListResponse = serde_json::from_str(
            r#"{
                "ok": true,
                "items": [{"type": "channel", "channel": "C1"}],
                "response_metadata": {"next_cursor": "xyz"}
            }"#,
        )
        .unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].kind, StarredItemKind::Channel);
        assert_eq!(response.next_cursor(), Some("xyz"));
        assert!(response.has_more());
    }

    #[test]
    fn test_absent_metadata_is_not_an_error() {
        let response: StarListResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();

        assert_eq!(response.response_metadata, None);
        assert_eq!(response.next_cursor(), None);
        assert!(!response.has_more());
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let response: StarListResponse =
            serde_json::from_str(r#"{"response_metadata": {"next_cursor": ""}}"#).unwrap();

        assert!(response.items.is_empty());
        assert_eq!(response.next_cursor(), None);
    }

    #[test]
    fn test_legacy_paging_block() {
        let response: StarListResponse = serde_json::from_str(
            r#"{"items": [], "paging": {"count": 100, "total": 3, "page": 1, "pages": 1}}"#,
        )
        .unwrap();

        assert_eq!(
            response.paging,
            Some(Paging {
                count: 100,
                total: 3,
                page: 1,
                pages: 1,
            })
        );
    }
}
