//! Starred item records returned by `stars.list`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The kind of a starred item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarredItemKind {
    /// A message in a conversation.
    Message,
    /// A file.
    File,
    /// A comment on a file.
    FileComment,
    /// A public channel.
    Channel,
    /// A direct message conversation.
    Im,
    /// A private channel.
    Group,
    /// A multi-party direct message conversation.
    Mpim,
    /// Any kind this client does not model yet.
    #[default]
    #[serde(other)]
    Unknown,
}

impl StarredItemKind {
    /// Returns true for conversation-level stars (channel, group, DM).
    #[must_use]
    pub const fn is_conversation(self) -> bool {
        matches!(self, Self::Channel | Self::Im | Self::Group | Self::Mpim)
    }
}

/// Reads a string field, treating `null` as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A message carrying a star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarredMessage {
    /// Message timestamp, unique within its conversation. Empty if the
    /// server left it out.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ts: String,
    /// Message text.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    /// Author user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Permanent link to the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

/// A file carrying a star, or the file a starred comment belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarredFile {
    /// File ID.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    /// File name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Permanent link to the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

/// A file comment carrying a star.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarredFileComment {
    /// Comment ID.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    /// Comment text.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comment: String,
    /// Author user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// One entry of a `stars.list` response.
///
/// Which of the optional fields are set depends on `kind`. Fields this
/// client does not model are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarredItem {
    /// Item kind.
    #[serde(rename = "type", default)]
    pub kind: StarredItemKind,
    /// Conversation ID for message and conversation stars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// The starred message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<StarredMessage>,
    /// The starred file, or the file of a starred comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<StarredFile>,
    /// The starred file comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<StarredFileComment>,
    /// When the star was added.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_create: Option<DateTime<Utc>>,
    /// Unmodeled fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
