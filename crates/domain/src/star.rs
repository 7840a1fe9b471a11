//! Star targets
//!
//! The Web API accepts exactly one of `file`, `file_comment`, `channel` or
//! `channel` + `timestamp` on `stars.add` and `stars.remove`. `StarTarget`
//! makes that one-of explicit at the call site.

use serde::{Deserialize, Serialize};

use crate::args::Args;

/// Something that can carry a star.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StarTarget {
    /// A file, by file ID.
    File {
        /// File ID.
        id: String,
    },
    /// A comment on a file, by comment ID.
    FileComment {
        /// File comment ID.
        id: String,
    },
    /// A channel, private group or DM, by conversation ID.
    Channel {
        /// Conversation ID.
        id: String,
    },
    /// A message, identified by its conversation and timestamp.
    Message {
        /// Conversation the message was posted in.
        channel: String,
        /// Message timestamp.
        ts: String,
    },
}

impl StarTarget {
    /// Targets a file.
    #[must_use]
    pub fn file(id: impl Into<String>) -> Self {
        Self::File { id: id.into() }
    }

    /// Targets a file comment.
    #[must_use]
    pub fn file_comment(id: impl Into<String>) -> Self {
        Self::FileComment { id: id.into() }
    }

    /// Targets a channel.
    #[must_use]
    pub fn channel(id: impl Into<String>) -> Self {
        Self::Channel { id: id.into() }
    }

    /// Targets a message.
    #[must_use]
    pub fn message(channel: impl Into<String>, ts: impl Into<String>) -> Self {
        Self::Message {
            channel: channel.into(),
            ts: ts.into(),
        }
    }

    /// Builds the arguments identifying this target.
    ///
    /// Values are passed through as given; the server rejects unknown or
    /// empty identifiers.
    #[must_use]
    pub fn to_args(&self) -> Args {
        match self {
            Self::File { id } => Args::new().with("file", id),
            Self::FileComment { id } => Args::new().with("file_comment", id),
            Self::Channel { id } => Args::new().with("channel", id),
            Self::Message { channel, ts } => {
                Args::new().with("channel", channel).with("timestamp", ts)
            }
        }
    }
}
