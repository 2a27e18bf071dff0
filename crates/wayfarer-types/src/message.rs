//! Chat transcript message types.
//!
//! The chat backend replies with an array of tagged message records. Each
//! record carries a `type` tag and a `content` payload whose shape depends
//! on the tag. The transcript is an append-only ordered sequence of these
//! records; a message is never mutated after creation.

use serde::{Deserialize, Serialize};

/// One uniform-shaped row of a `table` message.
///
/// `serde_json`'s preserve_order feature keeps the key order the backend
/// sent, which the renderer relies on when deriving the header row.
pub type TableRecord = serde_json::Map<String, serde_json::Value>;

/// A single message in the chat transcript.
///
/// Tagged on the wire as `{"type": ..., "content": ...}`:
///
/// - `user` -- a query the user typed, echoed into the transcript.
/// - `text` -- assistant prose.
/// - `table` -- an ordered sequence of uniform key/value records.
/// - `plot` -- an image reference (URL or path).
///
/// Tags this client does not recognize deserialize to [`Message::Unknown`]
/// and render as nothing rather than failing the whole reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum Message {
    User(String),
    Text(String),
    Table(Vec<TableRecord>),
    Plot(String),
    #[serde(other)]
    Unknown,
}

impl Message {
    /// Build a user message from raw input.
    pub fn user(content: impl Into<String>) -> Self {
        Message::User(content.into())
    }

    /// Whether this message came from the user rather than the backend.
    pub fn is_user(&self) -> bool {
        matches!(self, Message::User(_))
    }
}
