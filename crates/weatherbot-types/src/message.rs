use serde::{Deserialize, Serialize};

/// Who authored a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// A single turn in the conversation.
///
/// Ids are epoch-millisecond timestamps, bumped past the previous id when
/// the clock stalls, so insertion order and id order always agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    /// Markdown source, rendered by the UI layer
    pub content: String,
}

impl Message {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            content: text.into(),
        }
    }

    pub fn bot(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::Bot,
            content: text.into(),
        }
    }
}
