//! Request/response bodies for the two backend endpoints.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatQuery {
    pub query: String,
}

/// Success body returned by `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Body of `POST /api/summary` — the full conversation history.
/// The response body is ignored; only the HTTP status is observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub messages: Vec<Message>,
}
