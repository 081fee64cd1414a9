use serde::{Deserialize, Serialize};

/// Completion of an async backend request, delivered back to the UI thread
/// through the event bus and folded into the session on the next frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// `/api/chat` succeeded with a markdown reply
    BotReply { text: String },

    /// `/api/chat` failed (network, non-2xx, or malformed body)
    ChatFailed { message: String },

    /// `/api/summary` accepted the history
    SummarySaved,

    /// `/api/summary` answered with a non-2xx status
    SummaryRejected { status: u16 },

    /// `/api/summary` could not be reached at all
    SummaryUnreachable { message: String },
}
