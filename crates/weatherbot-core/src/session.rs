//! The chat session state machine.
//!
//! Holds the append-only message list and the two flags that drive the UI:
//! `pending` (a chat request is in flight) and `exited` (terminal closed
//! screen). Submissions are serialized here: while `pending` is set the
//! session refuses further input, so at most one chat request can ever be
//! in flight regardless of how fast UI events arrive.

use weatherbot_types::config::WidgetConfig;
use weatherbot_types::event::SessionEvent;
use weatherbot_types::message::Message;

/// Bot message substituted for any failed chat request
pub const FALLBACK_REPLY: &str =
    "⚠️ **Error:** I couldn't reach the weather server. Please check if the backend is running.";

pub struct ChatSession {
    config: WidgetConfig,
    messages: Vec<Message>,
    pending: bool,
    closing: bool,
    exited: bool,
    /// High-water mark for issued message ids
    last_id: u64,
}

impl ChatSession {
    /// A fresh session contains exactly one bot greeting with id 1.
    pub fn new(config: WidgetConfig) -> Self {
        let greeting = Message::bot(1, config.greeting.clone());
        Self {
            config,
            messages: vec![greeting],
            pending: false,
            closing: false,
            exited: false,
            last_id: 1,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True while a chat request is in flight
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// True once the summary has been dispatched
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// True on the terminal closed screen
    pub fn is_exited(&self) -> bool {
        self.exited
    }

    /// Ids are submission timestamps, bumped past the previous id when the
    /// clock stalls or rewinds, so they stay strictly increasing.
    fn alloc_id(&mut self, now_ms: u64) -> u64 {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        id
    }

    /// Accept user input. Returns the trimmed query to dispatch, or `None`
    /// when the input is blank, a request is already pending, or the
    /// session has exited — in which case nothing changes.
    pub fn submit(&mut self, input: &str, now_ms: u64) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.pending || self.exited {
            return None;
        }
        let id = self.alloc_id(now_ms);
        self.messages.push(Message::user(id, text));
        self.pending = true;
        Some(text.to_string())
    }

    /// Request the exit transition. Returns a snapshot of the history to
    /// post to `/api/summary`, or `None` when an exit is already underway.
    pub fn begin_exit(&mut self) -> Option<Vec<Message>> {
        if self.closing || self.exited {
            return None;
        }
        self.closing = true;
        Some(self.messages.clone())
    }

    /// Fold an async completion into the session. Returns true when the
    /// caller must raise the "summary not saved" alert — the transition to
    /// the closed screen happens regardless of the summary outcome.
    pub fn apply(&mut self, event: SessionEvent, now_ms: u64) -> bool {
        match event {
            SessionEvent::BotReply { text } => {
                self.resolve_chat(text, now_ms);
                false
            }
            SessionEvent::ChatFailed { message } => {
                log::error!("Chat request failed: {}", message);
                self.resolve_chat(FALLBACK_REPLY.to_string(), now_ms);
                false
            }
            SessionEvent::SummarySaved => {
                self.exited = true;
                false
            }
            SessionEvent::SummaryRejected { status } => {
                log::error!("Summary rejected with HTTP {}", status);
                self.exited = true;
                false
            }
            SessionEvent::SummaryUnreachable { message } => {
                log::error!("Failed to save summary: {}", message);
                self.exited = true;
                true
            }
        }
    }

    fn resolve_chat(&mut self, text: String, now_ms: u64) {
        if !self.pending {
            // Serialized submissions make this unreachable in practice
            log::warn!("Dropping chat completion with no pending request");
            return;
        }
        let id = self.alloc_id(now_ms);
        self.messages.push(Message::bot(id, text));
        self.pending = false;
    }
}
