//! Port trait — the boundary between the session core and the browser.
//!
//! The trait is defined here in `weatherbot-core` (pure Rust).
//! The fetch-based implementation lives in `weatherbot-platform`.
//! The core never imports platform code; it only depends on this trait.

use async_trait::async_trait;
use weatherbot_types::{message::Message, Result};

/// The backend the widget talks to.
#[async_trait(?Send)]
pub trait BackendPort {
    /// `POST /api/chat` with `{"query": ...}` — returns the reply text.
    /// Non-2xx statuses and malformed bodies are errors.
    async fn send_chat(&self, query: &str) -> Result<String>;

    /// `POST /api/summary` with the full message history.
    /// The response body is ignored; only the status is observed.
    async fn post_summary(&self, messages: &[Message]) -> Result<()>;
}
