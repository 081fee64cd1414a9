//! Request drivers — run one backend call and publish its completion.
//!
//! These are async and must be spawned via
//! `wasm_bindgen_futures::spawn_local`; they never block the UI thread.
//! The session itself is not touched here: the app drains the bus on the
//! next frame and folds events in with `ChatSession::apply`.

use weatherbot_types::event::SessionEvent;
use weatherbot_types::message::Message;
use weatherbot_types::WidgetError;

use crate::event_bus::EventBus;
use crate::ports::BackendPort;

/// Issue the chat request for an accepted submission.
/// Every failure class collapses into `ChatFailed`; the session substitutes
/// the fallback reply and the conversation continues.
pub async fn run_chat(backend: &dyn BackendPort, bus: &EventBus, query: &str) {
    match backend.send_chat(query).await {
        Ok(text) => bus.emit(SessionEvent::BotReply { text }),
        Err(e) => bus.emit(SessionEvent::ChatFailed {
            message: e.to_string(),
        }),
    }
}

/// Post the conversation history for the exit transition.
/// Best effort by design: each outcome maps to an event that still closes
/// the session, and only an unreachable backend raises the user alert.
pub async fn run_summary(backend: &dyn BackendPort, bus: &EventBus, messages: Vec<Message>) {
    match backend.post_summary(&messages).await {
        Ok(()) => bus.emit(SessionEvent::SummarySaved),
        Err(WidgetError::Api { status }) => bus.emit(SessionEvent::SummaryRejected { status }),
        Err(e) => bus.emit(SessionEvent::SummaryUnreachable {
            message: e.to_string(),
        }),
    }
}
