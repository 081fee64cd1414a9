//! WASM-target tests for weatherbot-core.
//!
//! Runs EventBus and ChatSession tests under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use weatherbot_core::event_bus::EventBus;
use weatherbot_core::session::{ChatSession, FALLBACK_REPLY};
use weatherbot_types::config::WidgetConfig;
use weatherbot_types::event::SessionEvent;
use weatherbot_types::message::Role;

fn session() -> ChatSession {
    ChatSession::new(WidgetConfig::default())
}

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(SessionEvent::SummarySaved);
    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 1);
    assert!(!bus.has_pending());
}

#[wasm_bindgen_test]
fn fresh_session_has_single_greeting() {
    let session = session();
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, Role::Bot);
    assert!(!session.is_pending());
    assert!(!session.is_exited());
}

#[wasm_bindgen_test]
fn submit_then_reply_appends_pair() {
    let mut session = session();
    session.submit("weather?", 1_000);
    assert!(session.is_pending());

    session.apply(
        SessionEvent::BotReply { text: "It's sunny.".to_string() },
        2_000,
    );
    assert!(!session.is_pending());
    assert_eq!(session.messages().len(), 3);
}

#[wasm_bindgen_test]
fn failed_chat_appends_fallback() {
    let mut session = session();
    session.submit("weather?", 1_000);
    session.apply(
        SessionEvent::ChatFailed { message: "HTTP 500".to_string() },
        2_000,
    );
    assert_eq!(session.messages()[2].content, FALLBACK_REPLY);
}

#[wasm_bindgen_test]
fn exit_always_reaches_closed_screen() {
    let mut session = session();
    session.begin_exit();
    let alert = session.apply(
        SessionEvent::SummaryUnreachable { message: "fetch failed".to_string() },
        1_000,
    );
    assert!(session.is_exited());
    assert!(alert);
}
