#[cfg(test)]
mod tests {
    use crate::event_bus::EventBus;
    use crate::ports::BackendPort;
    use crate::runtime::{run_chat, run_summary};
    use crate::session::{ChatSession, FALLBACK_REPLY};
    use weatherbot_types::config::WidgetConfig;
    use weatherbot_types::event::SessionEvent;
    use weatherbot_types::message::{Message, Role};
    use weatherbot_types::{Result, WidgetError};

    use std::cell::RefCell;
    use async_trait::async_trait;
    use futures::executor::block_on;

    // ─── Mock backend ────────────────────────────────────────

    struct MockBackend {
        chat_result: Result<String>,
        summary_result: Result<()>,
        chat_calls: RefCell<Vec<String>>,
        summary_calls: RefCell<Vec<usize>>,
    }

    impl MockBackend {
        fn new(chat_result: Result<String>, summary_result: Result<()>) -> Self {
            Self {
                chat_result,
                summary_result,
                chat_calls: RefCell::new(Vec::new()),
                summary_calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl BackendPort for MockBackend {
        async fn send_chat(&self, query: &str) -> Result<String> {
            self.chat_calls.borrow_mut().push(query.to_string());
            self.chat_result.clone()
        }

        async fn post_summary(&self, messages: &[Message]) -> Result<()> {
            self.summary_calls.borrow_mut().push(messages.len());
            self.summary_result.clone()
        }
    }

    fn session() -> ChatSession {
        ChatSession::new(WidgetConfig::default())
    }

    // ─── EventBus Tests ──────────────────────────────────────

    #[test]
    fn test_event_bus_new_is_empty() {
        let bus = EventBus::new();
        assert!(!bus.has_pending());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_emit_and_drain() {
        let bus = EventBus::new();
        bus.emit(SessionEvent::BotReply { text: "hello".to_string() });
        bus.emit(SessionEvent::SummarySaved);

        assert!(bus.has_pending());

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(!bus.has_pending());
    }

    #[test]
    fn test_event_bus_drain_empties() {
        let bus = EventBus::new();
        bus.emit(SessionEvent::SummarySaved);
        let _ = bus.drain();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_clone_shares_state() {
        let bus1 = EventBus::new();
        let bus2 = bus1.clone();

        bus1.emit(SessionEvent::SummarySaved);
        assert!(bus2.has_pending());

        let events = bus2.drain();
        assert_eq!(events.len(), 1);
        assert!(!bus1.has_pending());
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_fresh_session_has_single_greeting() {
        let session = session();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Bot);
        assert_eq!(session.messages()[0].id, 1);
        assert!(session.messages()[0].content.contains("weather"));
        assert!(!session.is_pending());
        assert!(!session.is_exited());
    }

    #[test]
    fn test_submit_appends_user_message_and_pends() {
        let mut session = session();
        let query = session.submit("What's the weather in Paris?", 1_000);

        assert_eq!(query.as_deref(), Some("What's the weather in Paris?"));
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].role, Role::User);
        assert!(session.is_pending());
    }

    #[test]
    fn test_submit_trims_input() {
        let mut session = session();
        let query = session.submit("  hi there  \n", 1_000);
        assert_eq!(query.as_deref(), Some("hi there"));
        assert_eq!(session.messages()[1].content, "hi there");
    }

    #[test]
    fn test_submit_blank_is_rejected() {
        let mut session = session();
        assert!(session.submit("", 1_000).is_none());
        assert!(session.submit("   \t\n", 2_000).is_none());
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_submit_while_pending_is_rejected() {
        let mut session = session();
        assert!(session.submit("first", 1_000).is_some());
        assert!(session.submit("second", 2_000).is_none());
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_submit_after_exit_is_rejected() {
        let mut session = session();
        session.begin_exit();
        session.apply(SessionEvent::SummarySaved, 1_000);
        assert!(session.submit("too late", 2_000).is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_reply_appends_bot_message_and_clears_pending() {
        let mut session = session();
        session.submit("weather?", 1_000);

        let alert = session.apply(
            SessionEvent::BotReply { text: "It's sunny.".to_string() },
            2_000,
        );

        assert!(!alert);
        assert!(!session.is_pending());
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2].role, Role::Bot);
        assert_eq!(session.messages()[2].content, "It's sunny.");
    }

    #[test]
    fn test_failed_chat_appends_fallback() {
        let mut session = session();
        session.submit("weather?", 1_000);

        session.apply(
            SessionEvent::ChatFailed { message: "HTTP 500".to_string() },
            2_000,
        );

        assert!(!session.is_pending());
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2].content, FALLBACK_REPLY);
        assert!(session.messages()[2]
            .content
            .contains("couldn't reach the weather server"));
    }

    #[test]
    fn test_reply_without_pending_request_is_dropped() {
        let mut session = session();
        session.apply(
            SessionEvent::BotReply { text: "stray".to_string() },
            1_000,
        );
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_ids_strictly_increase_when_clock_stalls() {
        let mut session = session();
        session.submit("one", 5_000);
        session.apply(SessionEvent::BotReply { text: "a".to_string() }, 5_000);
        session.submit("two", 5_000);
        session.apply(SessionEvent::BotReply { text: "b".to_string() }, 4_000);

        let ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "ids not increasing: {:?}", ids);
        }
    }

    #[test]
    fn test_ids_follow_submission_time() {
        let mut session = session();
        session.submit("hello", 1_700_000_000_000);
        assert_eq!(session.messages()[1].id, 1_700_000_000_000);
    }

    #[test]
    fn test_begin_exit_snapshots_history_once() {
        let mut session = session();
        session.submit("hi", 1_000);
        session.apply(SessionEvent::BotReply { text: "hello".to_string() }, 2_000);

        let snapshot = session.begin_exit().expect("first exit dispatches");
        assert_eq!(snapshot.len(), 3);
        assert!(session.is_closing());
        assert!(!session.is_exited());

        assert!(session.begin_exit().is_none());
    }

    #[test]
    fn test_exit_completes_for_every_summary_outcome() {
        for (event, want_alert) in [
            (SessionEvent::SummarySaved, false),
            (SessionEvent::SummaryRejected { status: 502 }, false),
            (
                SessionEvent::SummaryUnreachable { message: "fetch failed".to_string() },
                true,
            ),
        ] {
            let mut session = session();
            session.begin_exit();
            let alert = session.apply(event, 1_000);
            assert!(session.is_exited());
            assert_eq!(alert, want_alert);
        }
    }

    // ─── Runtime Tests ───────────────────────────────────────

    #[test]
    fn test_run_chat_emits_reply() {
        let backend = MockBackend::new(Ok("It's sunny.".to_string()), Ok(()));
        let bus = EventBus::new();

        block_on(run_chat(&backend, &bus, "weather in Paris"));

        assert_eq!(backend.chat_calls.borrow().as_slice(), ["weather in Paris"]);
        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            SessionEvent::BotReply { text } if text == "It's sunny."
        ));
    }

    #[test]
    fn test_run_chat_emits_failure() {
        let backend = MockBackend::new(Err(WidgetError::Api { status: 500 }), Ok(()));
        let bus = EventBus::new();

        block_on(run_chat(&backend, &bus, "weather?"));

        let events = bus.drain();
        assert!(matches!(
            &events[0],
            SessionEvent::ChatFailed { message } if message.contains("500")
        ));
    }

    #[test]
    fn test_run_summary_saved() {
        let backend = MockBackend::new(Ok(String::new()), Ok(()));
        let bus = EventBus::new();

        block_on(run_summary(&backend, &bus, vec![Message::bot(1, "hi")]));

        assert_eq!(backend.summary_calls.borrow().as_slice(), [1]);
        assert!(matches!(bus.drain()[0], SessionEvent::SummarySaved));
    }

    #[test]
    fn test_run_summary_rejected_status() {
        let backend = MockBackend::new(Ok(String::new()), Err(WidgetError::Api { status: 503 }));
        let bus = EventBus::new();

        block_on(run_summary(&backend, &bus, Vec::new()));

        assert!(matches!(
            bus.drain()[0],
            SessionEvent::SummaryRejected { status: 503 }
        ));
    }

    #[test]
    fn test_run_summary_unreachable() {
        let backend = MockBackend::new(
            Ok(String::new()),
            Err(WidgetError::Network("connection refused".to_string())),
        );
        let bus = EventBus::new();

        block_on(run_summary(&backend, &bus, Vec::new()));

        assert!(matches!(
            &bus.drain()[0],
            SessionEvent::SummaryUnreachable { message } if message.contains("connection refused")
        ));
    }

    // ─── Full turn lifecycle ─────────────────────────────────

    #[test]
    fn test_full_successful_turn() {
        let backend = MockBackend::new(Ok("It's sunny.".to_string()), Ok(()));
        let bus = EventBus::new();
        let mut session = session();

        let query = session.submit("What's the weather in Paris?", 1_000).unwrap();
        block_on(run_chat(&backend, &bus, &query));

        for event in bus.drain() {
            session.apply(event, 2_000);
        }

        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[0].role, Role::Bot);
        assert_eq!(session.messages()[1].role, Role::User);
        assert_eq!(session.messages()[2].content, "It's sunny.");
        assert!(!session.is_pending());
    }

    #[test]
    fn test_full_exit_with_unreachable_backend() {
        let backend = MockBackend::new(
            Ok(String::new()),
            Err(WidgetError::Network("fetch failed".to_string())),
        );
        let bus = EventBus::new();
        let mut session = session();

        let snapshot = session.begin_exit().unwrap();
        block_on(run_summary(&backend, &bus, snapshot));

        let mut alert = false;
        for event in bus.drain() {
            alert |= session.apply(event, 1_000);
        }

        assert!(session.is_exited());
        assert!(alert);
    }
}
