//! Main egui application — renders the widget and drives the session.
//!
//! The session lives in an `Rc<RefCell<_>>` so spawned request futures and
//! the frame loop can share it on the single UI thread. Futures never touch
//! the session directly: they publish completions onto the event bus, which
//! the frame loop drains and folds in with `ChatSession::apply`.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel};

use weatherbot_core::event_bus::EventBus;
use weatherbot_core::ports::BackendPort;
use weatherbot_core::runtime;
use weatherbot_core::session::ChatSession;
use weatherbot_platform::HttpBackend;
use weatherbot_types::config::WidgetConfig;
use weatherbot_types::message::Message;
use weatherbot_ui::panels::chat::{self, ChatAction};
use weatherbot_ui::panels::closed;
use weatherbot_ui::state::UiState;
use weatherbot_ui::theme;

const SUMMARY_ALERT: &str = "Chat session ended, but summary couldn't be saved.";

/// The main application state
pub struct WeatherBotApp {
    session: Rc<RefCell<ChatSession>>,
    event_bus: EventBus,
    backend: Rc<dyn BackendPort>,
    ui_state: UiState,
    first_frame: bool,
}

impl WeatherBotApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = WidgetConfig::from_build_env();
        let backend = Rc::new(HttpBackend::new(&config));

        Self {
            session: Rc::new(RefCell::new(ChatSession::new(config))),
            event_bus: EventBus::new(),
            backend,
            ui_state: UiState::new(),
            first_frame: true,
        }
    }

    fn now_ms() -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }

    /// Issue the chat request for an accepted submission (async)
    fn dispatch_chat(&self, query: String, ctx: &egui::Context) {
        let backend = self.backend.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            runtime::run_chat(backend.as_ref(), &bus, &query).await;
            ctx.request_repaint();
        });
    }

    /// Post the conversation summary for the exit transition (async)
    fn dispatch_summary(&self, messages: Vec<Message>, ctx: &egui::Context) {
        let backend = self.backend.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            runtime::run_summary(backend.as_ref(), &bus, messages).await;
            ctx.request_repaint();
        });
    }

    /// Blocking browser alert for the lost-summary case
    fn raise_summary_alert() {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(SUMMARY_ALERT);
        }
    }

    /// "Start New Session" — a full reload resets all ephemeral state
    fn reload_page() {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("Failed to reload page: {:?}", e);
            }
        }
    }
}

impl eframe::App for WeatherBotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Fold async completions into the session
        let events = self.event_bus.drain();
        if !events.is_empty() {
            let now = Self::now_ms();
            let mut session = self.session.borrow_mut();
            for event in events {
                if session.apply(event, now) {
                    Self::raise_summary_alert();
                }
            }
            ctx.request_repaint();
        }

        if self.session.borrow().is_pending() {
            ctx.request_repaint();
        }

        let exited = self.session.borrow().is_exited();

        CentralPanel::default().show(ctx, |ui| {
            if exited {
                if closed::closed_panel(ui) {
                    Self::reload_page();
                }
                return;
            }

            let action = {
                let session = self.session.borrow();
                chat::chat_panel(ui, &mut self.ui_state, &session)
            };

            match action {
                Some(ChatAction::Submitted(text)) => {
                    let query = self.session.borrow_mut().submit(&text, Self::now_ms());
                    if let Some(query) = query {
                        self.dispatch_chat(query, ctx);
                    }
                }
                Some(ChatAction::ExitRequested) => {
                    if let Some(snapshot) = self.session.borrow_mut().begin_exit() {
                        self.dispatch_summary(snapshot, ctx);
                    }
                }
                None => {}
            }
        });
    }
}
