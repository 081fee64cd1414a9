//! Chat panel — the conversation card: header, message bubbles, input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Stroke, Vec2};

use weatherbot_core::session::ChatSession;
use weatherbot_types::message::{Message, Role};

use crate::state::UiState;
use crate::theme::*;
use crate::markdown;

/// What the user did this frame, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// Input submitted; the app validates it against the session and
    /// dispatches the chat request.
    Submitted(String),
    /// "Done" clicked; the app posts the summary and closes the session.
    ExitRequested,
}

/// Render the chat view. Returns the user action, if any.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    session: &ChatSession,
) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_CARD)
        .corner_radius(CARD_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(&session.config().title)
                            .color(ACCENT)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let done = ui.add_enabled(
                            !session.is_closing(),
                            egui::Button::new(RichText::new("Done").color(DANGER))
                                .fill(BG_CARD)
                                .corner_radius(CARD_ROUNDING),
                        );
                        if done.clicked() {
                            action = Some(ChatAction::ExitRequested);
                        }
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in session.messages() {
                            render_bubble(ui, message);
                            ui.add_space(6.0);
                        }

                        if session.is_pending() {
                            render_loading(ui);
                        }
                    });

                ui.add_space(8.0);

                // Input row
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Ask about weather or docs...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add_enabled(!session.is_pending(), input);

                    let send_enabled =
                        !state.input_text.trim().is_empty() && !session.is_pending();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_ON_ACCENT))
                            .fill(if send_enabled { ACCENT } else { BORDER })
                            .corner_radius(CARD_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        if let Some(text) = state.take_input() {
                            action = Some(ChatAction::Submitted(text));
                        }
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn render_bubble(ui: &mut egui::Ui, message: &Message) {
    let max_width = ui.available_width() * 0.85;

    match message.role {
        Role::User => {
            ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                egui::Frame::default()
                    .fill(ACCENT)
                    .corner_radius(BUBBLE_ROUNDING)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_max_width(max_width);
                        ui.vertical(|ui| {
                            markdown::render(ui, &message.content, TEXT_ON_ACCENT);
                        });
                    });
            });
        }
        Role::Bot => {
            ui.with_layout(Layout::left_to_right(Align::TOP), |ui| {
                egui::Frame::default()
                    .fill(BG_CARD)
                    .stroke(Stroke::new(1.0, BORDER))
                    .corner_radius(BUBBLE_ROUNDING)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_max_width(max_width);
                        ui.vertical(|ui| {
                            markdown::render(ui, &message.content, TEXT_PRIMARY);
                        });
                    });
            });
        }
    }
}

fn render_loading(ui: &mut egui::Ui) {
    ui.with_layout(Layout::left_to_right(Align::TOP), |ui| {
        egui::Frame::default()
            .fill(BG_CARD)
            .stroke(Stroke::new(1.0, BORDER))
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.add(egui::Spinner::new().size(14.0));
                ui.label(
                    RichText::new("Analyzing weather data...")
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            });
    });
}
