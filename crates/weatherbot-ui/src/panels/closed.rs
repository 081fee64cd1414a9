//! Closed panel — the terminal "Session Closed" card shown after exit.

use egui::{self, RichText, Vec2};

use crate::theme::*;

/// Render the closed view. Returns true when the user asks to start a new
/// session (the app responds with a full page reload).
pub fn closed_panel(ui: &mut egui::Ui) -> bool {
    let mut restart = false;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);

        egui::Frame::default()
            .fill(BG_CARD)
            .corner_radius(CARD_ROUNDING)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_max_width(380.0);
                ui.vertical_centered(|ui| {
                    ui.heading(
                        RichText::new("Session Closed")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(
                            "Your conversation summary has been successfully saved \
                             to the backend. See you next time!",
                        )
                        .color(TEXT_SECONDARY),
                    );
                    ui.add_space(14.0);

                    let button = egui::Button::new(
                        RichText::new("Start New Session")
                            .color(TEXT_ON_ACCENT)
                            .strong(),
                    )
                    .fill(ACCENT)
                    .corner_radius(CARD_ROUNDING)
                    .min_size(Vec2::new(200.0, 34.0));

                    if ui.add(button).clicked() {
                        restart = true;
                    }
                });
            });
    });

    restart
}
