//! UI theme constants — light slate palette with a blue accent.

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PAGE: Color32 = Color32::from_rgb(241, 245, 249);
pub const BG_CARD: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_CHAT: Color32 = Color32::from_rgb(248, 250, 252);
pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(30, 41, 59);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(71, 85, 105);
pub const TEXT_ON_ACCENT: Color32 = Color32::from_rgb(255, 255, 255);
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(239, 246, 255);
pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
pub const CODE_BG: Color32 = Color32::from_rgb(241, 245, 249);

pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const CARD_ROUNDING: CornerRadius = CornerRadius::same(10);
pub const PANEL_PADDING: Vec2 = Vec2::new(14.0, 10.0);

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = false;
    style.visuals.panel_fill = BG_PAGE;
    style.visuals.window_fill = BG_CARD;
    style.visuals.extreme_bg_color = BG_CHAT;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = BG_CARD;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = ACCENT_SOFT;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_ON_ACCENT);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
