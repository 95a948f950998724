//! Themed widget helpers shared by the side panel and the overlays.

use bevy_egui::egui;

use venue::catalog::ZoneStatus;
use venue::status::status_rgb;

use crate::theme;

// =============================================================================
// Frames
// =============================================================================

/// White rounded card used for the floor, zone and date sections.
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(theme::BG_CARD)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(egui::CornerRadius::same(theme::CARD_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(12))
}

/// Muted inset used for stat tiles and the price summary.
pub fn inset_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(theme::BG_MUTED)
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(8))
}

/// Dark translucent chrome for the floating bars.
pub fn overlay_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(theme::BG_OVERLAY)
        .stroke(egui::Stroke::new(1.0, theme::OVERLAY_BORDER))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(8))
}

// =============================================================================
// Text
// =============================================================================

pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .color(theme::TEXT_HEADING)
            .strong(),
    );
}

pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
}

/// `label ........ value` on one line.
pub fn stat_row(ui: &mut egui::Ui, label: &str, value: impl Into<egui::WidgetText>) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}

// =============================================================================
// Status
// =============================================================================

pub fn status_color32(status: ZoneStatus) -> egui::Color32 {
    let [r, g, b] = status_rgb(status);
    egui::Color32::from_rgb(r, g, b)
}

/// Small filled circle in the status colour.
pub fn status_dot(ui: &mut egui::Ui, status: ZoneStatus, radius: f32) {
    let size = egui::vec2(radius * 2.0, radius * 2.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), radius, status_color32(status));
}

/// Rounded badge with the status label.
pub fn status_badge(ui: &mut egui::Ui, status: ZoneStatus, label: &str) {
    let color = status_color32(status);
    egui::Frame::new()
        .fill(color.gamma_multiply(0.15))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(label)
                    .size(theme::FONT_SMALL)
                    .color(color)
                    .strong(),
            );
        });
}

// =============================================================================
// Buttons
// =============================================================================

/// Toggle-style button highlighted when `selected`.
pub fn pill_button(ui: &mut egui::Ui, text: &str, selected: bool) -> egui::Response {
    let (fill, color) = if selected {
        (theme::PRIMARY, egui::Color32::WHITE)
    } else {
        (egui::Color32::TRANSPARENT, theme::OVERLAY_TEXT_MUTED)
    };
    ui.add(
        egui::Button::new(egui::RichText::new(text).size(theme::FONT_BODY).color(color))
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS)),
    )
}

/// Full-width primary action button.
pub fn primary_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .color(egui::Color32::WHITE)
            .strong(),
    )
    .fill(theme::PRIMARY)
    .corner_radius(egui::CornerRadius::same(theme::CARD_CORNER_RADIUS))
    .min_size(egui::vec2(ui.available_width(), 44.0));
    ui.add_enabled(enabled, button)
}

/// Framed stand-in for a zone or floor picture. Shows the image path when
/// there is one, otherwise `missing`.
pub fn image_placeholder(ui: &mut egui::Ui, path: Option<&str>, missing: &str) {
    let width = ui.available_width();
    let size = egui::vec2(width, width * 9.0 / 16.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    let rounding = egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS);
    painter.rect_filled(rect, rounding, theme::BG_MUTED);
    let text = path.unwrap_or(missing);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(theme::FONT_SMALL),
        theme::TEXT_MUTED,
    );
}
