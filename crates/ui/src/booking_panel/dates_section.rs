//! Date steppers, price summary and the reserve / processing / success area.

use bevy_egui::egui;

use venue::booking::{BookingCalendar, BookingQuote};
use venue::catalog::Zone;
use venue::localization::LocalizationState;

use crate::theme;
use crate::widgets::{card_frame, inset_frame, primary_button, section_heading, stat_row};

use super::view::{ActionView, DateShift, PanelActions};

pub fn draw_dates(
    ui: &mut egui::Ui,
    zone: &Zone,
    calendar: &BookingCalendar,
    l10n: &LocalizationState,
    actions: &mut PanelActions,
) {
    let range = calendar.range;
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_heading(ui, l10n.t("dates.title"));
        ui.add_space(4.0);

        let can_move_from_back = range.from() > calendar.today;
        if let Some(delta) = date_stepper(ui, l10n.t("dates.from"), range.from(), can_move_from_back)
        {
            actions.date_shift = Some(DateShift::From(delta));
        }
        let can_move_to_back = range.to() > range.from();
        if let Some(delta) = date_stepper(ui, l10n.t("dates.to"), range.to(), can_move_to_back) {
            actions.date_shift = Some(DateShift::To(delta));
        }

        let quote = BookingQuote::new(zone.price, &range);
        ui.add_space(6.0);
        inset_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            stat_row(
                ui,
                l10n.t("dates.duration"),
                format!("{} {}", quote.days, l10n.t("dates.days")),
            );
            stat_row(
                ui,
                l10n.t("zone.daily_rate"),
                l10n.format_currency(u64::from(quote.daily_rate)),
            );
            ui.separator();
            stat_row(
                ui,
                l10n.t("dates.total"),
                egui::RichText::new(l10n.format_currency(quote.total))
                    .size(theme::FONT_HEADING)
                    .color(theme::PRIMARY_DARK)
                    .strong(),
            );
        });
    });
}

/// `label  YYYY-MM-DD  [-] [+]`; returns the clicked day delta.
fn date_stepper(
    ui: &mut egui::Ui,
    label: &str,
    date: chrono::NaiveDate,
    can_step_back: bool,
) -> Option<i64> {
    let mut delta = None;
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("+").clicked() {
                delta = Some(1);
            }
            if ui.add_enabled(can_step_back, egui::Button::new("-").small()).clicked() {
                delta = Some(-1);
            }
            ui.label(
                egui::RichText::new(date.format("%Y-%m-%d").to_string())
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT)
                    .monospace(),
            );
        });
    });
    delta
}

pub fn draw_action(
    ui: &mut egui::Ui,
    view: ActionView,
    l10n: &LocalizationState,
    actions: &mut PanelActions,
) {
    match view {
        ActionView::Reserve => {
            if primary_button(ui, l10n.t("booking.reserve"), true).clicked() {
                actions.reserve = true;
            }
        }
        ActionView::Processing => {
            ui.horizontal(|ui| {
                ui.spinner();
                primary_button(ui, l10n.t("booking.processing"), false);
            });
        }
        ActionView::Success => {
            egui::Frame::new()
                .fill(theme::SUCCESS_SOFT)
                .stroke(egui::Stroke::new(1.0, theme::SUCCESS))
                .corner_radius(egui::CornerRadius::same(theme::CARD_CORNER_RADIUS))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(l10n.t("booking.success"))
                            .size(theme::FONT_HEADING)
                            .color(theme::SUCCESS)
                            .strong(),
                    );
                });
        }
    }
}
