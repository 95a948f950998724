//! Selected zone details: picture, names, stats and availability notice.

use bevy_egui::egui;

use venue::catalog::Zone;
use venue::localization::LocalizationState;
use venue::media::zone_image;

use crate::theme;
use crate::widgets::{
    caption, card_frame, image_placeholder, inset_frame, section_heading, stat_row, status_badge,
    status_color32,
};

use super::view::zone_notice;

pub fn draw_zone_details(ui: &mut egui::Ui, zone: &Zone, l10n: &LocalizationState) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_heading(ui, l10n.t("zone.details"));
        ui.add_space(4.0);

        image_placeholder(ui, zone_image(zone), l10n.t("zone.no_preview"));
        ui.add_space(6.0);

        ui.label(
            egui::RichText::new(l10n.zone_name(zone))
                .size(theme::FONT_HEADING)
                .color(theme::TEXT_HEADING)
                .strong(),
        );
        caption(ui, l10n.zone_subtitle(zone));
        ui.add_space(6.0);

        inset_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            stat_row(ui, l10n.t("zone.area"), l10n.format_area(zone.area));
            stat_row(ui, l10n.t("zone.type"), zone.category.as_str());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(l10n.t("zone.status"))
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_MUTED),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    status_badge(ui, zone.status, l10n.status_label(zone.status));
                });
            });
        });

        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(&zone.description)
                .size(theme::FONT_BODY)
                .color(theme::TEXT),
        );

        if zone.price > 0 {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                caption(ui, l10n.t("zone.daily_rate"));
                ui.label(
                    egui::RichText::new(l10n.format_currency(u64::from(zone.price)))
                        .size(theme::FONT_PRICE)
                        .color(theme::PRIMARY_DARK)
                        .strong(),
                );
            });
        }

        if let Some(notice) = zone_notice(zone) {
            ui.add_space(6.0);
            let color = status_color32(zone.status);
            egui::Frame::new()
                .fill(color.gamma_multiply(0.12))
                .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(l10n.t(notice.label_key()))
                            .size(theme::FONT_BODY)
                            .color(color),
                    );
                });
        }
    });
}
