//! Floor grid and the selected-floor card with its zone list.

use bevy_egui::egui;

use venue::catalog::{Catalog, Floor};
use venue::filter::ZoneFilter;
use venue::localization::LocalizationState;
use venue::media::floor_plan_image;
use venue::selection::{Selection, SelectionRequest};

use crate::theme;
use crate::widgets::{
    caption, card_frame, image_placeholder, section_heading, status_badge, status_dot,
};

use super::view::PanelActions;

const GRID_COLUMNS: usize = 3;
const DIMMED_OPACITY: f32 = 0.4;

/// Three-column grid of floor buttons showing the tag and headline.
pub fn draw_floor_grid(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    selection: &Selection,
    l10n: &LocalizationState,
    actions: &mut PanelActions,
) {
    section_heading(ui, l10n.t("panel.select_floor"));
    ui.add_space(4.0);

    let spacing = ui.spacing().item_spacing.x;
    let cell_width =
        (ui.available_width() - spacing * (GRID_COLUMNS as f32 - 1.0)) / GRID_COLUMNS as f32;

    egui::Grid::new("floor_grid")
        .num_columns(GRID_COLUMNS)
        .spacing(egui::vec2(spacing, spacing))
        .show(ui, |ui| {
            for (i, floor) in catalog.floors().iter().enumerate() {
                let selected = selection.is_floor_selected(floor.id);
                let (fill, stroke) = if selected {
                    (theme::PRIMARY_SOFT, theme::PRIMARY)
                } else {
                    (theme::BG_CARD, theme::BORDER)
                };
                let text = egui::RichText::new(format!("{}\n{}", floor.tag(), floor.headline()))
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_HEADING);
                let button = egui::Button::new(text)
                    .fill(fill)
                    .stroke(egui::Stroke::new(1.0, stroke))
                    .min_size(egui::vec2(cell_width, 48.0));
                if ui.add(button).on_hover_text(floor.core_function.as_str()).clicked() {
                    actions.selection.push(SelectionRequest::Floor(Some(floor.id)));
                }
                if (i + 1) % GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
}

/// Plan picture, core function and the clickable zone list. Zones outside
/// the active filter are dimmed.
pub fn draw_floor_card(
    ui: &mut egui::Ui,
    floor: &Floor,
    selection: &Selection,
    filter: ZoneFilter,
    l10n: &LocalizationState,
    actions: &mut PanelActions,
) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        if let Some(plan) = floor_plan_image(floor) {
            draw_plan(ui, plan, floor, l10n);
            ui.add_space(6.0);
        }

        section_heading(ui, floor.headline());
        caption(ui, &floor.core_function);
        ui.add_space(8.0);

        ui.label(
            egui::RichText::new(format!("{} ({})", l10n.t("panel.zones"), floor.zones.len()))
                .size(theme::FONT_BODY)
                .color(theme::TEXT_HEADING)
                .strong(),
        );

        for zone in &floor.zones {
            let selected = selection.is_zone_selected(&zone.id);
            let (fill, stroke) = if selected {
                (theme::PRIMARY_SOFT, theme::PRIMARY)
            } else {
                (theme::BG_CARD, theme::BORDER)
            };
            let dimmed = !filter.matches(zone);
            let response = egui::Frame::new()
                .fill(fill)
                .stroke(egui::Stroke::new(1.0, stroke))
                .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
                .inner_margin(egui::Margin::same(8))
                .multiply_with_opacity(if dimmed { DIMMED_OPACITY } else { 1.0 })
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    if dimmed {
                        ui.multiply_opacity(DIMMED_OPACITY);
                    }
                    ui.horizontal(|ui| {
                        status_dot(ui, zone.status, 4.0);
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(l10n.zone_name(zone))
                                    .size(theme::FONT_BODY)
                                    .color(theme::TEXT),
                            );
                            caption(
                                ui,
                                &format!("{} \u{00b7} {}", l10n.format_area(zone.area), zone.category),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            status_badge(ui, zone.status, l10n.status_label(zone.status));
                        });
                    });
                })
                .response
                .interact(egui::Sense::click());
            if response.clicked() {
                actions.selection.push(SelectionRequest::Zone {
                    zone: Some(zone.clone()),
                    floor: floor.clone(),
                });
            }
        }
    });
}

fn draw_plan(ui: &mut egui::Ui, plan: &str, floor: &Floor, l10n: &LocalizationState) {
    image_placeholder(ui, Some(plan), l10n.t("zone.no_preview"));
    ui.horizontal(|ui| {
        egui::Frame::new()
            .fill(theme::PRIMARY)
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::symmetric(6, 2))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(floor.tag())
                        .size(theme::FONT_SMALL)
                        .color(egui::Color32::WHITE)
                        .strong(),
                );
            });
        ui.label(
            egui::RichText::new(l10n.floor_name(floor))
                .size(theme::FONT_BODY)
                .color(theme::TEXT_HEADING)
                .strong(),
        );
    });
}
