//! Right-hand booking panel composed from the overview, floor, zone and
//! date sections.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use venue::booking::{BookingCalendar, BookingFlow, BookingRequest};
use venue::catalog::Catalog;
use venue::filter::ZoneFilter;
use venue::localization::LocalizationState;
use venue::media::GALLERY_STRUCTURE_IMAGE;
use venue::selection::{Selection, SelectionRequest};

use crate::header::PanelVisible;
use crate::theme;
use crate::widgets::{caption, card_frame, image_placeholder};

use super::dates_section;
use super::floor_section;
use super::view::{action_view, PanelActions};
use super::zone_section;

#[allow(clippy::too_many_arguments)]
pub fn booking_panel_ui(
    mut contexts: EguiContexts,
    visible: Res<PanelVisible>,
    catalog: Res<Catalog>,
    selection: Res<Selection>,
    filter: Res<ZoneFilter>,
    flow: Res<BookingFlow>,
    mut calendar: ResMut<BookingCalendar>,
    l10n: Res<LocalizationState>,
    mut selection_requests: EventWriter<SelectionRequest>,
    mut booking_requests: EventWriter<BookingRequest>,
) {
    if !visible.0 {
        return;
    }

    let mut actions = PanelActions::default();

    egui::SidePanel::right("booking_panel")
        .exact_width(theme::PANEL_WIDTH)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.add_space(theme::SECTION_SPACING);
            ui.label(
                egui::RichText::new(l10n.t("ui.title"))
                    .size(theme::FONT_TITLE)
                    .color(theme::TEXT_HEADING)
                    .strong(),
            );
            caption(ui, l10n.t("panel.subtitle"));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                if selection.floor_id().is_none() {
                    draw_overview(ui, &l10n);
                    ui.add_space(theme::SECTION_SPACING);
                }

                floor_section::draw_floor_grid(ui, &catalog, &selection, &l10n, &mut actions);
                ui.separator();

                if let Some(floor) = selection.floor() {
                    floor_section::draw_floor_card(
                        ui,
                        floor,
                        &selection,
                        *filter,
                        &l10n,
                        &mut actions,
                    );
                    ui.add_space(theme::SECTION_SPACING);
                }

                if let Some(zone) = selection.zone() {
                    zone_section::draw_zone_details(ui, zone, &l10n);
                    ui.add_space(theme::SECTION_SPACING);

                    if let Some(view) = action_view(zone, &flow) {
                        dates_section::draw_dates(ui, zone, &calendar, &l10n, &mut actions);
                        ui.add_space(theme::SECTION_SPACING);
                        dates_section::draw_action(ui, view, &l10n, &mut actions);
                    }
                }
            });
        });

    for request in actions.selection {
        selection_requests.send(request);
    }
    if let Some(shift) = actions.date_shift {
        if shift.apply(&mut calendar) {
            debug!(
                "Booking range now {} to {}",
                calendar.range.from(),
                calendar.range.to()
            );
        }
    }
    if actions.reserve {
        booking_requests.send(BookingRequest);
    }
}

fn draw_overview(ui: &mut egui::Ui, l10n: &LocalizationState) {
    card_frame().show(ui, |ui| {
        image_placeholder(ui, Some(GALLERY_STRUCTURE_IMAGE), l10n.t("zone.no_preview"));
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(l10n.t("overview.title"))
                .size(theme::FONT_HEADING)
                .color(theme::TEXT_HEADING)
                .strong(),
        );
        caption(ui, l10n.t("overview.hint"));
    });
}
