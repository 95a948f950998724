//! Vertical floor rail on the left edge plus keyboard floor navigation.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::egui_input_guard::egui_wants_keyboard;
use venue::catalog::Catalog;
use venue::localization::LocalizationState;
use venue::selection::{Selection, SelectionRequest};

use crate::help_overlay::HelpOverlayOpen;
use crate::theme;
use crate::widgets::{overlay_frame, pill_button};

/// One row of the rail, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailEntry {
    pub floor_id: u32,
    pub tag: String,
    pub selected: bool,
}

/// Rail rows with the top floor first.
pub fn rail_entries(catalog: &Catalog, selected: Option<u32>) -> Vec<RailEntry> {
    catalog
        .floors()
        .iter()
        .rev()
        .map(|floor| RailEntry {
            floor_id: floor.id,
            tag: floor.tag(),
            selected: selected == Some(floor.id),
        })
        .collect()
}

/// Map this frame's navigation keys to selection requests.
///
/// Escape only leaves a floor when the help overlay did not consume it.
pub fn keyboard_requests(
    keys: &ButtonInput<KeyCode>,
    help_open: bool,
    floor_selected: bool,
) -> Vec<SelectionRequest> {
    let mut requests = Vec::new();
    if keys.any_just_pressed([KeyCode::PageUp, KeyCode::ArrowUp]) {
        requests.push(SelectionRequest::StepUp);
    }
    if keys.any_just_pressed([KeyCode::PageDown, KeyCode::ArrowDown]) {
        requests.push(SelectionRequest::StepDown);
    }
    if keys.just_pressed(KeyCode::Escape) && !help_open && floor_selected {
        requests.push(SelectionRequest::Floor(None));
    }
    requests
}

pub fn floor_rail_ui(
    mut contexts: EguiContexts,
    catalog: Res<Catalog>,
    selection: Res<Selection>,
    l10n: Res<LocalizationState>,
    mut requests: EventWriter<SelectionRequest>,
) {
    let entries = rail_entries(&catalog, selection.floor_id());

    egui::Area::new(egui::Id::new("floor_rail"))
        .anchor(egui::Align2::LEFT_CENTER, egui::vec2(16.0, 0.0))
        .show(contexts.ctx_mut(), |ui| {
            overlay_frame().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    if ui
                        .small_button("^")
                        .on_hover_text(l10n.t("rail.up"))
                        .clicked()
                    {
                        requests.send(SelectionRequest::StepUp);
                    }
                    for entry in &entries {
                        if pill_button(ui, &entry.tag, entry.selected).clicked() {
                            requests.send(SelectionRequest::Floor(Some(entry.floor_id)));
                        }
                    }
                    if ui
                        .small_button("v")
                        .on_hover_text(l10n.t("rail.down"))
                        .clicked()
                    {
                        requests.send(SelectionRequest::StepDown);
                    }
                    if selection.floor_id().is_some() {
                        ui.separator();
                        if ui
                            .button(
                                egui::RichText::new(l10n.t("rail.overview"))
                                    .size(theme::FONT_SMALL),
                            )
                            .clicked()
                        {
                            requests.send(SelectionRequest::Floor(None));
                        }
                    }
                });
            });
        });
}

pub fn floor_keyboard_nav(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut contexts: EguiContexts,
    help: Res<HelpOverlayOpen>,
    selection: Res<Selection>,
    mut requests: EventWriter<SelectionRequest>,
) {
    let Some(keys) = keys else {
        return;
    };
    if egui_wants_keyboard(&mut contexts) {
        return;
    }
    for request in keyboard_requests(&keys, help.0, selection.floor_id().is_some()) {
        debug!("Keyboard selection request: {:?}", request);
        requests.send(request);
    }
}
