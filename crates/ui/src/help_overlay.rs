//! "How to Use" overlay: four steps plus the status colour legend.
//!
//! Toggled from the header or with F1, dismissed with the close button or
//! Escape.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use venue::catalog::ZoneStatus;
use venue::localization::LocalizationState;

use crate::theme;
use crate::widgets::{overlay_frame, status_dot};

const STEP_KEYS: [&str; 4] = ["help.step1", "help.step2", "help.step3", "help.step4"];

/// Whether the help overlay is currently visible.
#[derive(Resource, Default)]
pub struct HelpOverlayOpen(pub bool);

/// System: F1 toggles, Escape closes.
pub fn toggle_help_overlay(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut open: ResMut<HelpOverlayOpen>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::F1) {
        open.0 = !open.0;
    }
    if open.0 && keys.just_pressed(KeyCode::Escape) {
        open.0 = false;
    }
}

/// System: render the help overlay.
pub fn help_overlay_ui(
    mut contexts: EguiContexts,
    mut open: ResMut<HelpOverlayOpen>,
    l10n: Res<LocalizationState>,
) {
    if !open.0 {
        return;
    }

    let mut should_close = false;

    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 72.0))
        .order(egui::Order::Foreground)
        .show(contexts.ctx_mut(), |ui| {
            overlay_frame().show(ui, |ui| {
                ui.set_max_width(340.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(l10n.t("help.title"))
                            .size(theme::FONT_HEADING)
                            .color(egui::Color32::WHITE)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .small_button("x")
                            .on_hover_text(l10n.t("help.close"))
                            .clicked()
                        {
                            should_close = true;
                        }
                    });
                });
                ui.add_space(6.0);

                for (i, key) in STEP_KEYS.iter().enumerate() {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{}.", i + 1))
                                .color(theme::PRIMARY)
                                .strong(),
                        );
                        ui.label(egui::RichText::new(l10n.t(key)).color(theme::OVERLAY_TEXT_MUTED));
                    });
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    for status in ZoneStatus::KNOWN {
                        status_dot(ui, status, 5.0);
                        ui.label(
                            egui::RichText::new(l10n.status_label(status))
                                .size(theme::FONT_SMALL)
                                .color(theme::OVERLAY_TEXT),
                        );
                        ui.add_space(6.0);
                    }
                });
            });
        });

    if should_close {
        open.0 = false;
    }
}
