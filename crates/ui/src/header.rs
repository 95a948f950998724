//! Top-left title block with the help, panel and language controls.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use venue::localization::{Locale, LocalizationState};

use crate::help_overlay::HelpOverlayOpen;
use crate::theme;
use crate::widgets::{overlay_frame, pill_button};

/// Whether the booking side panel is shown.
#[derive(Resource)]
pub struct PanelVisible(pub bool);

impl Default for PanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

/// The locale the language button switches to.
pub fn next_locale(current: Locale) -> Locale {
    let all = Locale::ALL;
    let index = all.iter().position(|l| *l == current).unwrap_or(0);
    all[(index + 1) % all.len()]
}

pub fn header_ui(
    mut contexts: EguiContexts,
    mut l10n: ResMut<LocalizationState>,
    mut help: ResMut<HelpOverlayOpen>,
    mut panel: ResMut<PanelVisible>,
) {
    let mut switch_to = None;

    egui::Area::new(egui::Id::new("header"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 12.0))
        .show(contexts.ctx_mut(), |ui| {
            overlay_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(l10n.t("ui.title"))
                                .size(theme::FONT_TITLE)
                                .color(egui::Color32::WHITE)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(l10n.t("ui.subtitle"))
                                .size(theme::FONT_SMALL)
                                .color(theme::OVERLAY_TEXT_MUTED),
                        );
                    });
                    ui.add_space(12.0);

                    if pill_button(ui, l10n.t("header.help"), help.0).clicked() {
                        help.0 = !help.0;
                    }
                    if pill_button(ui, l10n.t("header.panel"), panel.0).clicked() {
                        panel.0 = !panel.0;
                    }
                    let next = next_locale(l10n.active);
                    if pill_button(ui, next.display_name(), false)
                        .on_hover_text(l10n.t("ui.language"))
                        .clicked()
                    {
                        switch_to = Some(next);
                    }
                });
            });
        });

    if let Some(locale) = switch_to {
        info!("UI language switched to {}", locale.code());
        l10n.set_locale(locale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_locale_cycles() {
        assert_eq!(next_locale(Locale::En), Locale::Zh);
        assert_eq!(next_locale(Locale::Zh), Locale::En);
    }

    #[test]
    fn test_panel_visible_by_default() {
        assert!(PanelVisible::default().0);
    }
}
