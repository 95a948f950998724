//! Bottom-left strip with the floor, zone and availability counts.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use venue::catalog::{Catalog, CatalogSummary};
use venue::localization::LocalizationState;

use crate::theme;
use crate::widgets::overlay_frame;

/// `6 Floors · 27 Exhibition Zones · 16 Available`
pub fn footer_text(summary: CatalogSummary, l10n: &LocalizationState) -> String {
    format!(
        "{} {} \u{00b7} {} {} \u{00b7} {} {}",
        summary.floors,
        l10n.t("footer.floors"),
        summary.zones,
        l10n.t("footer.zones"),
        summary.available,
        l10n.t("footer.available"),
    )
}

pub fn footer_ui(mut contexts: EguiContexts, catalog: Res<Catalog>, l10n: Res<LocalizationState>) {
    let text = footer_text(catalog.summary(), &l10n);
    egui::Area::new(egui::Id::new("footer"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(16.0, -12.0))
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            overlay_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new(text)
                        .size(theme::FONT_SMALL)
                        .color(theme::OVERLAY_TEXT_MUTED),
                );
            });
        });
}
