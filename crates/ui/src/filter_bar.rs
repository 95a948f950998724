//! Category filter buttons at the top centre.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use venue::filter::ZoneFilter;
use venue::localization::LocalizationState;

use crate::widgets::{overlay_frame, pill_button};

pub fn filter_bar_ui(
    mut contexts: EguiContexts,
    mut filter: ResMut<ZoneFilter>,
    l10n: Res<LocalizationState>,
) {
    let mut picked = None;

    egui::Area::new(egui::Id::new("filter_bar"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 12.0))
        .show(contexts.ctx_mut(), |ui| {
            overlay_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    for option in ZoneFilter::ALL {
                        if pill_button(ui, l10n.t(option.label_key()), *filter == option).clicked()
                        {
                            picked = Some(option);
                        }
                    }
                });
            });
        });

    if let Some(option) = picked {
        if *filter != option {
            debug!("Zone filter set to {:?}", option);
            *filter = option;
        }
    }
}
