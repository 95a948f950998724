//! Screen-space labels pinned to points in the 3D scene: `NF` tags beside
//! each plate and a name / area card over the hovered or selected zone.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::layout::{floor_label_anchor, zone_label_anchor};
use rendering::picking::HoverState;
use venue::catalog::{Catalog, Zone};
use venue::localization::LocalizationState;
use venue::selection::Selection;

use crate::theme;

/// Floor tags are hidden for floors stacked above the selected one.
pub fn floor_label_visible(floor_id: u32, selection: &Selection) -> bool {
    !selection.is_above_selected(floor_id)
}

/// Zones on the selected floor that get a label: the selected zone and the
/// hovered one, each at most once.
pub fn labelled_zones<'c>(
    catalog: &'c Catalog,
    selection: &Selection,
    hover: &HoverState,
) -> Vec<(usize, &'c Zone)> {
    let Some(floor_id) = selection.floor_id() else {
        return Vec::new();
    };
    let Some(index) = catalog.position_of(floor_id) else {
        return Vec::new();
    };
    let Some(floor) = catalog.floor(floor_id) else {
        return Vec::new();
    };
    floor
        .zones
        .iter()
        .filter(|z| selection.is_zone_selected(&z.id) || hover.zone_id() == Some(z.id.as_str()))
        .map(|z| (index, z))
        .collect()
}

fn project(camera: &Camera, camera_transform: &GlobalTransform, world: Vec3) -> Option<egui::Pos2> {
    camera
        .world_to_viewport(camera_transform, world)
        .ok()
        .map(|p| egui::pos2(p.x, p.y))
}

pub fn scene_labels_ui(
    mut contexts: EguiContexts,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    catalog: Res<Catalog>,
    selection: Res<Selection>,
    hover: Res<HoverState>,
    l10n: Res<LocalizationState>,
) {
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let ctx = contexts.ctx_mut();

    for (index, floor) in catalog.floors().iter().enumerate() {
        if !floor_label_visible(floor.id, &selection) {
            continue;
        }
        let Some(pos) = project(camera, camera_transform, floor_label_anchor(index)) else {
            continue;
        };
        egui::Area::new(egui::Id::new(("floor_label", floor.id)))
            .fixed_pos(pos)
            .pivot(egui::Align2::CENTER_CENTER)
            .order(egui::Order::Background)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme::BG_OVERLAY)
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::symmetric(6, 2))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(floor.tag())
                                .size(theme::FONT_SMALL)
                                .color(egui::Color32::WHITE),
                        );
                    });
            });
    }

    for (index, zone) in labelled_zones(&catalog, &selection, &hover) {
        let Some(pos) = project(camera, camera_transform, zone_label_anchor(index, zone)) else {
            continue;
        };
        egui::Area::new(egui::Id::new(("zone_label", zone.id.as_str())))
            .fixed_pos(pos)
            .pivot(egui::Align2::CENTER_BOTTOM)
            .order(egui::Order::Background)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme::BG_CARD)
                    .stroke(egui::Stroke::new(1.0, theme::BORDER))
                    .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(l10n.zone_name(zone))
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_HEADING)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(l10n.format_area(zone.area))
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        );
                    });
            });
    }
}
