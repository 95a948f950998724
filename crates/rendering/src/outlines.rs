//! Edge outlines for floor plates and the visible zone boxes.

use bevy::prelude::*;

use venue::selection::Selection;

use crate::floors::{FloorPlate, PLATE_EDGE_COLOR};
use crate::layout::{plate_alpha, plate_size};
use crate::zones::{ZoneBox, SELECTED_ZONE_COLOR, ZONE_EDGE_COLOR};

const ZONE_EDGE_ALPHA: f32 = 0.6;
/// Plate edges are drawn at this fraction of the plate's opacity.
const PLATE_EDGE_ALPHA_SCALE: f32 = 0.8;

pub fn draw_floor_outlines(
    mut gizmos: Gizmos,
    selection: Res<Selection>,
    plates: Query<(&FloorPlate, &Transform)>,
) {
    for (plate, transform) in &plates {
        let alpha = plate_alpha(plate.floor_id, &selection) * PLATE_EDGE_ALPHA_SCALE;
        gizmos.cuboid(
            transform.with_scale(plate_size()),
            PLATE_EDGE_COLOR.with_alpha(alpha),
        );
    }
}

pub fn draw_zone_outlines(
    mut gizmos: Gizmos,
    selection: Res<Selection>,
    boxes: Query<(&ZoneBox, &Transform)>,
) {
    if selection.floor_id().is_none() {
        return;
    }
    for (zone_box, transform) in &boxes {
        if !selection.is_floor_selected(zone_box.floor_id) {
            continue;
        }
        let color = if selection.is_zone_selected(&zone_box.zone.id) {
            SELECTED_ZONE_COLOR
        } else {
            ZONE_EDGE_COLOR
        };
        let size = Vec3::from_array(zone_box.zone.size);
        gizmos.cuboid(transform.with_scale(size), color.with_alpha(ZONE_EDGE_ALPHA));
    }
}
