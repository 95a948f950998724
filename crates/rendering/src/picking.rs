//! Pointer picking against the floor plates and the visible zone boxes.
//!
//! Each frame the cursor ray is cast against the scene to find the hovered
//! target. A left click that did not turn into a camera drag selects the
//! target under the press position. Zone boxes win over floor plates.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use venue::catalog::Catalog;
use venue::selection::{Selection, SelectionRequest};

use crate::camera::LeftClickDrag;
use crate::egui_input_guard::egui_wants_pointer;
use crate::layout::{
    plate_center, plate_half_extents, ray_box_hit, selected_zone_center, zone_center, zone_size,
};

/// Something under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    Floor(u32),
    Zone { zone_id: String, floor_id: u32 },
}

/// The current hover target, `None` when the pointer is off the building or
/// over the UI.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    target: Option<PointerTarget>,
}

impl HoverState {
    pub fn hovering(target: PointerTarget) -> Self {
        Self {
            target: Some(target),
        }
    }

    pub fn target(&self) -> Option<&PointerTarget> {
        self.target.as_ref()
    }

    pub fn zone_id(&self) -> Option<&str> {
        match &self.target {
            Some(PointerTarget::Zone { zone_id, .. }) => Some(zone_id),
            _ => None,
        }
    }
}

/// Find what a ray hits. Only the selected floor's zones are pickable; the
/// nearest zone hit wins, otherwise the nearest plate hit.
pub fn pick_target(
    origin: Vec3,
    dir: Vec3,
    catalog: &Catalog,
    selection: &Selection,
    elapsed: f32,
) -> Option<PointerTarget> {
    if let Some(floor_id) = selection.floor_id() {
        let floor = catalog.floor(floor_id);
        if let (Some(floor), Some(index)) = (floor, catalog.position_of(floor_id)) {
            let zone_hit = floor
                .zones
                .iter()
                .filter_map(|zone| {
                    let center = if selection.is_zone_selected(&zone.id) {
                        selected_zone_center(index, zone, elapsed)
                    } else {
                        zone_center(index, zone)
                    };
                    ray_box_hit(origin, dir, center, zone_size(zone) / 2.0).map(|t| (t, zone))
                })
                .min_by(|a, b| a.0.total_cmp(&b.0));
            if let Some((_, zone)) = zone_hit {
                return Some(PointerTarget::Zone {
                    zone_id: zone.id.clone(),
                    floor_id,
                });
            }
        }
    }

    catalog
        .floors()
        .iter()
        .enumerate()
        .filter_map(|(index, floor)| {
            ray_box_hit(origin, dir, plate_center(index), plate_half_extents())
                .map(|t| (t, floor.id))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, id)| PointerTarget::Floor(id))
}

/// The selection request a click on `target` produces.
pub fn click_request(target: &PointerTarget, catalog: &Catalog) -> Option<SelectionRequest> {
    match target {
        PointerTarget::Floor(id) => Some(SelectionRequest::Floor(Some(*id))),
        PointerTarget::Zone { zone_id, .. } => SelectionRequest::zone_by_id(catalog, zone_id),
    }
}

fn cursor_ray(
    camera_q: &Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    screen_pos: Vec2,
) -> Option<Ray3d> {
    let (camera, cam_transform) = camera_q.get_single().ok()?;
    camera.viewport_to_world(cam_transform, screen_pos).ok()
}

pub fn update_hover(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut contexts: EguiContexts,
    catalog: Res<Catalog>,
    selection: Res<Selection>,
    time: Res<Time>,
    mut hover: ResMut<HoverState>,
) {
    let target = if egui_wants_pointer(&mut contexts) {
        None
    } else {
        windows
            .get_single()
            .ok()
            .and_then(Window::cursor_position)
            .and_then(|pos| cursor_ray(&camera_q, pos))
            .and_then(|ray| {
                pick_target(
                    ray.origin,
                    *ray.direction,
                    &catalog,
                    &selection,
                    time.elapsed_secs(),
                )
            })
    };

    if target.is_some() {
        if let Some(ctx) = contexts.try_ctx_mut() {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }
    if hover.target != target {
        hover.target = target;
    }
}

/// Turn a completed click into a selection request.
pub fn handle_scene_click(
    mut left_drag: ResMut<LeftClickDrag>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    catalog: Res<Catalog>,
    selection: Res<Selection>,
    time: Res<Time>,
    mut requests: EventWriter<SelectionRequest>,
) {
    let Some(pos) = left_drag.click.take() else {
        return;
    };
    let Some(ray) = cursor_ray(&camera_q, pos) else {
        return;
    };
    let elapsed = time.elapsed_secs();
    let Some(target) = pick_target(ray.origin, *ray.direction, &catalog, &selection, elapsed) else {
        return;
    };
    if let Some(request) = click_request(&target, &catalog) {
        debug!("scene click on {:?}", target);
        requests.send(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_at(x: f32, z: f32) -> (Vec3, Vec3) {
        (Vec3::new(x, 20.0, z), Vec3::NEG_Y)
    }

    #[test]
    fn test_overview_ray_from_above_hits_top_floor() {
        let catalog = Catalog::builtin();
        let (o, d) = down_at(0.0, 0.0);
        let target = pick_target(o, d, &catalog, &Selection::default(), 0.0);
        assert_eq!(target, Some(PointerTarget::Floor(6)));
    }

    #[test]
    fn test_side_ray_hits_the_floor_at_its_height() {
        let catalog = Catalog::builtin();
        // Horizontal ray at the height of the third plate (index 2).
        let origin = Vec3::new(10.0, plate_center(2).y, 0.0);
        let target = pick_target(origin, Vec3::NEG_X, &catalog, &Selection::default(), 0.0);
        assert_eq!(target, Some(PointerTarget::Floor(3)));
    }

    #[test]
    fn test_zones_take_precedence_on_selected_floor() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::default();
        sel.select_floor(Some(3), &catalog);
        let (_, pet) = catalog.zone("3f-pet").unwrap();
        let (o, d) = down_at(pet.position[0], pet.position[2]);
        let target = pick_target(o, d, &catalog, &sel, 0.0);
        assert_eq!(
            target,
            Some(PointerTarget::Zone {
                zone_id: "3f-pet".into(),
                floor_id: 3
            })
        );
    }

    #[test]
    fn test_zones_of_unselected_floors_are_not_pickable() {
        let catalog = Catalog::builtin();
        let (_, pet) = catalog.zone("3f-pet").unwrap();
        let origin = Vec3::new(pet.position[0], zone_center(2, pet).y, 10.0);
        let target = pick_target(origin, Vec3::NEG_Z, &catalog, &Selection::default(), 0.0);
        assert!(!matches!(target, Some(PointerTarget::Zone { .. })));
    }

    #[test]
    fn test_miss_returns_none() {
        let catalog = Catalog::builtin();
        let (o, d) = down_at(50.0, 50.0);
        assert!(pick_target(o, d, &catalog, &Selection::default(), 0.0).is_none());
    }

    #[test]
    fn test_click_requests() {
        let catalog = Catalog::builtin();
        assert_eq!(
            click_request(&PointerTarget::Floor(2), &catalog),
            Some(SelectionRequest::Floor(Some(2)))
        );
        let zone = PointerTarget::Zone {
            zone_id: "4f-tiktok".into(),
            floor_id: 4,
        };
        assert!(matches!(
            click_request(&zone, &catalog),
            Some(SelectionRequest::Zone { floor, .. }) if floor.id == 4
        ));
    }
}
