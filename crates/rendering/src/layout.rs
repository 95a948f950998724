//! Scene geometry shared by spawning, picking, outlines and labels.
//!
//! Floors are stacked in catalog order: the floor at list position `i`
//! sits at `y = i * FLOOR_SPACING`. Zone boxes are placed relative to the
//! plate of their floor.

use bevy::prelude::*;

use venue::catalog::Zone;
use venue::config::{
    FLOOR_SPACING, PLATE_DEPTH, PLATE_THICKNESS, PLATE_WIDTH, SELECTED_ZONE_LIFT,
    ZONE_BOB_AMPLITUDE, ZONE_BOB_RATE, ZONE_LIFT,
};
use venue::selection::Selection;

/// Plate opacity when its floor is the selected one.
pub const SELECTED_PLATE_ALPHA: f32 = 1.0;
/// Plate opacity for floors stacked above the selected one.
pub const ABOVE_SELECTED_PLATE_ALPHA: f32 = 0.15;
/// Plate opacity in every other case.
pub const PLATE_ALPHA: f32 = 0.85;
pub const ZONE_ALPHA: f32 = 0.85;
/// Zone opacity when the active filter excludes it.
pub const FILTERED_ZONE_ALPHA: f32 = 0.2;

pub const STATUS_SPHERE_RADIUS: f32 = 0.06;
/// Inset of the status sphere from the zone's +X/+Z corner.
const STATUS_SPHERE_INSET: f32 = 0.08;
/// Zone group origin sits this far above the plate.
const ZONE_GROUP_LIFT: f32 = 0.1;

/// Height of the floor plate at list position `index`.
pub fn floor_y(index: usize) -> f32 {
    index as f32 * FLOOR_SPACING
}

pub fn plate_center(index: usize) -> Vec3 {
    Vec3::new(0.0, floor_y(index), 0.0)
}

pub fn plate_half_extents() -> Vec3 {
    Vec3::new(PLATE_WIDTH, PLATE_THICKNESS, PLATE_DEPTH) / 2.0
}

pub fn plate_size() -> Vec3 {
    Vec3::new(PLATE_WIDTH, PLATE_THICKNESS, PLATE_DEPTH)
}

/// Opacity of a floor plate given the current selection.
pub fn plate_alpha(floor_id: u32, selection: &Selection) -> f32 {
    if selection.is_above_selected(floor_id) {
        ABOVE_SELECTED_PLATE_ALPHA
    } else if selection.is_floor_selected(floor_id) {
        SELECTED_PLATE_ALPHA
    } else {
        PLATE_ALPHA
    }
}

/// Anchor of the `NF` label, left of the plate.
pub fn floor_label_anchor(index: usize) -> Vec3 {
    plate_center(index) + Vec3::new(-PLATE_WIDTH / 2.0 - 0.25, 0.1, 0.0)
}

pub fn zone_size(zone: &Zone) -> Vec3 {
    Vec3::from_array(zone.size)
}

/// Origin of a zone's group: its catalog position lifted off the plate.
fn zone_group_origin(floor_index: usize, zone: &Zone) -> Vec3 {
    plate_center(floor_index) + Vec3::from_array(zone.position) + Vec3::Y * ZONE_GROUP_LIFT
}

/// Vertical bob of the selected zone at `elapsed` seconds.
pub fn zone_bob(elapsed: f32) -> f32 {
    (elapsed * ZONE_BOB_RATE).sin() * ZONE_BOB_AMPLITUDE
}

/// Centre of a zone box at rest.
pub fn zone_center(floor_index: usize, zone: &Zone) -> Vec3 {
    plate_center(floor_index) + Vec3::from_array(zone.position) + Vec3::Y * ZONE_LIFT
}

/// Centre of a selected zone box, lifted and bobbing.
pub fn selected_zone_center(floor_index: usize, zone: &Zone, elapsed: f32) -> Vec3 {
    zone_center(floor_index, zone) + Vec3::Y * (SELECTED_ZONE_LIFT + zone_bob(elapsed))
}

/// Status sphere position, fixed relative to the zone group.
pub fn status_sphere_center(floor_index: usize, zone: &Zone) -> Vec3 {
    let size = zone_size(zone);
    zone_group_origin(floor_index, zone)
        + Vec3::new(
            size.x / 2.0 - STATUS_SPHERE_INSET,
            0.15,
            size.z / 2.0 - STATUS_SPHERE_INSET,
        )
}

/// Anchor of the hover / selection label above a zone.
pub fn zone_label_anchor(floor_index: usize, zone: &Zone) -> Vec3 {
    zone_group_origin(floor_index, zone) + Vec3::Y * 0.3
}

/// Distance along the ray to the nearest hit on an axis-aligned box, or
/// `None` when the ray misses or the box is behind the origin.
pub fn ray_box_hit(origin: Vec3, dir: Vec3, center: Vec3, half: Vec3) -> Option<f32> {
    let min = center - half;
    let max = center + half;
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < 1e-6 {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let t1 = (min[axis] - o) / d;
        let t2 = (max[axis] - o) / d;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(t_near.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use venue::catalog::Catalog;

    #[test]
    fn test_floors_stack_by_spacing() {
        assert_eq!(floor_y(0), 0.0);
        assert!((floor_y(5) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_plate_alpha_rules() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::default();
        for f in catalog.floors() {
            assert_eq!(plate_alpha(f.id, &sel), PLATE_ALPHA);
        }
        sel.select_floor(Some(3), &catalog);
        assert_eq!(plate_alpha(3, &sel), SELECTED_PLATE_ALPHA);
        assert_eq!(plate_alpha(2, &sel), PLATE_ALPHA);
        assert_eq!(plate_alpha(4, &sel), ABOVE_SELECTED_PLATE_ALPHA);
        assert_eq!(plate_alpha(6, &sel), ABOVE_SELECTED_PLATE_ALPHA);
    }

    #[test]
    fn test_selected_zone_rides_higher() {
        let catalog = Catalog::builtin();
        let (_, zone) = catalog.zone("3f-pet").unwrap();
        let rest = zone_center(2, zone);
        for t in [0.0, 0.4, 1.3, 2.9] {
            let lifted = selected_zone_center(2, zone, t);
            assert!(lifted.y > rest.y);
            assert!((lifted.y - rest.y - SELECTED_ZONE_LIFT).abs() <= ZONE_BOB_AMPLITUDE + 1e-6);
            assert_eq!(lifted.x, rest.x);
        }
    }

    #[test]
    fn test_ray_hits_box_from_above() {
        let hit = ray_box_hit(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, Vec3::ZERO, Vec3::ONE);
        assert!((hit.unwrap() - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_misses_box_to_the_side() {
        let hit = ray_box_hit(Vec3::new(3.0, 10.0, 0.0), Vec3::NEG_Y, Vec3::ZERO, Vec3::ONE);
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let hit = ray_box_hit(Vec3::new(0.0, 10.0, 0.0), Vec3::Y, Vec3::ZERO, Vec3::ONE);
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_diagonal_hits_nearest_face() {
        let dir = Vec3::new(-1.0, -1.0, 0.0).normalize();
        let hit = ray_box_hit(Vec3::new(5.0, 5.0, 0.0), dir, Vec3::ZERO, Vec3::ONE).unwrap();
        let point = Vec3::new(5.0, 5.0, 0.0) + dir * hit;
        assert!((point.x - 1.0).abs() < 1e-4 && (point.y - 1.0).abs() < 1e-4);
    }
}
