//! Zone boxes and status lights. Only the selected floor's zones are shown.

use bevy::prelude::*;

use venue::catalog::{Catalog, Zone};
use venue::filter::ZoneFilter;
use venue::selection::Selection;
use venue::status::status_color;

use crate::layout::{
    selected_zone_center, status_sphere_center, zone_center, zone_size, FILTERED_ZONE_ALPHA,
    STATUS_SPHERE_RADIUS, ZONE_ALPHA,
};
use crate::picking::{HoverState, PointerTarget};

pub const SELECTED_ZONE_COLOR: Color = Color::srgb(0xfb as f32 / 255.0, 0xbf as f32 / 255.0, 0x24 as f32 / 255.0);
pub const HOVERED_ZONE_COLOR: Color = Color::srgb(0xf5 as f32 / 255.0, 0x9e as f32 / 255.0, 0x0b as f32 / 255.0);
pub const ZONE_EDGE_COLOR: Color = Color::srgb(0x6b as f32 / 255.0, 0x5b as f32 / 255.0, 0x4a as f32 / 255.0);

/// A zone box. Carries a copy of the zone so systems need no catalog lookup.
#[derive(Component, Debug, Clone)]
pub struct ZoneBox {
    pub zone: Zone,
    pub floor_id: u32,
    pub floor_index: usize,
}

/// Anything that is only visible while its floor is selected.
#[derive(Component, Debug, Clone, Copy)]
pub struct OnFloor(pub u32);

pub fn spawn_zone_boxes(
    mut commands: Commands,
    catalog: Res<Catalog>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let sphere = meshes.add(Sphere::new(STATUS_SPHERE_RADIUS).mesh().uv(16, 16));
    let mut count = 0;
    for (floor_index, floor) in catalog.floors().iter().enumerate() {
        for zone in &floor.zones {
            let material = materials.add(StandardMaterial {
                base_color: zone.display_color().with_alpha(ZONE_ALPHA),
                alpha_mode: AlphaMode::Blend,
                perceptual_roughness: 0.4,
                ..default()
            });
            commands.spawn((
                Name::new(format!("Zone {}", zone.id)),
                ZoneBox {
                    zone: zone.clone(),
                    floor_id: floor.id,
                    floor_index,
                },
                OnFloor(floor.id),
                Mesh3d(meshes.add(Cuboid::from_size(zone_size(zone)))),
                MeshMaterial3d(material),
                Transform::from_translation(zone_center(floor_index, zone)),
                Visibility::Hidden,
            ));

            let light = status_color(zone.status);
            commands.spawn((
                Name::new(format!("Status light {}", zone.id)),
                OnFloor(floor.id),
                Mesh3d(sphere.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: light,
                    emissive: light.to_linear() * 0.5,
                    ..default()
                })),
                Transform::from_translation(status_sphere_center(floor_index, zone)),
                Visibility::Hidden,
            ));
            count += 1;
        }
    }
    info!("Spawned {} zone boxes", count);
}

/// Show the selected floor's zones, hide every other floor's.
pub fn update_zone_visibility(
    selection: Res<Selection>,
    mut query: Query<(&OnFloor, &mut Visibility)>,
) {
    if !selection.is_changed() {
        return;
    }
    for (on_floor, mut visibility) in &mut query {
        let wanted = if selection.is_floor_selected(on_floor.0) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }
}

/// Display colour of a zone box: selected, then hovered, then its own.
pub fn zone_color(zone: &Zone, selection: &Selection, hover: &HoverState) -> Color {
    if selection.is_zone_selected(&zone.id) {
        SELECTED_ZONE_COLOR
    } else if matches!(hover.target(), Some(PointerTarget::Zone { zone_id, .. }) if *zone_id == zone.id)
    {
        HOVERED_ZONE_COLOR
    } else {
        zone.display_color()
    }
}

pub fn zone_alpha(zone: &Zone, filter: ZoneFilter) -> f32 {
    if filter.matches(zone) {
        ZONE_ALPHA
    } else {
        FILTERED_ZONE_ALPHA
    }
}

pub fn update_zone_materials(
    selection: Res<Selection>,
    hover: Res<HoverState>,
    filter: Res<ZoneFilter>,
    boxes: Query<(&ZoneBox, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !selection.is_changed() && !hover.is_changed() && !filter.is_changed() {
        return;
    }
    for (zone_box, material) in &boxes {
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.base_color = zone_color(&zone_box.zone, &selection, &hover)
                .with_alpha(zone_alpha(&zone_box.zone, *filter));
        }
    }
}

/// Lift and bob the selected zone; settle every other box at rest height.
pub fn animate_zone_boxes(
    time: Res<Time>,
    selection: Res<Selection>,
    mut boxes: Query<(&ZoneBox, &mut Transform)>,
) {
    if selection.floor_id().is_none() && !selection.is_changed() {
        return;
    }
    let elapsed = time.elapsed_secs();
    for (zone_box, mut transform) in &mut boxes {
        let target = if selection.is_zone_selected(&zone_box.zone.id) {
            selected_zone_center(zone_box.floor_index, &zone_box.zone, elapsed)
        } else {
            zone_center(zone_box.floor_index, &zone_box.zone)
        };
        if transform.translation != target {
            transform.translation = target;
        }
    }
}
