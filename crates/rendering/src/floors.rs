use bevy::prelude::*;

use venue::catalog::Catalog;
use venue::selection::Selection;

use crate::layout::{plate_alpha, plate_center, plate_size};
use crate::picking::{HoverState, PointerTarget};

pub const PLATE_COLOR: Color = Color::srgb(0xe8 as f32 / 255.0, 0xdc as f32 / 255.0, 0xc8 as f32 / 255.0);
pub const PLATE_HOVER_COLOR: Color = Color::srgb(0xc9 as f32 / 255.0, 0xa8 as f32 / 255.0, 0x6c as f32 / 255.0);
pub const PLATE_EDGE_COLOR: Color = Color::srgb(0x8b as f32 / 255.0, 0x73 as f32 / 255.0, 0x55 as f32 / 255.0);

/// One floor plate, stacked at its position in the catalog.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorPlate {
    pub floor_id: u32,
    pub index: usize,
}

pub fn spawn_floor_plates(
    mut commands: Commands,
    catalog: Res<Catalog>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Cuboid::from_size(plate_size()));
    for (index, floor) in catalog.floors().iter().enumerate() {
        // Each plate owns its material so opacity and tint vary per floor.
        let material = materials.add(StandardMaterial {
            base_color: PLATE_COLOR.with_alpha(crate::layout::PLATE_ALPHA),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 0.3,
            ..default()
        });
        commands.spawn((
            Name::new(format!("Floor plate {}", floor.tag())),
            FloorPlate {
                floor_id: floor.id,
                index,
            },
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(plate_center(index)),
        ));
    }
    info!("Spawned {} floor plates", catalog.floors().len());
}

/// Plate colour for the current hover target.
pub fn plate_color(floor_id: u32, hover: &HoverState) -> Color {
    match hover.target() {
        Some(PointerTarget::Floor(id)) if *id == floor_id => PLATE_HOVER_COLOR,
        _ => PLATE_COLOR,
    }
}

/// Re-tint plates when the selection or hover target changes.
pub fn update_floor_plates(
    selection: Res<Selection>,
    hover: Res<HoverState>,
    plates: Query<(&FloorPlate, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !selection.is_changed() && !hover.is_changed() {
        return;
    }
    for (plate, material) in &plates {
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.base_color =
                plate_color(plate.floor_id, &hover).with_alpha(plate_alpha(plate.floor_id, &selection));
        }
    }
}
