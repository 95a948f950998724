//! Static building shell around the floor stack: foundation, walls, roof
//! and lit windows. The walls fade out while a floor is isolated.

use bevy::prelude::*;

use venue::selection::Selection;

const WALL_COLOR: Color = Color::srgb(0xd4 as f32 / 255.0, 0xc4 as f32 / 255.0, 0xb0 as f32 / 255.0);
const FOUNDATION_COLOR: Color = Color::srgb(0x9a as f32 / 255.0, 0x8b as f32 / 255.0, 0x7a as f32 / 255.0);
const ROOF_COLOR: Color = Color::srgb(0x8b as f32 / 255.0, 0x73 as f32 / 255.0, 0x55 as f32 / 255.0);
const WINDOW_COLOR: Color = Color::srgb(0xfe as f32 / 255.0, 0xf3 as f32 / 255.0, 0xc7 as f32 / 255.0);

const ARCH_XS: [f32; 4] = [-1.5, -0.5, 0.5, 1.5];
const WINDOW_XS: [f32; 5] = [-1.8, -1.0, -0.2, 0.6, 1.4];
const UPPER_WINDOW_ROWS: u32 = 5;

/// A wall whose opacity depends on whether a floor is selected.
#[derive(Component, Debug, Clone, Copy)]
pub struct ExteriorWall {
    pub alpha: f32,
    pub faded_alpha: f32,
}

impl ExteriorWall {
    pub fn alpha_for(&self, floor_selected: bool) -> f32 {
        if floor_selected {
            self.faded_alpha
        } else {
            self.alpha
        }
    }
}

fn solid(color: Color, roughness: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        perceptual_roughness: roughness,
        ..default()
    }
}

fn translucent(color: Color, alpha: f32, roughness: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(alpha),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: roughness,
        ..default()
    }
}

fn glowing(alpha: f32, intensity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: WINDOW_COLOR.with_alpha(alpha),
        emissive: WINDOW_COLOR.to_linear() * intensity,
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

pub fn spawn_building_exterior(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Foundation"),
        Mesh3d(meshes.add(Cuboid::new(5.0, 0.4, 4.0))),
        MeshMaterial3d(materials.add(solid(FOUNDATION_COLOR, 0.7))),
        Transform::from_xyz(0.0, -0.2, 0.0),
    ));

    // (name, size, position, opacity, faded opacity)
    let walls = [
        ("Wall left", Vec3::new(0.15, 3.2, 3.7), Vec3::new(-2.35, 1.5, 0.0), 0.9, 0.3),
        ("Wall right", Vec3::new(0.15, 3.2, 3.7), Vec3::new(2.35, 1.5, 0.0), 0.9, 0.3),
        ("Wall back", Vec3::new(4.7, 3.2, 0.15), Vec3::new(0.0, 1.5, -1.85), 0.9, 0.3),
        ("Facade ground", Vec3::new(4.7, 0.6, 0.15), Vec3::new(0.0, 0.3, 1.85), 0.9, 0.3),
        ("Facade upper", Vec3::new(4.7, 2.6, 0.1), Vec3::new(0.0, 1.9, 1.85), 0.8, 0.2),
    ];
    for (name, size, pos, alpha, faded_alpha) in walls {
        commands.spawn((
            Name::new(name),
            ExteriorWall { alpha, faded_alpha },
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(materials.add(translucent(WALL_COLOR, alpha, 0.4))),
            Transform::from_translation(pos),
        ));
    }

    commands.spawn((
        Name::new("Roof"),
        Mesh3d(meshes.add(Cuboid::new(4.8, 0.15, 3.9))),
        MeshMaterial3d(materials.add(solid(ROOF_COLOR, 0.6))),
        Transform::from_xyz(0.0, 3.2, 0.0),
    ));

    let arch_mesh = meshes.add(Cuboid::new(0.6, 0.5, 0.05));
    let arch_material = materials.add(glowing(0.8, 0.3));
    for x in ARCH_XS {
        commands.spawn((
            Mesh3d(arch_mesh.clone()),
            MeshMaterial3d(arch_material.clone()),
            Transform::from_xyz(x, 0.25, 1.92),
        ));
    }

    let window_mesh = meshes.add(Cuboid::new(0.4, 0.35, 0.02));
    let window_material = materials.add(glowing(0.7, 0.2));
    for row in 1..=UPPER_WINDOW_ROWS {
        for x in WINDOW_XS {
            commands.spawn((
                Mesh3d(window_mesh.clone()),
                MeshMaterial3d(window_material.clone()),
                Transform::from_xyz(x, 0.5 + row as f32 * 0.5, 1.92),
            ));
        }
    }
}

/// Fade the walls when a floor is isolated, restore them on the overview.
pub fn fade_exterior_walls(
    selection: Res<Selection>,
    walls: Query<(&ExteriorWall, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !selection.is_changed() {
        return;
    }
    let floor_selected = selection.floor_id().is_some();
    for (wall, material) in &walls {
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.base_color.set_alpha(wall.alpha_for(floor_selected));
        }
    }
}

pub fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Warm fill from the front-left
    commands.spawn((
        PointLight {
            color: WINDOW_COLOR,
            intensity: 400_000.0,
            range: 30.0,
            ..default()
        },
        Transform::from_xyz(-5.0, 5.0, 5.0),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_fades_only_with_floor_selected() {
        let wall = ExteriorWall {
            alpha: 0.9,
            faded_alpha: 0.3,
        };
        assert_eq!(wall.alpha_for(false), 0.9);
        assert_eq!(wall.alpha_for(true), 0.3);
    }
}
