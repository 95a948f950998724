//! 3D presentation of the exhibition building: camera, lighting, exterior
//! shell, floor plates, zone boxes, outlines and pointer picking.

use bevy::prelude::*;

use venue::catalog::load_catalog_override;
use venue::VenueSet;

pub mod building;
pub mod camera;
pub mod egui_input_guard;
pub mod floors;
pub mod layout;
pub mod outlines;
pub mod picking;
pub mod screenshot;
pub mod zones;

use camera::{CameraDrag, LeftClickDrag};
use picking::HoverState;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraDrag>()
            .init_resource::<LeftClickDrag>()
            .init_resource::<HoverState>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    building::setup_lighting,
                    building::spawn_building_exterior,
                    floors::spawn_floor_plates,
                    zones::spawn_zone_boxes,
                )
                    .chain()
                    .after(load_catalog_override),
            )
            .add_systems(
                Update,
                (
                    camera::camera_left_drag,
                    camera::camera_pan_drag,
                    camera::camera_zoom,
                    picking::update_hover,
                    picking::handle_scene_click,
                )
                    .chain()
                    .in_set(VenueSet::Input),
            )
            .add_systems(
                Update,
                (
                    camera::apply_orbit_camera,
                    building::fade_exterior_walls,
                    floors::update_floor_plates,
                    zones::update_zone_visibility,
                    zones::update_zone_materials,
                    zones::animate_zone_boxes,
                    outlines::draw_floor_outlines,
                    outlines::draw_zone_outlines,
                )
                    .in_set(VenueSet::Visual),
            );

        // Screenshot plugin (F12 to capture)
        app.add_plugins(screenshot::ScreenshotPlugin);
    }
}
