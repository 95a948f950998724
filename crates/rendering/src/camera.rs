use bevy::core_pipeline::bloom::Bloom;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::egui_input_guard::egui_wants_pointer;

const ZOOM_SPEED: f32 = 0.1;
pub const MIN_DISTANCE: f32 = 3.0;
pub const MAX_DISTANCE: f32 = 15.0;
/// Keeps the camera just above the horizon (polar angle <= PI / 2.1).
pub const MIN_PITCH: f32 = std::f32::consts::FRAC_PI_2 - std::f32::consts::PI / 2.1;
pub const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.008;
/// World units panned per pixel, per unit of distance.
const PAN_SENSITIVITY: f32 = 0.0015;
/// How far the focus may wander from the building centre.
const FOCUS_LIMIT: f32 = 6.0;
pub const FOV_DEGREES: f32 = 45.0;

/// Point the camera orbits around.
pub const HOME_FOCUS: Vec3 = Vec3::new(0.0, 1.2, 0.0);
/// Initial eye position.
pub const HOME_EYE: Vec3 = Vec3::new(6.0, 4.0, 6.0);

/// Orbital camera model: the camera orbits a focus point inside the building.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(HOME_EYE, HOME_FOCUS)
    }
}

impl OrbitCamera {
    /// Orbit parameters that put the eye at `eye` looking at `focus`.
    pub fn looking_from(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let pitch = (offset.y / offset.length().max(f32::EPSILON))
            .asin()
            .clamp(MIN_PITCH, MAX_PITCH);
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch,
            distance,
        }
    }

    pub fn eye(&self) -> Vec3 {
        // Spherical to cartesian offset from focus
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.focus + Vec3::new(x, y, z)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Move the focus in the view plane by a screen-space delta.
    pub fn pan(&mut self, delta: Vec2) {
        let transform = self.transform();
        let scale = self.distance * PAN_SENSITIVITY;
        let right = transform.right();
        let up = transform.up();
        self.focus += (-delta.x * *right + delta.y * *up) * scale;
        self.focus = self
            .focus
            .clamp(Vec3::new(-FOCUS_LIMIT, 0.0, -FOCUS_LIMIT), Vec3::splat(FOCUS_LIMIT));
    }

    pub fn zoom(&mut self, lines: f32) {
        let factor = 1.0 - lines * ZOOM_SPEED;
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Right/middle-drag pan state.
#[derive(Resource, Default)]
pub struct CameraDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

/// Tracks left-click drag state: differentiates click from drag.
/// When the mouse moves beyond `LEFT_DRAG_THRESHOLD` pixels from the initial
/// press it becomes a camera orbit and no click is reported.
#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    pub is_dragging: bool,
    /// Cursor position of a press-release that never became a drag. Taken by
    /// the picking system.
    pub click: Option<Vec2>,
}

const LEFT_DRAG_THRESHOLD: f32 = 5.0;

impl LeftClickDrag {
    pub fn press(&mut self, pos: Vec2) {
        self.pressed = true;
        self.start_pos = pos;
        self.last_pos = pos;
        self.is_dragging = false;
    }

    /// Cursor moved while the button may be held. Returns the orbit delta
    /// once the press has become a drag.
    pub fn motion(&mut self, pos: Vec2) -> Option<Vec2> {
        if !self.pressed {
            return None;
        }
        if !self.is_dragging {
            if pos.distance(self.start_pos) <= LEFT_DRAG_THRESHOLD {
                return None;
            }
            self.is_dragging = true;
            self.last_pos = pos;
            return None;
        }
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        (delta != Vec2::ZERO).then_some(delta)
    }

    /// Button released: a press that never became a drag is a click.
    pub fn release(&mut self) {
        if self.pressed && !self.is_dragging {
            self.click = Some(self.start_pos);
        }
        self.pressed = false;
        self.is_dragging = false;
    }
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();

    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            clear_color: ClearColorConfig::Custom(Color::srgb_u8(0xf5, 0xf1, 0xea)),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            ..default()
        }),
        Tonemapping::TonyMcMapface,
        Bloom::NATURAL,
        orbit.transform(),
    ));
    commands.insert_resource(orbit);
}

/// System: apply OrbitCamera state to the actual camera Transform each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = orbit.transform();
}

/// Right- or middle-mouse drag: pan focus.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let pan_buttons = [MouseButton::Right, MouseButton::Middle];

    if buttons.any_just_pressed(pan_buttons) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if drag.dragging && !buttons.any_pressed(pan_buttons) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            if delta != Vec2::ZERO {
                orbit.pan(delta);
                drag.last_pos = pos;
            }
        }
    }
}

/// Left-mouse drag: orbit, with a threshold so short presses stay clicks.
pub fn camera_left_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut left_drag: ResMut<LeftClickDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let cursor = window.cursor_position();

    if buttons.just_pressed(MouseButton::Left) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = cursor {
            left_drag.press(pos);
        }
    }
    if buttons.just_released(MouseButton::Left) {
        left_drag.release();
    } else if let Some(pos) = cursor {
        if let Some(delta) = left_drag.motion(pos) {
            orbit.rotate(delta);
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        orbit.zoom(dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_orbit_reproduces_home_eye() {
        let orbit = OrbitCamera::default();
        assert!(orbit.eye().distance(HOME_EYE) < 1e-3);
        assert_eq!(orbit.focus, HOME_FOCUS);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..100 {
            orbit.zoom(5.0);
        }
        assert_eq!(orbit.distance, MIN_DISTANCE);
        for _ in 0..100 {
            orbit.zoom(-5.0);
        }
        assert_eq!(orbit.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_rotation_never_goes_below_horizon() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate(Vec2::new(0.0, -10_000.0));
        assert_eq!(orbit.pitch, MIN_PITCH);
        assert!(orbit.eye().y > orbit.focus.y);
        orbit.rotate(Vec2::new(0.0, 10_000.0));
        assert_eq!(orbit.pitch, MAX_PITCH);
    }

    #[test]
    fn test_pan_moves_focus_and_keeps_distance() {
        let mut orbit = OrbitCamera::default();
        let before = orbit;
        orbit.pan(Vec2::new(40.0, 0.0));
        assert_ne!(orbit.focus, before.focus);
        assert_eq!(orbit.distance, before.distance);
    }

    #[test]
    fn test_short_press_is_a_click() {
        let mut drag = LeftClickDrag::default();
        drag.press(Vec2::new(100.0, 100.0));
        assert_eq!(drag.motion(Vec2::new(103.0, 101.0)), None);
        drag.release();
        assert_eq!(drag.click, Some(Vec2::new(100.0, 100.0)));
        assert!(!drag.pressed);
    }

    #[test]
    fn test_long_press_becomes_orbit_drag() {
        let mut drag = LeftClickDrag::default();
        drag.press(Vec2::new(100.0, 100.0));
        assert_eq!(drag.motion(Vec2::new(120.0, 100.0)), None);
        assert!(drag.is_dragging);
        assert_eq!(drag.motion(Vec2::new(130.0, 95.0)), Some(Vec2::new(10.0, -5.0)));
        drag.release();
        assert_eq!(drag.click, None);
    }

    #[test]
    fn test_motion_without_press_does_nothing() {
        let mut drag = LeftClickDrag::default();
        assert_eq!(drag.motion(Vec2::new(50.0, 50.0)), None);
        drag.release();
        assert_eq!(drag.click, None);
    }

    #[test]
    fn test_pan_focus_is_bounded() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..1000 {
            orbit.pan(Vec2::new(500.0, 500.0));
        }
        assert!(orbit.focus.x.abs() <= FOCUS_LIMIT && orbit.focus.z.abs() <= FOCUS_LIMIT);
    }
}
