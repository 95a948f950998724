use bevy::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

pub struct ScreenshotPlugin;

impl Plugin for ScreenshotPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_screenshot_key);
    }
}

/// File name for a capture taken at `now`.
pub fn screenshot_file_name(now: chrono::NaiveDateTime) -> String {
    format!("exhibition_{}.png", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// Capture the primary window to `path`.
#[cfg(not(target_arch = "wasm32"))]
pub fn capture_primary_window(commands: &mut Commands, path: std::path::PathBuf) {
    info!("Saving screenshot to {}", path.display());
    commands
        .spawn(Screenshot::primary_window())
        .observe(save_to_disk(path));
}

#[cfg(not(target_arch = "wasm32"))]
fn handle_screenshot_key(mut commands: Commands, keyboard: Res<ButtonInput<KeyCode>>) {
    if !keyboard.just_pressed(KeyCode::F12) {
        return;
    }
    let dir = std::path::Path::new("screenshots");
    if let Err(e) = std::fs::create_dir_all(dir) {
        warn!("Failed to create screenshots directory: {}", e);
        return;
    }
    let name = screenshot_file_name(chrono::Local::now().naive_local());
    capture_primary_window(&mut commands, dir.join(name));
}

#[cfg(target_arch = "wasm32")]
fn handle_screenshot_key(keyboard: Res<ButtonInput<KeyCode>>) {
    if keyboard.just_pressed(KeyCode::F12) {
        warn!("Screenshots not supported in browser");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_timestamped() {
        let at = chrono::NaiveDate::from_ymd_opt(2026, 3, 1)
            .and_then(|d| d.and_hms_opt(9, 5, 7))
            .unwrap();
        assert_eq!(screenshot_file_name(at), "exhibition_2026-03-01_09-05-07.png");
    }
}
