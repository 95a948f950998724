use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use venue::settings::VenueSettings;

#[cfg(not(target_arch = "wasm32"))]
mod screenshot_tour;

fn main() {
    let settings = VenueSettings::from_env();
    let screenshot_tour = settings.screenshot_tour;

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Global Exhibition Center".to_string(),
                    resolution: (1280.0, 720.0).into(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "info,wgpu=error,naga=warn".to_string(),
                ..default()
            }),
    )
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(settings)
    .add_plugins((venue::VenuePlugin, rendering::RenderingPlugin, ui::UiPlugin));

    // Screenshot mode: walks preset shots and exits
    if screenshot_tour {
        #[cfg(not(target_arch = "wasm32"))]
        app.add_plugins(screenshot_tour::ScreenshotTourPlugin);
        #[cfg(target_arch = "wasm32")]
        warn!("Screenshot tour is not available on the web");
    }

    app.run();
}
