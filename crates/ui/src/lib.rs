use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use venue::VenueSet;

pub mod booking_panel;
pub mod filter_bar;
pub mod floor_rail;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod labels;
pub mod theme;
pub mod widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<header::PanelVisible>()
            .init_resource::<help_overlay::HelpOverlayOpen>()
            .add_systems(Startup, theme::apply_exhibition_theme)
            .add_systems(
                Update,
                (
                    floor_rail::floor_keyboard_nav,
                    help_overlay::toggle_help_overlay,
                )
                    .chain()
                    .in_set(VenueSet::Input),
            )
            .add_systems(
                Update,
                (
                    // The side panel claims its strip before the floating areas.
                    booking_panel::booking_panel_ui,
                    header::header_ui,
                    filter_bar::filter_bar_ui,
                    floor_rail::floor_rail_ui,
                    footer::footer_ui,
                    labels::scene_labels_ui,
                    help_overlay::help_overlay_ui,
                )
                    .chain()
                    .in_set(VenueSet::Input),
            );
    }
}
