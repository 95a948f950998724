//! Core state for the exhibition-center viewer: the building catalog, the
//! floor/zone selection, the simulated booking flow, the zone filter and
//! the localized strings. Rendering and UI crates read these resources and
//! talk back through events.

use bevy::prelude::*;

pub mod booking;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod localization;
pub mod media;
pub mod selection;
pub mod settings;
pub mod status;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

use booking::BookingPlugin;
use catalog::{load_catalog_override, Catalog};
use filter::ZoneFilter;
use localization::LocalizationPlugin;
use selection::SelectionPlugin;
use settings::VenueSettings;

/// Ordered phases for per-frame systems in the `Update` schedule.
///
/// Configured as a chain: `Input` → `Selection` → `Booking` → `Visual`, so
/// requests sent by input surfaces are applied in the same frame and the
/// scene always renders the state after those requests.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum VenueSet {
    /// Picking, keyboard and UI panels that send requests.
    Input,
    /// Apply queued [`selection::SelectionRequest`]s.
    Selection,
    /// Start and advance the simulated booking flow.
    Booking,
    /// Visual-only updates driven by the resulting state.
    Visual,
}

pub struct VenuePlugin;

impl Plugin for VenuePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                VenueSet::Input,
                VenueSet::Selection,
                VenueSet::Booking,
                VenueSet::Visual,
            )
                .chain(),
        );

        app.init_resource::<VenueSettings>()
            .init_resource::<Catalog>()
            .init_resource::<ZoneFilter>()
            .add_systems(Startup, load_catalog_override);

        app.add_plugins((LocalizationPlugin, SelectionPlugin, BookingPlugin));
    }
}
