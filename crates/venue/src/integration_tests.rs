//! Integration tests for the venue crate using the `TestVenue` harness.
//!
//! These spin up a headless Bevy App with `VenuePlugin` and drive it the way
//! the input surfaces do: through selection and booking events.

mod booking_flow_tests;

use crate::catalog::Catalog;
use crate::filter::ZoneFilter;
use crate::localization::{Locale, LocalizationState};
use crate::selection::{SelectionPhase, SelectionRequest};
use crate::settings::VenueSettings;
use crate::test_harness::TestVenue;

#[test]
fn harness_starts_unselected_with_builtin_catalog() {
    let venue = TestVenue::new();
    assert_eq!(venue.selection().phase(), SelectionPhase::Unselected);
    assert_eq!(venue.catalog().summary().floors, 6);
    assert_eq!(*venue.resource::<ZoneFilter>(), ZoneFilter::All);
    assert!(!venue.flow().is_in_progress());
}

#[test]
fn locale_setting_is_applied_at_startup() {
    let venue = TestVenue::with_settings(VenueSettings {
        locale: Locale::Zh,
        ..Default::default()
    });
    let l10n = venue.resource::<LocalizationState>();
    assert_eq!(l10n.active, Locale::Zh);
    assert_eq!(l10n.t("ui.title"), "全球展览中心");
}

#[test]
fn missing_catalog_file_keeps_builtin() {
    let venue = TestVenue::with_settings(VenueSettings {
        catalog_path: Some("/nonexistent/exhibition-catalog.json".into()),
        ..Default::default()
    });
    assert_eq!(venue.catalog().floors().len(), 6);
}

#[test]
fn catalog_file_replaces_builtin() {
    let builtin = Catalog::builtin();
    let two_floors = &builtin.floors()[..2];
    let json = serde_json::to_string(two_floors).unwrap();
    let path = std::env::temp_dir().join(format!(
        "exhibition-catalog-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, json).unwrap();

    let venue = TestVenue::with_settings(VenueSettings {
        catalog_path: Some(path.clone()),
        ..Default::default()
    });
    let _ = std::fs::remove_file(&path);

    assert_eq!(venue.catalog().floors().len(), 2);
    assert!(venue.catalog().zone("3f-pet").is_none());
}

#[test]
fn injected_catalog_drives_floor_stepping() {
    let builtin = Catalog::builtin();
    let catalog = Catalog::new(builtin.floors()[3..].to_vec()).unwrap();
    let mut venue = TestVenue::new().with_catalog(catalog);

    venue.request(SelectionRequest::StepUp);
    assert_eq!(venue.selection().floor_id(), Some(4));
    venue.request(SelectionRequest::StepDown);
    assert_eq!(venue.selection().floor_id(), Some(4));

    venue.select_floor(Some(2));
    assert_eq!(venue.selection().phase(), SelectionPhase::Unselected);
    assert_eq!(venue.catalog().summary().floors, 3);
}
