//! # TestVenue: headless harness for venue integration tests
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `VenuePlugin` and a
//! fixed frame time, so timer-driven behaviour advances deterministically.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use chrono::NaiveDate;

use crate::booking::{BookingCalendar, BookingCompleted, BookingFlow, BookingRequest, DateRange};
use crate::catalog::Catalog;
use crate::selection::{Selection, SelectionRequest};
use crate::settings::VenueSettings;
use crate::VenuePlugin;

/// Frame time used by [`TestVenue::tick`].
pub const FRAME: Duration = Duration::from_millis(100);

/// Every [`BookingCompleted`] seen since the harness was built.
#[derive(Resource, Default)]
struct CompletedLog(Vec<BookingCompleted>);

fn record_completed(mut events: EventReader<BookingCompleted>, mut log: ResMut<CompletedLog>) {
    log.0.extend(events.read().cloned());
}

pub struct TestVenue {
    app: App,
}

impl Default for TestVenue {
    fn default() -> Self {
        Self::new()
    }
}

impl TestVenue {
    /// Built-in catalog, English, calendar starting on 2026-03-01.
    pub fn new() -> Self {
        Self::with_settings(VenueSettings::default())
    }

    pub fn with_settings(settings: VenueSettings) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.insert_resource(settings);
        app.insert_resource(BookingCalendar::starting(Self::today()));
        app.add_plugins(VenuePlugin);
        app.init_resource::<CompletedLog>()
            .add_systems(Update, record_completed.after(crate::VenueSet::Booking));

        // Run Startup systems.
        app.update();
        Self { app }
    }

    /// The fixed "today" of every harness.
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Builders
    // -----------------------------------------------------------------------

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.app.insert_resource(catalog);
        self
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.app.world_mut().resource_mut::<BookingCalendar>().range = range;
        self
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Send a selection request and run one frame.
    pub fn request(&mut self, request: SelectionRequest) -> &mut Self {
        self.app.world_mut().send_event(request);
        self.tick(1);
        self
    }

    pub fn select_floor(&mut self, floor_id: Option<u32>) -> &mut Self {
        self.request(SelectionRequest::Floor(floor_id))
    }

    /// Select a catalog zone by id, together with its floor.
    pub fn select_zone(&mut self, zone_id: &str) -> &mut Self {
        let request = SelectionRequest::zone_by_id(self.catalog(), zone_id);
        match request {
            Some(request) => self.request(request),
            None => panic!("zone '{zone_id}' is not in the catalog"),
        }
    }

    /// Send [`BookingRequest`] and run one frame.
    pub fn book(&mut self) -> &mut Self {
        self.app.world_mut().send_event(BookingRequest);
        self.tick(1);
        self
    }

    // -----------------------------------------------------------------------
    // Time
    // -----------------------------------------------------------------------

    /// Run N frames of [`FRAME`] each.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Run enough frames to cover `duration`.
    pub fn run_for(&mut self, duration: Duration) {
        let frames = duration.as_millis().div_ceil(FRAME.as_millis());
        self.tick(frames as u32);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn catalog(&self) -> &Catalog {
        self.resource::<Catalog>()
    }

    pub fn selection(&self) -> &Selection {
        self.resource::<Selection>()
    }

    pub fn flow(&self) -> &BookingFlow {
        self.resource::<BookingFlow>()
    }

    pub fn completed(&self) -> &[BookingCompleted] {
        &self.resource::<CompletedLog>().0
    }
}
