//! The simulated reservation, driven by `BookingRequest` events against the
//! current selection.

use crate::booking::{BookingPhase, DateRange};
use crate::config::{BOOKING_SUBMIT_DELAY, BOOKING_SUCCESS_HOLD};
use crate::test_harness::TestVenue;

#[test]
fn test_booking_available_zone_runs_full_cycle() {
    let mut venue = TestVenue::new();
    venue.select_zone("3f-pet").book();
    assert!(venue.flow().is_in_progress());
    assert_eq!(venue.flow().zone_id(), Some("3f-pet"));

    venue.run_for(BOOKING_SUBMIT_DELAY);
    assert!(venue.flow().is_success());
    assert!(!venue.flow().is_in_progress());

    let completed = venue.completed();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].zone_id, "3f-pet");
    // Default stay is today..today+7, eight billable days.
    assert_eq!(completed[0].quote.days, 8);
    assert_eq!(completed[0].quote.total, 1600 * 8);

    venue.run_for(BOOKING_SUCCESS_HOLD);
    assert_eq!(*venue.flow().phase(), BookingPhase::Idle);
    assert_eq!(venue.completed().len(), 1);
}

#[test]
fn test_booking_uses_calendar_range() {
    let today = TestVenue::today();
    let range = DateRange::new(today, today + chrono::Duration::days(2)).unwrap();
    let mut venue = TestVenue::new().with_range(range);
    venue.select_zone("6f-terrace").book();
    venue.run_for(BOOKING_SUBMIT_DELAY);
    let done = &venue.completed()[0];
    assert_eq!(done.range, range);
    assert_eq!(done.quote.days, 3);
}

#[test]
fn test_booking_without_zone_does_nothing() {
    let mut venue = TestVenue::new();
    venue.select_floor(Some(3)).book();
    assert_eq!(*venue.flow().phase(), BookingPhase::Idle);
    venue.run_for(BOOKING_SUBMIT_DELAY);
    assert!(venue.completed().is_empty());
}

#[test]
fn test_booking_booked_or_pending_zone_does_nothing() {
    let mut venue = TestVenue::new();
    for zone in ["2f-independent-1", "3f-appliance", "5f-conference"] {
        venue.select_zone(zone).book();
        assert_eq!(*venue.flow().phase(), BookingPhase::Idle, "zone {zone}");
    }
    venue.run_for(BOOKING_SUBMIT_DELAY);
    assert!(venue.completed().is_empty());
}

#[test]
fn test_changing_selection_does_not_cancel_submission() {
    let mut venue = TestVenue::new();
    venue.select_zone("3f-pet").book();
    venue.select_floor(None);
    venue.run_for(BOOKING_SUBMIT_DELAY);
    assert_eq!(venue.completed().len(), 1);
    assert_eq!(venue.completed()[0].zone_id, "3f-pet");
}
