use std::time::Duration;

use chrono::NaiveDate;

use crate::booking::*;
use crate::catalog::Catalog;
use crate::config::{BOOKING_SUBMIT_DELAY, BOOKING_SUCCESS_HOLD};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn zone(id: &str) -> crate::catalog::Zone {
    Catalog::builtin().zone(id).map(|(_, z)| z.clone()).unwrap()
}

// -------------------------------------------------------------------------
// Date ranges and pricing
// -------------------------------------------------------------------------

#[test]
fn test_days_counts_both_endpoints() {
    let range = DateRange::new(date(2026, 3, 1), date(2026, 3, 8)).unwrap();
    assert_eq!(range.days(), 8);
    let single = DateRange::new(date(2026, 3, 1), date(2026, 3, 1)).unwrap();
    assert_eq!(single.days(), 1);
}

#[test]
fn test_days_across_month_and_leap_day() {
    let range = DateRange::new(date(2028, 2, 27), date(2028, 3, 2)).unwrap();
    assert_eq!(range.days(), 5);
}

#[test]
fn test_total_is_price_times_inclusive_days() {
    let pet = zone("3f-pet");
    let from = date(2026, 5, 10);
    for span in [0_i64, 1, 6, 29, 364] {
        let to = from + chrono::Duration::days(span);
        let range = DateRange::new(from, to).unwrap();
        let quote = BookingQuote::for_zone(&pet, &range).unwrap();
        assert_eq!(quote.days as i64, span + 1);
        assert_eq!(quote.total, 1600 * (span as u64 + 1));
    }
}

#[test]
fn test_end_before_start_rejected() {
    let err = DateRange::new(date(2026, 3, 8), date(2026, 3, 1)).unwrap_err();
    assert!(matches!(err, DateRangeError::EndBeforeStart { .. }));
}

#[test]
fn test_start_in_past_rejected() {
    let today = date(2026, 10, 17);
    let err = DateRange::new_from_today(date(2026, 10, 16), date(2026, 10, 20), today).unwrap_err();
    assert!(matches!(err, DateRangeError::StartInPast { .. }));
}

#[test]
fn test_default_stay_is_eight_days() {
    let today = date(2026, 10, 17);
    let range = DateRange::default_stay(today);
    assert_eq!(range.from(), today);
    assert_eq!(range.to(), date(2026, 10, 24));
    assert_eq!(range.days(), 8);
}

#[test]
fn test_shift_from_drags_end_along() {
    let today = date(2026, 10, 17);
    let range = DateRange::new(today, date(2026, 10, 18)).unwrap();
    let moved = range.shift_from(3, today).unwrap();
    assert_eq!(moved.from(), date(2026, 10, 20));
    assert_eq!(moved.to(), date(2026, 10, 20));
    assert!(range.shift_from(-1, today).is_err());
}

#[test]
fn test_shift_to_cannot_cross_start() {
    let range = DateRange::new(date(2026, 10, 17), date(2026, 10, 18)).unwrap();
    assert!(range.shift_to(-1).is_ok());
    assert!(range.shift_to(-2).is_err());
}

#[test]
fn test_quote_none_for_unbookable_zones() {
    let range = DateRange::default_stay(date(2026, 1, 1));
    assert!(BookingQuote::for_zone(&zone("1f-industry"), &range).is_none());
    assert!(BookingQuote::for_zone(&zone("1f-digital"), &range).is_none());
    assert!(BookingQuote::for_zone(&zone("5f-conference"), &range).is_none());
}

// -------------------------------------------------------------------------
// Booking flow
// -------------------------------------------------------------------------

#[test]
fn test_request_without_zone_is_noop() {
    let mut flow = BookingFlow::default();
    let range = DateRange::default_stay(date(2026, 1, 1));
    assert_eq!(flow.request(None, &range), RequestOutcome::NoZone);
    assert_eq!(flow, BookingFlow::default());
}

#[test]
fn test_request_for_booked_zone_is_noop() {
    let mut flow = BookingFlow::default();
    let range = DateRange::default_stay(date(2026, 1, 1));
    let outcome = flow.request(Some(&zone("2f-independent-1")), &range);
    assert_eq!(outcome, RequestOutcome::NotBookable);
    assert!(!flow.is_in_progress());
    assert!(!flow.is_success());
}

#[test]
fn test_request_for_zero_price_zone_is_noop() {
    let mut flow = BookingFlow::default();
    let range = DateRange::default_stay(date(2026, 1, 1));
    let mut office = zone("5f-open-office");
    office.status = crate::catalog::ZoneStatus::Available;
    assert_eq!(flow.request(Some(&office), &range), RequestOutcome::NotBookable);
    assert_eq!(flow, BookingFlow::default());
}

#[test]
fn test_flow_runs_submit_then_success_then_idle() {
    let mut flow = BookingFlow::default();
    let range = DateRange::default_stay(date(2026, 1, 1));
    assert_eq!(flow.request(Some(&zone("3f-pet")), &range), RequestOutcome::Started);
    assert!(flow.is_in_progress());
    assert_eq!(flow.zone_id(), Some("3f-pet"));

    assert!(flow.advance(BOOKING_SUBMIT_DELAY / 2).is_none());
    assert!(flow.is_in_progress());

    let done = flow.advance(BOOKING_SUBMIT_DELAY / 2).unwrap();
    assert_eq!(done.zone_id, "3f-pet");
    assert_eq!(done.quote.total, 1600 * 8);
    assert!(flow.is_success());
    assert!(!flow.is_in_progress());

    assert!(flow.advance(BOOKING_SUCCESS_HOLD - Duration::from_millis(1)).is_none());
    assert!(flow.is_success());
    flow.advance(Duration::from_millis(1));
    assert_eq!(*flow.phase(), BookingPhase::Idle);
}

#[test]
fn test_second_request_while_busy_is_ignored() {
    let mut flow = BookingFlow::default();
    let range = DateRange::default_stay(date(2026, 1, 1));
    flow.request(Some(&zone("3f-pet")), &range);
    let before = flow.clone();
    assert_eq!(flow.request(Some(&zone("6f-terrace")), &range), RequestOutcome::Busy);
    assert_eq!(flow, before);
}

#[test]
fn test_request_while_success_notice_shows_is_ignored() {
    let mut flow = BookingFlow::default();
    let range = DateRange::default_stay(date(2026, 1, 1));
    flow.request(Some(&zone("3f-pet")), &range);
    flow.advance(BOOKING_SUBMIT_DELAY);
    assert!(flow.is_success());

    let before = flow.clone();
    assert_eq!(flow.request(Some(&zone("6f-terrace")), &range), RequestOutcome::Busy);
    assert_eq!(flow, before);
    assert_eq!(flow.zone_id(), Some("3f-pet"));
}

#[test]
fn test_idle_flow_advance_is_noop() {
    let mut flow = BookingFlow::default();
    assert!(flow.advance(Duration::from_secs(10)).is_none());
    assert_eq!(flow, BookingFlow::default());
}
