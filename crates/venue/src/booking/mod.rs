//! Simulated zone reservation.
//!
//! There is no reservation backend. A request for a bookable zone enters a
//! "submitting" phase for [`BOOKING_SUBMIT_DELAY`], then shows a success
//! notice for [`BOOKING_SUCCESS_HOLD`], then returns to idle. Requests for
//! zones that are booked, pending, or have no daily rate change nothing.
//!
//! The flow is an explicit timer-driven task: [`BookingFlow::advance`] is
//! fed frame deltas and reports when the submission completes, and
//! [`BookingCompleted`] is emitted as the completion signal.

mod dates;
mod systems;

#[cfg(test)]
mod tests;

use std::time::Duration;

use bevy::prelude::*;

use crate::catalog::Zone;
use crate::config::{BOOKING_SUBMIT_DELAY, BOOKING_SUCCESS_HOLD};

pub use dates::{local_today, BookingQuote, DateRange, DateRangeError};
pub use systems::{advance_booking_flow, handle_booking_requests, BookingPlugin};

/// Today's date plus the stay range currently picked in the booking panel.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingCalendar {
    pub today: chrono::NaiveDate,
    pub range: DateRange,
}

impl BookingCalendar {
    pub fn starting(today: chrono::NaiveDate) -> Self {
        Self {
            today,
            range: DateRange::default_stay(today),
        }
    }
}

impl Default for BookingCalendar {
    fn default() -> Self {
        Self::starting(local_today())
    }
}

/// Ask to reserve the currently selected zone for the calendar range.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct BookingRequest;

/// The simulated submission finished.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct BookingCompleted {
    pub zone_id: String,
    pub range: DateRange,
    pub quote: BookingQuote,
}

/// Why a request did not start a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Started,
    NoZone,
    NotBookable,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum BookingPhase {
    #[default]
    Idle,
    Submitting {
        zone_id: String,
        range: DateRange,
        quote: BookingQuote,
        timer: Timer,
    },
    Succeeded {
        zone_id: String,
        timer: Timer,
    },
}

/// Transient booking flags for the side panel.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct BookingFlow {
    phase: BookingPhase,
}

impl BookingFlow {
    pub fn phase(&self) -> &BookingPhase {
        &self.phase
    }

    /// "Processing..." is showing.
    pub fn is_in_progress(&self) -> bool {
        matches!(self.phase, BookingPhase::Submitting { .. })
    }

    /// "Booking Submitted Successfully!" is showing.
    pub fn is_success(&self) -> bool {
        matches!(self.phase, BookingPhase::Succeeded { .. })
    }

    /// Zone the running or just-finished submission is for.
    pub fn zone_id(&self) -> Option<&str> {
        match &self.phase {
            BookingPhase::Idle => None,
            BookingPhase::Submitting { zone_id, .. } | BookingPhase::Succeeded { zone_id, .. } => {
                Some(zone_id)
            }
        }
    }

    /// Start a submission for `zone` over `range`.
    ///
    /// Leaves every flag untouched unless the zone is bookable and no other
    /// submission or success notice is active.
    pub fn request(&mut self, zone: Option<&Zone>, range: &DateRange) -> RequestOutcome {
        let Some(zone) = zone else {
            return RequestOutcome::NoZone;
        };
        let Some(quote) = BookingQuote::for_zone(zone, range) else {
            return RequestOutcome::NotBookable;
        };
        if self.phase != BookingPhase::Idle {
            return RequestOutcome::Busy;
        }
        self.phase = BookingPhase::Submitting {
            zone_id: zone.id.clone(),
            range: *range,
            quote,
            timer: Timer::new(BOOKING_SUBMIT_DELAY, TimerMode::Once),
        };
        RequestOutcome::Started
    }

    /// Advance the phase timers by `dt`. Returns the completion record on the
    /// frame the submission finishes.
    pub fn advance(&mut self, dt: Duration) -> Option<BookingCompleted> {
        match &mut self.phase {
            BookingPhase::Idle => None,
            BookingPhase::Submitting {
                zone_id,
                range,
                quote,
                timer,
            } => {
                timer.tick(dt);
                if !timer.finished() {
                    return None;
                }
                let completed = BookingCompleted {
                    zone_id: zone_id.clone(),
                    range: *range,
                    quote: *quote,
                };
                self.phase = BookingPhase::Succeeded {
                    zone_id: completed.zone_id.clone(),
                    timer: Timer::new(BOOKING_SUCCESS_HOLD, TimerMode::Once),
                };
                Some(completed)
            }
            BookingPhase::Succeeded { timer, .. } => {
                timer.tick(dt);
                if timer.finished() {
                    self.phase = BookingPhase::Idle;
                }
                None
            }
        }
    }
}
