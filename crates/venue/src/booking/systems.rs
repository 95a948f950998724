use bevy::prelude::*;

use crate::selection::Selection;
use crate::VenueSet;

use super::{
    BookingCalendar, BookingCompleted, BookingFlow, BookingPhase, BookingRequest, RequestOutcome,
};

/// Start a simulated submission for each request against the current selection.
pub fn handle_booking_requests(
    mut requests: EventReader<BookingRequest>,
    selection: Res<Selection>,
    calendar: Res<BookingCalendar>,
    mut flow: ResMut<BookingFlow>,
) {
    for _ in requests.read() {
        // request() only mutates on Started, so ignored requests leave the
        // flow unchanged for change detection.
        let outcome = flow
            .bypass_change_detection()
            .request(selection.zone(), &calendar.range);
        if outcome == RequestOutcome::Started {
            flow.set_changed();
            info!(
                "Booking submitted for zone {} ({} days)",
                flow.zone_id().unwrap_or_default(),
                calendar.range.days()
            );
        } else {
            debug!("Booking request ignored: {:?}", outcome);
        }
    }
}

/// Tick the submission / success timers and emit completion events.
pub fn advance_booking_flow(
    time: Res<Time>,
    mut flow: ResMut<BookingFlow>,
    mut completed: EventWriter<BookingCompleted>,
) {
    if *flow.phase() == BookingPhase::Idle {
        return;
    }
    if let Some(done) = flow.advance(time.delta()) {
        info!(
            "Booking for zone {} confirmed: {} days, total {}",
            done.zone_id, done.quote.days, done.quote.total
        );
        completed.send(done);
    }
}

pub struct BookingPlugin;

impl Plugin for BookingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BookingCalendar>()
            .init_resource::<BookingFlow>()
            .add_event::<BookingRequest>()
            .add_event::<BookingCompleted>()
            .add_systems(
                Update,
                (handle_booking_requests, advance_booking_flow)
                    .chain()
                    .in_set(VenueSet::Booking),
            );
    }
}
