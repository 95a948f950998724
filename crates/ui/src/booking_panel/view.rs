//! Pure decisions behind the side panel, kept apart from the egui drawing.

use venue::booking::{BookingCalendar, BookingFlow};
use venue::catalog::{Zone, ZoneStatus};
use venue::selection::SelectionRequest;

/// Notice shown instead of the booking controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneNotice {
    Booked,
    Pending,
    Unavailable,
}

impl ZoneNotice {
    pub fn label_key(self) -> &'static str {
        match self {
            ZoneNotice::Booked => "notice.booked",
            ZoneNotice::Pending => "notice.pending",
            ZoneNotice::Unavailable => "notice.unavailable",
        }
    }
}

/// `None` for bookable zones, otherwise why the zone cannot be reserved.
pub fn zone_notice(zone: &Zone) -> Option<ZoneNotice> {
    if zone.is_bookable() {
        return None;
    }
    Some(match zone.status {
        ZoneStatus::Booked => ZoneNotice::Booked,
        ZoneStatus::Pending => ZoneNotice::Pending,
        ZoneStatus::Available | ZoneStatus::Unknown => ZoneNotice::Unavailable,
    })
}

/// What the action area at the bottom of the panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionView {
    Reserve,
    Processing,
    Success,
}

/// Action area for the selected zone; `None` when the zone is not bookable.
///
/// The submission flags are panel-wide, so a running submission or a
/// success notice shows whichever bookable zone is selected.
pub fn action_view(zone: &Zone, flow: &BookingFlow) -> Option<ActionView> {
    if !zone.is_bookable() {
        return None;
    }
    Some(if flow.is_success() {
        ActionView::Success
    } else if flow.is_in_progress() {
        ActionView::Processing
    } else {
        ActionView::Reserve
    })
}

/// A click on one of the date steppers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShift {
    From(i64),
    To(i64),
}

impl DateShift {
    /// Apply to the calendar. Returns `false` and leaves the range alone
    /// when the move would put the start before today or the end before
    /// the start.
    pub fn apply(self, calendar: &mut BookingCalendar) -> bool {
        let moved = match self {
            DateShift::From(delta) => calendar.range.shift_from(delta, calendar.today),
            DateShift::To(delta) => calendar.range.shift_to(delta),
        };
        match moved {
            Ok(range) => {
                calendar.range = range;
                true
            }
            Err(_) => false,
        }
    }
}

/// Everything the user clicked in the panel this frame, applied after
/// drawing finishes.
#[derive(Debug, Default, PartialEq)]
pub struct PanelActions {
    pub selection: Vec<SelectionRequest>,
    pub date_shift: Option<DateShift>,
    pub reserve: bool,
}
