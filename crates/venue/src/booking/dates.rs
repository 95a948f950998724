use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use thiserror::Error;

use crate::catalog::Zone;
use crate::config::DEFAULT_STAY_DAYS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("end date {to} is before start date {from}")]
    EndBeforeStart { from: NaiveDate, to: NaiveDate },
    #[error("start date {from} is before today ({today})")]
    StartInPast { from: NaiveDate, today: NaiveDate },
}

/// Inclusive stay range; always `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, DateRangeError> {
        if to < from {
            return Err(DateRangeError::EndBeforeStart { from, to });
        }
        Ok(Self { from, to })
    }

    /// Like [`DateRange::new`], additionally refusing a start before `today`.
    pub fn new_from_today(
        from: NaiveDate,
        to: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, DateRangeError> {
        if from < today {
            return Err(DateRangeError::StartInPast { from, today });
        }
        Self::new(from, to)
    }

    /// `today ..= today + DEFAULT_STAY_DAYS`.
    pub fn default_stay(today: NaiveDate) -> Self {
        Self {
            from: today,
            to: today + ChronoDuration::days(DEFAULT_STAY_DAYS),
        }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Number of booked days, counting both endpoints.
    pub fn days(&self) -> u32 {
        let span = (self.to - self.from).num_days();
        // from <= to is an invariant, so span is never negative
        span.unsigned_abs() as u32 + 1
    }

    /// Move the start by `delta` days. The end follows when the start would
    /// pass it. Fails if the new start is before `today`.
    pub fn shift_from(&self, delta: i64, today: NaiveDate) -> Result<Self, DateRangeError> {
        let from = self.from + ChronoDuration::days(delta);
        let to = self.to.max(from);
        Self::new_from_today(from, to, today)
    }

    /// Move the end by `delta` days; it may not go before the start.
    pub fn shift_to(&self, delta: i64) -> Result<Self, DateRangeError> {
        Self::new(self.from, self.to + ChronoDuration::days(delta))
    }
}

/// Price breakdown for a zone over a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingQuote {
    pub days: u32,
    pub daily_rate: u32,
    pub total: u64,
}

impl BookingQuote {
    pub fn new(daily_rate: u32, range: &DateRange) -> Self {
        let days = range.days();
        Self {
            days,
            daily_rate,
            total: u64::from(daily_rate) * u64::from(days),
        }
    }

    /// Quote for a bookable zone; `None` for zones that cannot be reserved.
    pub fn for_zone(zone: &Zone, range: &DateRange) -> Option<Self> {
        zone.is_bookable().then(|| Self::new(zone.price, range))
    }
}

/// Today's date from the local clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
