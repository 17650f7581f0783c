// --- File: crates/beautybook_booking/src/calendar.rs ---
//! Which calendar days can be booked.

use crate::error::BookingError;
use beautybook_config::BookingConfig;
use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use std::str::FromStr;

/// Source of "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// The current date in the salon's time zone.
    System(Tz),
    /// A pinned date, for headless hosts and tests.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System(tz) => Utc::now().with_timezone(tz).date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Dates from today onwards, excluding the closed weekdays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRule {
    closed_weekdays: Vec<Weekday>,
    clock: Clock,
}

impl Default for DateRule {
    fn default() -> Self {
        Self {
            closed_weekdays: vec![Weekday::Sun],
            clock: Clock::System(Tz::Europe__Moscow),
        }
    }
}

impl DateRule {
    pub fn new(closed_weekdays: Vec<Weekday>, clock: Clock) -> Self {
        Self {
            closed_weekdays,
            clock,
        }
    }

    pub fn from_config(config: &BookingConfig) -> Result<Self, BookingError> {
        let tz = Tz::from_str(&config.timezone)
            .map_err(|_| BookingError::UnknownTimezone(config.timezone.clone()))?;
        Ok(Self::new(config.closed_weekdays.clone(), Clock::System(tz)))
    }

    /// Same closed days, pinned to `today`.
    pub fn pinned(&self, today: NaiveDate) -> Self {
        Self::new(self.closed_weekdays.clone(), Clock::Fixed(today))
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn closed_weekdays(&self) -> &[Weekday] {
        &self.closed_weekdays
    }

    /// Checks `date` against today as reported by the clock.
    pub fn check(&self, date: NaiveDate) -> Result<(), BookingError> {
        check_against(date, self.today(), &self.closed_weekdays)
    }

    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.check(date).is_ok()
    }

    /// First bookable day on or after `from`, looking one week ahead.
    pub fn next_selectable(&self, from: NaiveDate) -> Option<NaiveDate> {
        let today = self.today();
        let start = from.max(today);
        (0..7)
            .map(|offset| start + Duration::days(offset))
            .find(|date| check_against(*date, today, &self.closed_weekdays).is_ok())
    }
}

/// The date rule with an explicit `today`.
pub fn check_against(
    date: NaiveDate,
    today: NaiveDate,
    closed_weekdays: &[Weekday],
) -> Result<(), BookingError> {
    if date < today {
        return Err(BookingError::PastDate(date));
    }
    let weekday = date.weekday();
    if closed_weekdays.contains(&weekday) {
        return Err(BookingError::ClosedDay { date, weekday });
    }
    Ok(())
}
