// --- File: crates/beautybook_booking/src/error.rs ---
use chrono::{NaiveDate, NaiveTime, Weekday};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("{0} is in the past")]
    PastDate(NaiveDate),
    #[error("No appointments on {weekday} ({date})")]
    ClosedDay { date: NaiveDate, weekday: Weekday },
    #[error("Select a date first")]
    NoDateSelected,
    #[error("{} is not offered", .0.format("%H:%M"))]
    UnknownSlot(NaiveTime),
    #[error("{} is already taken", .0.format("%H:%M"))]
    SlotUnavailable(NaiveTime),
    #[error("Both a date and an available time are required")]
    IncompleteSelection,
    #[error("Unknown time zone: {0}")]
    UnknownTimezone(String),
}
