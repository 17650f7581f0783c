// --- File: crates/beautybook_booking/src/lib.rs ---
// Declare modules within this crate
pub mod calendar;
#[cfg(test)]
mod calendar_proptest;
pub mod error;
pub mod picker;
pub mod slots;

pub use calendar::{Clock, DateRule};
pub use error::BookingError;
pub use picker::{BookingPicker, BookingRequest, BookingSelection, BookingSummary};
pub use slots::{default_slots, TimeSlot};
