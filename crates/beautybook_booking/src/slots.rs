// --- File: crates/beautybook_booking/src/slots.rs ---
use chrono::{NaiveTime, Timelike};

/// A bookable start time and whether it can still be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub time: NaiveTime,
    pub available: bool,
}

impl TimeSlot {
    pub fn label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

const FIRST_HOUR: u32 = 9;
const LAST_HOUR: u32 = 19;
const TAKEN_HOURS: [u32; 3] = [11, 13, 17];

/// Hourly slots from 09:00 to 19:00.
///
/// Availability is fixed and does not depend on the chosen date.
pub fn default_slots() -> Vec<TimeSlot> {
    (FIRST_HOUR..=LAST_HOUR)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .map(|time| TimeSlot {
            time,
            available: !TAKEN_HOURS.contains(&time.hour()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slots() {
        let slots = default_slots();
        assert_eq!(slots.len(), 11);
        assert_eq!(slots[0].label(), "09:00");
        assert_eq!(slots[10].label(), "19:00");

        let taken: Vec<String> = slots
            .iter()
            .filter(|slot| !slot.available)
            .map(TimeSlot::label)
            .collect();
        assert_eq!(taken, vec!["11:00", "13:00", "17:00"]);
    }
}
