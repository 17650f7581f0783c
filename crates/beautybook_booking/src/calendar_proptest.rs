// --- File: crates/beautybook_booking/src/calendar_proptest.rs ---
#[cfg(test)]
mod tests {
    use crate::calendar::{Clock, DateRule};
    use crate::picker::{BookingPicker, BookingRequest};
    use crate::slots::default_slots;
    use beautybook_platform::SignalRecorder;
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn base_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 12).unwrap()
    }

    fn picker(today: NaiveDate) -> BookingPicker {
        BookingPicker::new(
            BookingRequest {
                master_name: "Анна".to_string(),
                service_name: "Маникюр".to_string(),
                price: 1500.0,
            },
            DateRule::new(vec![Weekday::Sun], Clock::Fixed(today)),
            Arc::new(SignalRecorder::default()),
        )
    }

    proptest! {
        // Past days and Sundays are rejected, everything else accepted
        #[test]
        fn test_date_rule(today_shift in 0..365i64, offset in -400..400i64) {
            let today = base_today() + Duration::days(today_shift);
            let date = today + Duration::days(offset);
            let mut picker = picker(today);

            let expected = offset >= 0 && date.weekday() != Weekday::Sun;
            prop_assert_eq!(picker.select_date(date).is_ok(), expected);
            prop_assert_eq!(picker.is_date_disabled(date), !expected);
            if !expected {
                prop_assert_eq!(picker.selected_date(), None);
            }
        }

        // Picking any valid date drops the earlier time
        #[test]
        fn test_date_change_clears_time(first in 0..60i64, second in 0..60i64, slot in 0..11usize) {
            let today = base_today();
            let mut picker = picker(today);
            let first = today + Duration::days(first);
            let second = today + Duration::days(second);
            prop_assume!(first.weekday() != Weekday::Sun && second.weekday() != Weekday::Sun);

            picker.select_date(first).unwrap();
            let _ = picker.select_time(default_slots()[slot].time);
            picker.select_date(second).unwrap();
            prop_assert_eq!(picker.selected_time(), None);
            prop_assert!(!picker.can_confirm());
        }

        // Confirmation is possible exactly when both values are valid
        #[test]
        fn test_can_confirm_iff_complete(offset in 0..60i64, slot in 0..11usize, pick_time in any::<bool>()) {
            let today = base_today();
            let mut picker = picker(today);
            let date = today + Duration::days(offset);
            prop_assume!(date.weekday() != Weekday::Sun);

            picker.select_date(date).unwrap();
            let candidate = default_slots()[slot];
            let accepted = pick_time && picker.select_time(candidate.time).is_ok();
            prop_assert_eq!(accepted, pick_time && candidate.available);
            prop_assert_eq!(picker.can_confirm(), accepted);
        }
    }
}
