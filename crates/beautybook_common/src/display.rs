// --- File: crates/beautybook_common/src/display.rs ---
//! Russian-language formatting for dates, times and prices.
//!
//! The Mini App is shown to Russian-speaking users only, so the month names
//! are fixed here instead of pulling in a locale database.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const MONTHS_SHORT: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

fn month_index(date: NaiveDate) -> usize {
    date.month0() as usize
}

/// `15 ноября`
pub fn format_day_month(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS_GENITIVE[month_index(date)])
}

/// `15 ноября 2025`
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{} {}", format_day_month(date), date.year())
}

/// `5 нояб., 10:15`
pub fn format_short_datetime(at: NaiveDateTime) -> String {
    let date = at.date();
    format!(
        "{} {}, {}",
        date.day(),
        MONTHS_SHORT[month_index(date)],
        at.format("%H:%M")
    )
}

/// `2500 ₽`, keeping kopecks only when there are any.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0} ₽", price)
    } else {
        format!("{:.2} ₽", price)
    }
}
