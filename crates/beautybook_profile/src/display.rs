// --- File: crates/beautybook_profile/src/display.rs ---
use beautybook_common::display::format_long_date;
use beautybook_common::models::UserProfile;

pub const NO_LAST_NAME: &str = "Не указана";
pub const NO_PHONE: &str = "Не указан";

/// Upper-cased first letter of the first name, for the avatar.
pub fn avatar_initial(first_name: &str) -> String {
    first_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

pub fn full_name(profile: &UserProfile) -> String {
    format!("{} {}", profile.first_name, profile.last_name)
        .trim()
        .to_string()
}

pub fn last_name_or_placeholder(profile: &UserProfile) -> &str {
    or_placeholder(&profile.last_name, NO_LAST_NAME)
}

pub fn phone_or_placeholder(profile: &UserProfile) -> &str {
    or_placeholder(&profile.phone, NO_PHONE)
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Registration date as `10 января 2025`.
pub fn registered_on(profile: &UserProfile) -> Option<String> {
    profile
        .created_at_local()
        .map(|at| format_long_date(at.date()))
}

pub fn bookings_label(profile: &UserProfile) -> String {
    format!("Записей: {}", profile.bookings_count)
}
