// --- File: crates/beautybook_common/src/models.rs ---

// Records exchanged with the bookings, notifications and profile functions.
// The wire format is camelCase JSON; dates are `YYYY-MM-DD` and times `HH:MM`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serde adapter for `HH:MM` wall-clock times.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hhmm(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parses `HH:MM`, also accepting a trailing `:SS` as sent by some backends.
pub fn parse_hhmm(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(raw, hhmm::FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
}

/// Parses the timestamps the backend emits: RFC 3339 or a naive ISO datetime.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::from_str(raw))
        .ok()
}

// --- Identity ---

/// The user identity forwarded to the backend in `X-Telegram-User`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelegramUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

// --- Bookings ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Badge text shown next to an appointment.
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "✅ Подтверждено",
            BookingStatus::Pending => "⏳ Ожидает",
            BookingStatus::Cancelled => "❌ Отменено",
            BookingStatus::Completed => "✔️ Завершено",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        };
        f.write_str(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub status: BookingStatus,
    pub master_name: String,
    pub service_name: String,
    pub price: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingsPage {
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotsPage {
    pub slots: Vec<String>,
}

/// A booking to be created for the current user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub master_id: i64,
    pub service_id: i64,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// Length in minutes
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    pub success: bool,
    pub booking_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

// --- Notifications ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
}

impl Notification {
    pub fn created_at_local(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsPage {
    pub notifications: Vec<Notification>,
    pub unread_count: u32,
}

// --- Profile ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Client,
    Master,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub telegram_id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    pub role: UserRole,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub bookings_count: u32,
    pub created_at: String,
}

impl UserProfile {
    pub fn created_at_local(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }
}

/// The editable subset of a profile. Only the first name is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_from_backend_json() {
        let raw = json!({
            "id": 12,
            "date": "2025-11-15",
            "time": "14:00",
            "endTime": "15:30",
            "status": "confirmed",
            "masterName": "Анна",
            "serviceName": "Маникюр + гель-лак",
            "price": 2500.0,
            "notes": null
        });
        let booking: Booking = serde_json::from_value(raw).unwrap();
        assert_eq!(booking.date, NaiveDate::from_ymd_opt(2025, 11, 15).unwrap());
        assert_eq!(booking.time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(booking.end_time, NaiveTime::from_hms_opt(15, 30, 0).unwrap());
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.notes, None);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let raw = json!({
            "id": 1, "date": "2025-11-15", "time": "14:00", "endTime": "15:00",
            "status": "archived", "masterName": "A", "serviceName": "B", "price": 1.0
        });
        assert!(serde_json::from_value::<Booking>(raw).is_err());
    }

    #[test]
    fn test_new_booking_wire_shape() {
        let booking = NewBooking {
            master_id: 3,
            service_id: 9,
            date: NaiveDate::from_ymd_opt(2025, 11, 18).unwrap(),
            time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            duration: 60,
            notes: None,
        };
        assert_eq!(
            serde_json::to_value(&booking).unwrap(),
            json!({
                "masterId": 3,
                "serviceId": 9,
                "date": "2025-11-18",
                "time": "11:00",
                "duration": 60
            })
        );
    }

    #[test]
    fn test_telegram_user_omits_missing_fields() {
        let user = TelegramUser {
            id: 42,
            first_name: "Anna".to_string(),
            last_name: None,
            username: Some("anna".to_string()),
            photo_url: None,
        };
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"id":42,"firstName":"Anna","username":"anna"}"#
        );
    }

    #[test]
    fn test_notification_type_field() {
        let raw = json!({
            "id": 5, "type": "booking_created", "title": "Запись создана",
            "message": "ok", "isRead": false, "createdAt": "2025-11-05T10:15:00.123456"
        });
        let notification: Notification = serde_json::from_value(raw).unwrap();
        assert_eq!(notification.kind, "booking_created");
        let created = notification.created_at_local().unwrap();
        assert_eq!(created.date(), NaiveDate::from_ymd_opt(2025, 11, 5).unwrap());
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2025-11-05T10:15:00+03:00").is_some());
        assert!(parse_timestamp("2025-11-05T10:15:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            first_name: "Anna".to_string(),
            last_name: None,
            phone: Some(String::new()),
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "firstName": "Anna", "phone": "" })
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(BookingStatus::Pending.label(), "⏳ Ожидает");
        assert!(BookingStatus::Confirmed.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
        assert_eq!(BookingStatus::Completed.to_string(), "completed");
    }
}
