// --- File: crates/beautybook_notifications/src/item.rs ---
use beautybook_common::display::format_short_datetime;
use beautybook_common::models::Notification;

pub const CREATED_TYPE: &str = "booking_created";
pub const CANCELLED_TYPE: &str = "booking_cancelled";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Created,
    Cancelled,
    Info,
}

impl NotificationKind {
    pub fn from_type(kind: &str) -> Self {
        match kind {
            CREATED_TYPE => NotificationKind::Created,
            CANCELLED_TYPE => NotificationKind::Cancelled,
            _ => NotificationKind::Info,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Created => "✅",
            NotificationKind::Cancelled => "❌",
            NotificationKind::Info => "ℹ️",
        }
    }
}

/// A notification as the popover lists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItem {
    pub id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    /// `5 нояб., 10:15`, or the raw timestamp when it cannot be parsed
    pub received: String,
}

impl From<&Notification> for NotificationItem {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            kind: NotificationKind::from_type(&notification.kind),
            title: notification.title.clone(),
            message: notification.message.clone(),
            is_read: notification.is_read,
            received: notification
                .created_at_local()
                .map(format_short_datetime)
                .unwrap_or_else(|| notification.created_at.clone()),
        }
    }
}

/// Bell badge text: nothing at zero, the count up to nine, then `9+`.
pub fn badge_label(unread_count: u32) -> Option<String> {
    match unread_count {
        0 => None,
        1..=9 => Some(unread_count.to_string()),
        _ => Some("9+".to_string()),
    }
}
