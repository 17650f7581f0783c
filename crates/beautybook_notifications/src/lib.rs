// --- File: crates/beautybook_notifications/src/lib.rs ---
//! Notification bell and popover.
//!
//! [`NotificationPanel`] keeps the latest notifications and the unread count.
//! [`NotificationPanel::mount`] starts the periodic refresh; the returned
//! [`PanelHandle`] stops it when unmounted or dropped.
//!
//! Remote failures are logged and leave the previous data in place.

pub mod item;
pub mod panel;

pub use item::{badge_label, NotificationItem, NotificationKind};
pub use panel::{NotificationPanel, PanelHandle, PanelView, DEFAULT_POLL_INTERVAL};
