// --- File: crates/beautybook_common/src/services.rs ---
//! Service abstractions for the backend functions.
//!
//! Screens depend on these traits instead of the HTTP client so that they
//! can be driven by in-memory doubles in tests.

use crate::error::BeautybookError;
use crate::models::{
    Booking, CreateBookingResponse, NewBooking, NotificationsPage, ProfileUpdate,
    SuccessResponse, UserProfile,
};
use chrono::NaiveDate;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Boxed future of a backend call.
pub type ApiFuture<'a, T> = BoxFuture<'a, T, BeautybookError>;

/// Operations on the bookings resource.
pub trait BookingsApi: Send + Sync {
    /// List the current user's bookings, newest first.
    fn list_bookings(&self) -> ApiFuture<'_, Vec<Booking>>;

    /// Free `HH:MM` start times of a master on a date.
    fn available_slots(&self, master_id: i64, date: NaiveDate) -> ApiFuture<'_, Vec<String>>;

    /// Create a booking for the current user.
    fn create_booking(&self, booking: NewBooking) -> ApiFuture<'_, CreateBookingResponse>;

    /// Cancel a booking by id.
    fn cancel_booking(&self, booking_id: i64) -> ApiFuture<'_, SuccessResponse>;
}

/// Operations on the notifications resource.
pub trait NotificationsApi: Send + Sync {
    /// Latest notifications together with the unread count.
    fn list_notifications(&self) -> ApiFuture<'_, NotificationsPage>;

    /// Mark a single notification read.
    fn mark_as_read(&self, notification_id: i64) -> ApiFuture<'_, SuccessResponse>;

    /// Mark every notification of the user read.
    fn mark_all_as_read(&self) -> ApiFuture<'_, SuccessResponse>;
}

/// Operations on the profile resource.
pub trait ProfileApi: Send + Sync {
    fn get_profile(&self) -> ApiFuture<'_, UserProfile>;

    fn update_profile(&self, update: ProfileUpdate) -> ApiFuture<'_, SuccessResponse>;
}

/// In-memory implementations of the service traits.
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use super::*;
    use crate::error::api_error;
    use crate::models::{BookingStatus, Notification};
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use std::sync::{Mutex, MutexGuard};

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn unavailable() -> BeautybookError {
        api_error(503, "Service unavailable")
    }

    /// Mock bookings service.
    #[derive(Default)]
    pub struct MockBookingsApi {
        bookings: Mutex<Vec<Booking>>,
        created: Mutex<Vec<NewBooking>>,
        cancelled: Mutex<Vec<i64>>,
        next_id: AtomicI64,
        failing: AtomicBool,
    }

    impl MockBookingsApi {
        pub fn new(bookings: Vec<Booking>) -> Self {
            let next_id = bookings.iter().map(|b| b.id).max().unwrap_or(0) + 1;
            Self {
                bookings: Mutex::new(bookings),
                next_id: AtomicI64::new(next_id),
                ..Self::default()
            }
        }

        /// Every subsequent call fails with a 503 while set.
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn created(&self) -> Vec<NewBooking> {
            lock(&self.created).clone()
        }

        pub fn cancelled(&self) -> Vec<i64> {
            lock(&self.cancelled).clone()
        }
    }

    impl BookingsApi for MockBookingsApi {
        fn list_bookings(&self) -> ApiFuture<'_, Vec<Booking>> {
            Box::pin(async move {
                if self.failing.load(Ordering::SeqCst) {
                    return Err(unavailable());
                }
                Ok(lock(&self.bookings).clone())
            })
        }

        fn available_slots(&self, _master_id: i64, _date: NaiveDate) -> ApiFuture<'_, Vec<String>> {
            Box::pin(async move {
                if self.failing.load(Ordering::SeqCst) {
                    return Err(unavailable());
                }
                Ok(vec!["09:00".to_string(), "10:00".to_string()])
            })
        }

        fn create_booking(&self, booking: NewBooking) -> ApiFuture<'_, CreateBookingResponse> {
            Box::pin(async move {
                if self.failing.load(Ordering::SeqCst) {
                    return Err(unavailable());
                }
                lock(&self.created).push(booking);
                Ok(CreateBookingResponse {
                    success: true,
                    booking_id: self.next_id.fetch_add(1, Ordering::SeqCst),
                })
            })
        }

        fn cancel_booking(&self, booking_id: i64) -> ApiFuture<'_, SuccessResponse> {
            Box::pin(async move {
                if self.failing.load(Ordering::SeqCst) {
                    return Err(unavailable());
                }
                let mut bookings = lock(&self.bookings);
                let booking = bookings
                    .iter_mut()
                    .find(|b| b.id == booking_id)
                    .ok_or_else(|| api_error(404, "Booking not found"))?;
                booking.status = BookingStatus::Cancelled;
                lock(&self.cancelled).push(booking_id);
                Ok(SuccessResponse { success: true })
            })
        }
    }

    /// Mock notifications service that records the calls it receives.
    #[derive(Default)]
    pub struct MockNotificationsApi {
        notifications: Mutex<Vec<Notification>>,
        calls: Mutex<Vec<String>>,
        failing: AtomicBool,
    }

    impl MockNotificationsApi {
        pub fn new(notifications: Vec<Notification>) -> Self {
            Self {
                notifications: Mutex::new(notifications),
                ..Self::default()
            }
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        /// Calls so far, e.g. `["list", "mark_as_read:3", "list"]`.
        pub fn calls(&self) -> Vec<String> {
            lock(&self.calls).clone()
        }

        pub fn count(&self, call: &str) -> usize {
            lock(&self.calls).iter().filter(|c| c.as_str() == call).count()
        }

        pub fn push(&self, notification: Notification) {
            lock(&self.notifications).insert(0, notification);
        }

        fn record(&self, call: String) -> Result<(), BeautybookError> {
            lock(&self.calls).push(call);
            if self.failing.load(Ordering::SeqCst) {
                return Err(unavailable());
            }
            Ok(())
        }
    }

    impl NotificationsApi for MockNotificationsApi {
        fn list_notifications(&self) -> ApiFuture<'_, NotificationsPage> {
            Box::pin(async move {
                self.record("list".to_string())?;
                let notifications = lock(&self.notifications).clone();
                let unread_count = notifications.iter().filter(|n| !n.is_read).count() as u32;
                Ok(NotificationsPage {
                    notifications,
                    unread_count,
                })
            })
        }

        fn mark_as_read(&self, notification_id: i64) -> ApiFuture<'_, SuccessResponse> {
            Box::pin(async move {
                self.record(format!("mark_as_read:{}", notification_id))?;
                for notification in lock(&self.notifications).iter_mut() {
                    if notification.id == notification_id {
                        notification.is_read = true;
                    }
                }
                Ok(SuccessResponse { success: true })
            })
        }

        fn mark_all_as_read(&self) -> ApiFuture<'_, SuccessResponse> {
            Box::pin(async move {
                self.record("mark_all_as_read".to_string())?;
                for notification in lock(&self.notifications).iter_mut() {
                    notification.is_read = true;
                }
                Ok(SuccessResponse { success: true })
            })
        }
    }

    /// Mock profile service keeping a single profile.
    pub struct MockProfileApi {
        profile: Mutex<UserProfile>,
        updates: Mutex<Vec<ProfileUpdate>>,
        loads: AtomicI64,
        failing_updates: AtomicBool,
    }

    impl MockProfileApi {
        pub fn new(profile: UserProfile) -> Self {
            Self {
                profile: Mutex::new(profile),
                updates: Mutex::new(Vec::new()),
                loads: AtomicI64::new(0),
                failing_updates: AtomicBool::new(false),
            }
        }

        pub fn set_failing_updates(&self, failing: bool) {
            self.failing_updates.store(failing, Ordering::SeqCst);
        }

        pub fn updates(&self) -> Vec<ProfileUpdate> {
            lock(&self.updates).clone()
        }

        pub fn loads(&self) -> i64 {
            self.loads.load(Ordering::SeqCst)
        }
    }

    impl ProfileApi for MockProfileApi {
        fn get_profile(&self) -> ApiFuture<'_, UserProfile> {
            Box::pin(async move {
                self.loads.fetch_add(1, Ordering::SeqCst);
                Ok(lock(&self.profile).clone())
            })
        }

        fn update_profile(&self, update: ProfileUpdate) -> ApiFuture<'_, SuccessResponse> {
            Box::pin(async move {
                lock(&self.updates).push(update.clone());
                if self.failing_updates.load(Ordering::SeqCst) {
                    return Err(unavailable());
                }
                let mut profile = lock(&self.profile);
                profile.first_name = update.first_name;
                if let Some(last_name) = update.last_name {
                    profile.last_name = last_name;
                }
                if let Some(phone) = update.phone {
                    profile.phone = phone;
                }
                Ok(SuccessResponse { success: true })
            })
        }
    }
}
