// --- File: crates/beautybook_dashboard/src/view.rs ---
//! The root screen: role tabs, the two dashboards and the booking flow.

use crate::cards::{ClientDashboard, MasterDashboard};
use crate::error::DashboardError;
use beautybook_booking::{BookingPicker, BookingRequest, DateRule};
use beautybook_common::log_error;
use beautybook_common::models::{Booking, CreateBookingResponse, NewBooking, UserRole};
use beautybook_common::services::BookingsApi;
use beautybook_config::CatalogConfig;
use beautybook_platform::{HapticFeedback, Platform};
use std::sync::Arc;
use tracing::info;

/// A picker opened for one catalog service.
pub struct ActiveBooking {
    pub master_id: i64,
    pub service_id: i64,
    pub duration_minutes: u32,
    pub picker: BookingPicker,
}

pub struct RootView {
    api: Arc<dyn BookingsApi>,
    platform: Arc<dyn Platform>,
    catalog: CatalogConfig,
    rule: DateRule,
    role: UserRole,
    bookings: Vec<Booking>,
    active: Option<ActiveBooking>,
}

impl RootView {
    pub fn new(
        api: Arc<dyn BookingsApi>,
        platform: Arc<dyn Platform>,
        catalog: CatalogConfig,
        rule: DateRule,
    ) -> Self {
        Self {
            api,
            platform,
            catalog,
            rule,
            role: UserRole::Client,
            bookings: Vec::new(),
            active: None,
        }
    }

    /// Signals readiness to the host and loads the bookings.
    pub async fn open(&mut self) -> bool {
        self.platform.init_app();
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> bool {
        match self.api.list_bookings().await {
            Ok(bookings) => {
                self.bookings = bookings;
                true
            }
            Err(e) => {
                log_error(e, "Failed to load bookings");
                false
            }
        }
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn switch_role(&mut self, role: UserRole) {
        if self.role == role {
            return;
        }
        self.platform.haptic(HapticFeedback::Light);
        self.role = role;
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn client_dashboard(&self) -> ClientDashboard {
        ClientDashboard::build(&self.bookings, &self.catalog)
    }

    pub fn master_dashboard(&self) -> MasterDashboard {
        MasterDashboard::build(&self.bookings, &self.catalog)
    }

    pub fn active_booking(&self) -> Option<&ActiveBooking> {
        self.active.as_ref()
    }

    pub fn picker_mut(&mut self) -> Option<&mut BookingPicker> {
        self.active.as_mut().map(|active| &mut active.picker)
    }

    /// Opens the picker for a catalog service.
    pub fn start_booking(&mut self, master_id: i64, service_id: i64) -> Result<(), DashboardError> {
        let (master, service) = self
            .catalog
            .find(master_id, service_id)
            .ok_or(DashboardError::UnknownService {
                master_id,
                service_id,
            })?;

        let request = BookingRequest {
            master_name: master.name.clone(),
            service_name: service.name.clone(),
            price: service.price,
        };
        let duration_minutes = service.duration_minutes;

        self.platform.haptic(HapticFeedback::Medium);
        self.active = Some(ActiveBooking {
            master_id,
            service_id,
            duration_minutes,
            picker: BookingPicker::new(request, self.rule.clone(), self.platform.clone()),
        });
        Ok(())
    }

    /// Sends the picked slot to the backend and closes the picker.
    ///
    /// When the backend rejects the booking the picker stays open with its
    /// selection intact.
    pub async fn confirm_booking(
        &mut self,
        notes: Option<String>,
    ) -> Result<CreateBookingResponse, DashboardError> {
        let active = self.active.as_mut().ok_or(DashboardError::NoActiveBooking)?;
        let selection = active.picker.confirm()?;

        let booking = NewBooking {
            master_id: active.master_id,
            service_id: active.service_id,
            date: selection.date,
            time: selection.time,
            duration: active.duration_minutes,
            notes: notes.filter(|n| !n.trim().is_empty()),
        };

        match self.api.create_booking(booking).await {
            Ok(created) => {
                info!(booking_id = created.booking_id, "Booking created");
                self.active = None;
                self.refresh().await;
                Ok(created)
            }
            Err(e) => {
                log_error(&e, "Failed to create booking");
                self.platform.haptic(HapticFeedback::Error);
                Err(e.into())
            }
        }
    }

    /// Closes the picker without booking.
    pub fn cancel_booking(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.picker.cancel();
        }
    }

    /// Cancels one of the user's existing appointments.
    pub async fn cancel_appointment(&mut self, booking_id: i64) -> Result<(), DashboardError> {
        match self.api.cancel_booking(booking_id).await {
            Ok(_) => {
                info!(booking_id, "Booking cancelled");
                self.platform.haptic(HapticFeedback::Warning);
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                log_error(&e, "Failed to cancel booking");
                self.platform.haptic(HapticFeedback::Error);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beautybook_booking::{BookingError, Clock};
    use beautybook_common::models::BookingStatus;
    use beautybook_common::services::mock::MockBookingsApi;
    use beautybook_config::{MasterConfig, ServiceConfig};
    use beautybook_platform::{SignalRecorder, UiSignal};
    use chrono::{NaiveDate, NaiveTime, Weekday};

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn at(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn catalog() -> CatalogConfig {
        CatalogConfig {
            masters: vec![MasterConfig {
                id: 1,
                name: "Анна Сергеева".to_string(),
                services: vec![ServiceConfig {
                    id: 2,
                    name: "Маникюр + гель-лак".to_string(),
                    duration_minutes: 90,
                    price: 2500.0,
                    description: None,
                }],
            }],
        }
    }

    fn existing() -> Booking {
        Booking {
            id: 7,
            date: day(11, 15),
            time: at(14),
            end_time: at(15),
            status: BookingStatus::Confirmed,
            master_name: "Анна Сергеева".to_string(),
            service_name: "Маникюр + гель-лак".to_string(),
            price: 2500.0,
            notes: None,
        }
    }

    async fn opened() -> (RootView, Arc<MockBookingsApi>, Arc<SignalRecorder>) {
        let api = Arc::new(MockBookingsApi::new(vec![existing()]));
        let recorder = Arc::new(SignalRecorder::default());
        let rule = DateRule::new(vec![Weekday::Sun], Clock::Fixed(day(11, 12)));
        let mut view = RootView::new(api.clone(), recorder.clone(), catalog(), rule);
        assert!(view.open().await);
        (view, api, recorder)
    }

    #[tokio::test]
    async fn test_open_signals_ready_and_loads() {
        let (view, _, recorder) = opened().await;
        assert_eq!(recorder.signals()[0], UiSignal::Ready);
        assert_eq!(view.bookings().len(), 1);
        assert_eq!(view.client_dashboard().appointments[0].status_label, "✅ Подтверждено");
    }

    #[tokio::test]
    async fn test_switch_role_pulses_once() {
        let (mut view, _, recorder) = opened().await;
        view.switch_role(UserRole::Master);
        view.switch_role(UserRole::Master);
        assert_eq!(view.role(), UserRole::Master);
        assert_eq!(recorder.haptics(), vec![HapticFeedback::Light]);
        assert_eq!(view.master_dashboard().bookings_count, 1);
    }

    #[tokio::test]
    async fn test_booking_flow_creates_with_catalog_ids() {
        let (mut view, api, recorder) = opened().await;
        view.start_booking(1, 2).unwrap();
        assert_eq!(recorder.last_haptic(), Some(HapticFeedback::Medium));

        let picker = view.picker_mut().unwrap();
        picker.select_date(day(11, 18)).unwrap();
        picker.select_time(at(10)).unwrap();

        let created = view.confirm_booking(Some("  ".to_string())).await.unwrap();
        assert!(created.success);
        assert!(view.active_booking().is_none());

        let sent = api.created();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].master_id, 1);
        assert_eq!(sent[0].service_id, 2);
        assert_eq!(sent[0].duration, 90);
        assert_eq!(sent[0].date, day(11, 18));
        assert_eq!(sent[0].time, at(10));
        assert_eq!(sent[0].notes, None);
    }

    #[tokio::test]
    async fn test_confirm_requires_complete_selection() {
        let (mut view, api, _) = opened().await;
        assert!(matches!(
            view.confirm_booking(None).await,
            Err(DashboardError::NoActiveBooking)
        ));

        view.start_booking(1, 2).unwrap();
        view.picker_mut().unwrap().select_date(day(11, 18)).unwrap();
        assert!(matches!(
            view.confirm_booking(None).await,
            Err(DashboardError::Picker(BookingError::IncompleteSelection))
        ));
        assert!(api.created().is_empty());
        assert!(view.active_booking().is_some());
    }

    #[tokio::test]
    async fn test_rejected_booking_keeps_picker_open() {
        let (mut view, api, recorder) = opened().await;
        view.start_booking(1, 2).unwrap();
        let picker = view.picker_mut().unwrap();
        picker.select_date(day(11, 18)).unwrap();
        picker.select_time(at(10)).unwrap();

        api.set_failing(true);
        assert!(matches!(
            view.confirm_booking(None).await,
            Err(DashboardError::Remote(_))
        ));
        assert!(view.active_booking().is_some());
        assert_eq!(recorder.last_haptic(), Some(HapticFeedback::Error));
    }

    #[tokio::test]
    async fn test_cancel_closes_picker_with_light_pulse() {
        let (mut view, _, recorder) = opened().await;
        view.start_booking(1, 2).unwrap();
        view.cancel_booking();
        assert!(view.active_booking().is_none());
        assert_eq!(recorder.last_haptic(), Some(HapticFeedback::Light));

        assert!(matches!(
            view.start_booking(9, 9),
            Err(DashboardError::UnknownService { master_id: 9, service_id: 9 })
        ));
    }

    #[tokio::test]
    async fn test_cancel_appointment() {
        let (mut view, api, _) = opened().await;
        view.cancel_appointment(7).await.unwrap();
        assert_eq!(api.cancelled(), vec![7]);
        assert_eq!(view.bookings()[0].status, BookingStatus::Cancelled);
        assert_eq!(view.master_dashboard().bookings_count, 0);

        assert!(view.cancel_appointment(99).await.is_err());
    }
}
