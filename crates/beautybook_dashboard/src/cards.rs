// --- File: crates/beautybook_dashboard/src/cards.rs ---
//! Render-ready cards built from bookings and the configured catalog.

use beautybook_common::display::{format_day_month, format_price};
use beautybook_common::models::{Booking, BookingStatus};
use beautybook_config::{CatalogConfig, MasterConfig, ServiceConfig};
use chrono::{NaiveDate, NaiveTime};

/// `Анна Сергеева` → `АС`
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentCard {
    pub id: i64,
    pub avatar: String,
    pub master_name: String,
    pub service_name: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub status: BookingStatus,
    pub status_label: &'static str,
    pub can_cancel: bool,
}

impl From<&Booking> for AppointmentCard {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            avatar: initials(&booking.master_name),
            master_name: booking.master_name.clone(),
            service_name: booking.service_name.clone(),
            date: format_day_month(booking.date),
            time: booking.time.format("%H:%M").to_string(),
            price: format_price(booking.price),
            status: booking.status,
            status_label: booking.status.label(),
            can_cancel: booking.status.is_active(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub master_id: i64,
    pub service_id: i64,
    pub name: String,
    pub description: String,
    /// `90 мин`
    pub duration: String,
    pub price: String,
}

impl ServiceCard {
    fn new(master: &MasterConfig, service: &ServiceConfig) -> Self {
        Self {
            master_id: master.id,
            service_id: service.id,
            name: service.name.clone(),
            description: service.description.clone().unwrap_or_default(),
            duration: format!("{} мин", service.duration_minutes),
            price: format_price(service.price),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MasterCard {
    pub master_id: i64,
    pub avatar: String,
    pub name: String,
    pub services: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientDashboard {
    pub appointments: Vec<AppointmentCard>,
    pub masters: Vec<MasterCard>,
}

impl ClientDashboard {
    pub fn build(bookings: &[Booking], catalog: &CatalogConfig) -> Self {
        Self {
            appointments: bookings.iter().map(AppointmentCard::from).collect(),
            masters: catalog
                .masters
                .iter()
                .map(|master| MasterCard {
                    master_id: master.id,
                    avatar: initials(&master.name),
                    name: master.name.clone(),
                    services: master
                        .services
                        .iter()
                        .map(|service| ServiceCard::new(master, service))
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub booking_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub service_name: String,
    pub status_label: &'static str,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MasterDashboard {
    pub bookings_count: usize,
    pub expected_revenue: f64,
    pub services: Vec<ServiceCard>,
    pub schedule: Vec<ScheduleEntry>,
}

impl MasterDashboard {
    /// Cancelled bookings are left out of the schedule and the totals.
    pub fn build(bookings: &[Booking], catalog: &CatalogConfig) -> Self {
        let mut schedule: Vec<ScheduleEntry> = bookings
            .iter()
            .filter(|b| b.status != BookingStatus::Cancelled)
            .map(|b| ScheduleEntry {
                booking_id: b.id,
                date: b.date,
                time: b.time,
                service_name: b.service_name.clone(),
                status_label: b.status.label(),
                price: b.price,
            })
            .collect();
        schedule.sort_by_key(|entry| (entry.date, entry.time));

        Self {
            bookings_count: schedule.len(),
            expected_revenue: schedule.iter().map(|entry| entry.price).sum(),
            services: catalog
                .masters
                .iter()
                .flat_map(|master| {
                    master
                        .services
                        .iter()
                        .map(move |service| ServiceCard::new(master, service))
                })
                .collect(),
            schedule,
        }
    }

    pub fn revenue_label(&self) -> String {
        format_price(self.expected_revenue)
    }
}
