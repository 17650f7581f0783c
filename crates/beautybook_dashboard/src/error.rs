// --- File: crates/beautybook_dashboard/src/error.rs ---
use beautybook_booking::BookingError;
use beautybook_common::BeautybookError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Service {service_id} of master {master_id} is not in the catalog")]
    UnknownService { master_id: i64, service_id: i64 },

    #[error("No booking in progress")]
    NoActiveBooking,

    #[error(transparent)]
    Picker(#[from] BookingError),

    #[error(transparent)]
    Remote(#[from] BeautybookError),
}
