// --- File: crates/services/beautybook_app/src/error.rs ---
use beautybook_booking::BookingError;
use beautybook_common::BeautybookError;
use beautybook_dashboard::DashboardError;
use beautybook_platform::PlatformError;
use beautybook_profile::ProfileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] BeautybookError),
    #[error("Invalid init data: {0}")]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("{0}")]
    NotFound(String),
}
