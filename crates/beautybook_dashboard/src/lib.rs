// --- File: crates/beautybook_dashboard/src/lib.rs ---
pub mod cards;
pub mod error;
pub mod view;

pub use cards::{
    AppointmentCard, ClientDashboard, MasterCard, MasterDashboard, ScheduleEntry, ServiceCard,
};
pub use error::DashboardError;
pub use view::{ActiveBooking, RootView};
