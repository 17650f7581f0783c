// --- File: crates/beautybook_config/src/models.rs ---

use chrono::Weekday;
use serde::{Deserialize, Serialize};

// --- Remote API Config ---
// Base URLs of the three backend functions. They differ per deployment, so
// none of them has a default.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub bookings_url: String,
    pub notifications_url: String,
    pub profile_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

// --- Notification Panel Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotificationsConfig {
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_poll_interval_secs() -> u64 {
    30
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

// --- Booking Calendar Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// IANA zone used to decide what "today" is, e.g. "Europe/Moscow"
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Days on which the salon does not take appointments
    #[serde(default = "default_closed_weekdays")]
    pub closed_weekdays: Vec<Weekday>,
}

fn default_timezone() -> String {
    "Europe/Moscow".to_string()
}

fn default_closed_weekdays() -> Vec<Weekday> {
    vec![Weekday::Sun]
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            closed_weekdays: default_closed_weekdays(),
        }
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// --- Service Catalog ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServiceConfig {
    pub id: i64,
    pub name: String,
    pub duration_minutes: u32,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MasterConfig {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub services: Vec<ServiceConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub masters: Vec<MasterConfig>,
}

impl CatalogConfig {
    /// Looks up a master and one of their services by id.
    pub fn find(&self, master_id: i64, service_id: i64) -> Option<(&MasterConfig, &ServiceConfig)> {
        let master = self.masters.iter().find(|m| m.id == master_id)?;
        let service = master.services.iter().find(|s| s.id == service_id)?;
        Some((master, service))
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // API endpoints are mandatory
    pub api: ApiConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}
