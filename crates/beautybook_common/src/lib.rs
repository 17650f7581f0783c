// --- File: crates/beautybook_common/src/lib.rs ---

// Declare modules within this crate
pub mod display; // Russian date and price formatting
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Records exchanged with the backend
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{api_error, config_error, BeautybookError};

// Re-export HTTP utilities for easier access
pub use http::client::create_client;

// Re-export logging utilities for easier access
pub use logging::{init, init_from_str, init_with_level, log_error};
