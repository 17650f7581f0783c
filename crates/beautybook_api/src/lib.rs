// --- File: crates/beautybook_api/src/lib.rs ---
//! HTTP client for the BeautyBook backend functions.
//!
//! One [`ApiClient`] talks to the three resources (bookings, notifications,
//! profile) and implements the service traits from
//! `beautybook_common::services`. Every request carries the session identity
//! in the `X-Telegram-User` header. Calls are plain request/response: no
//! retries, no backoff, no idempotency keys.
//!
//! # Example
//!
//! ```rust,no_run
//! use beautybook_api::ApiClient;
//! use beautybook_common::services::BookingsApi;
//! use beautybook_platform::TelegramSession;
//! use std::sync::Arc;
//!
//! async fn list(config: &beautybook_config::ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(config, Arc::new(TelegramSession::anonymous()))?;
//!     for booking in client.list_bookings().await? {
//!         println!("{} {} {}", booking.date, booking.service_name, booking.status);
//!     }
//!     Ok(())
//! }
//! ```

pub mod bookings;
pub mod client;
pub mod notifications;
pub mod profile;

pub use client::{error_message_from_body, ApiClient, ApiEndpoints, TELEGRAM_USER_HEADER};
