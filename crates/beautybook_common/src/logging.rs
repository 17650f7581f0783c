// --- File: crates/beautybook_common/src/logging.rs ---
//! Logging utilities for BeautyBook.
//!
//! Every crate logs through `tracing` macros; this module only owns the
//! subscriber setup and the log-and-continue helper used at call sites where
//! remote failures are swallowed.

use std::str::FromStr;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO level.
///
/// # Examples
///
/// ```
/// use beautybook_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` is still honoured; the level given here is added as a
/// directive for the `beautybook` crates. Calling this twice is harmless.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env();
    let filter = match format!("beautybook={}", level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Initialize the subscriber from a textual level such as `"debug"`.
///
/// Unknown levels fall back to INFO.
pub fn init_from_str(level: &str) {
    match Level::from_str(level) {
        Ok(level) => init_with_level(level),
        Err(_) => {
            init();
            warn!("Unknown log level '{}', using INFO", level);
        }
    }
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}
