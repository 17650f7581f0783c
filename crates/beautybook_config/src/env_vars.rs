// --- File: crates/beautybook_config/src/env_vars.rs ---
//! Names of the environment variables that override configuration keys.
//!
//! `api.bookings_url` is read from `BEAUTYBOOK__API__BOOKINGS_URL`; the
//! prefix can be swapped through `PREFIX` when several deployments share a
//! shell.

use std::env;

pub const DEFAULT_PREFIX: &str = "BEAUTYBOOK";

/// Joins the prefix, sections and key.
pub const CONFIG_SEPARATOR: &str = "__";

pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// `api.bookings_url` → `BEAUTYBOOK__API__BOOKINGS_URL`
pub fn config_path_to_env_var(path: &str) -> String {
    let key = path.split('.').collect::<Vec<_>>().join(CONFIG_SEPARATOR);
    format!("{}{}{}", get_config_prefix(), CONFIG_SEPARATOR, key).to_uppercase()
}
