// --- File: crates/beautybook_config/src/lib.rs ---
use config::{Config, ConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod env_vars;
pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources are layered in this order, later ones winning:
/// `config/default.*`, `config/{RUN_ENV}.*` and `BEAUTYBOOK__*` environment
/// variables. The directory can be moved with `CONFIG_DIR`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    load_config_from(&config_dir, &run_env)
}

/// Loads the configuration from an explicit directory and run environment.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<AppConfig, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);
    debug!(
        "loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(&env_vars::get_config_prefix())
                .separator(env_vars::CONFIG_SEPARATOR),
        );

    let config: AppConfig = builder.build()?.try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

/// Parses a TOML document into an `AppConfig` without touching the environment.
pub fn parse_config_str(toml: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let endpoints = [
        ("api.bookings_url", &config.api.bookings_url),
        ("api.notifications_url", &config.api.notifications_url),
        ("api.profile_url", &config.api.profile_url),
    ];
    for (path, url) in endpoints {
        if url.trim().is_empty() {
            return Err(ConfigError::Message(format!(
                "{path} must not be empty (set it in the config file or {})",
                env_vars::config_path_to_env_var(path)
            )));
        }
    }
    if config.notifications.poll_interval_secs == 0 {
        return Err(ConfigError::Message(
            "notifications.poll_interval_secs must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// `DOTENV_OVERRIDE` selects a different file; otherwise `.env` in the
/// working directory is used. A missing file is not an error.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::fs;
    use std::sync::Mutex;

    // Tests that read or write process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const MINIMAL: &str = r#"
        [api]
        bookings_url = "https://functions.example.com/bookings"
        notifications_url = "https://functions.example.com/notifications"
        profile_url = "https://functions.example.com/profile"
    "#;

    #[test]
    fn test_defaults_applied_to_minimal_config() {
        let config = parse_config_str(MINIMAL).unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.notifications.poll_interval_secs, 30);
        assert_eq!(config.booking.closed_weekdays, vec![Weekday::Sun]);
        assert_eq!(config.booking.timezone, "Europe/Moscow");
        assert_eq!(config.logging.level, "info");
        assert!(config.catalog.masters.is_empty());
    }

    #[test]
    fn test_catalog_lookup() {
        let toml = format!(
            r#"{MINIMAL}
            [[catalog.masters]]
            id = 7
            name = "Анна Сергеева"

            [[catalog.masters.services]]
            id = 2
            name = "Маникюр + гель-лак"
            duration_minutes = 90
            price = 2500.0
            "#
        );
        let config = parse_config_str(&toml).unwrap();
        let (master, service) = config.catalog.find(7, 2).unwrap();
        assert_eq!(master.name, "Анна Сергеева");
        assert_eq!(service.duration_minutes, 90);
        assert!(config.catalog.find(7, 3).is_none());
        assert!(config.catalog.find(8, 2).is_none());
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let toml = MINIMAL.replace("https://functions.example.com/profile", " ");
        let err = parse_config_str(&toml).unwrap_err();
        assert!(err.to_string().contains("api.profile_url"));
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let toml = format!("{MINIMAL}\n[notifications]\npoll_interval_secs = 0\n");
        assert!(parse_config_str(&toml).is_err());
    }

    #[test]
    fn test_missing_api_section_rejected() {
        assert!(parse_config_str("[logging]\nlevel = \"debug\"\n").is_err());
    }

    fn write_config_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        dir
    }

    #[test]
    fn test_run_env_file_overrides_default_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        let default = format!("{MINIMAL}\n[logging]\nlevel = \"info\"\n");
        let dir = write_config_dir(&[
            ("default.toml", default.as_str()),
            (
                "staging.toml",
                "[api]\nbookings_url = \"https://staging.example.com/bookings\"\n\n[logging]\nlevel = \"debug\"\n",
            ),
        ]);

        let config = load_config_from(dir.path(), "staging").unwrap();
        assert_eq!(config.api.bookings_url, "https://staging.example.com/bookings");
        assert_eq!(config.api.profile_url, "https://functions.example.com/profile");
        assert_eq!(config.logging.level, "debug");

        // An unknown run environment falls back to the default file alone.
        let config = load_config_from(dir.path(), "production").unwrap();
        assert_eq!(config.api.bookings_url, "https://functions.example.com/bookings");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_vars_override_both_files() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        let dir = write_config_dir(&[
            ("default.toml", MINIMAL),
            ("debug.toml", "[notifications]\npoll_interval_secs = 15\n"),
        ]);

        let bookings_var = env_vars::config_path_to_env_var("api.bookings_url");
        let poll_var = env_vars::config_path_to_env_var("notifications.poll_interval_secs");
        assert_eq!(poll_var, "BEAUTYBOOK__NOTIFICATIONS__POLL_INTERVAL_SECS");

        let before = load_config_from(dir.path(), "debug").unwrap();
        assert_eq!(before.notifications.poll_interval_secs, 15);

        env::set_var(&bookings_var, "http://override/b");
        env::set_var(&poll_var, "7");
        let result = load_config_from(dir.path(), "debug");
        env::remove_var(&bookings_var);
        env::remove_var(&poll_var);

        let config = result.unwrap();
        assert_eq!(config.api.bookings_url, "http://override/b");
        assert_eq!(config.notifications.poll_interval_secs, 7);
        assert_eq!(config.api.profile_url, "https://functions.example.com/profile");
    }
}
