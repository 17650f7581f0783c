// --- File: crates/services/beautybook_app/src/app_state.rs ---
use crate::error::AppError;
use beautybook_api::ApiClient;
use beautybook_booking::DateRule;
use beautybook_config::AppConfig;
use beautybook_platform::{Platform, TelegramSession};
use std::sync::Arc;
use tracing::{info, warn};

/// Everything the commands share: configuration, the host session and the
/// backend client.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub platform: Arc<dyn Platform>,
    pub client: ApiClient,
    pub rule: DateRule,
}

impl AppState {
    pub fn new(config: AppConfig, init_data: Option<&str>) -> Result<Self, AppError> {
        let session = match init_data {
            Some(raw) => TelegramSession::from_init_data(raw)?,
            None => TelegramSession::anonymous(),
        };
        match session.user() {
            Some(user) => info!(user_id = user.id, "Session user: {}", user.first_name),
            None => warn!("No Telegram user in session; requests carry a null identity"),
        }

        let platform: Arc<dyn Platform> = Arc::new(session);
        let client = ApiClient::new(&config.api, platform.clone())?;
        let rule = DateRule::from_config(&config.booking)?;

        Ok(Self {
            config: Arc::new(config),
            platform,
            client,
            rule,
        })
    }
}
