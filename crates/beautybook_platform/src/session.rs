// --- File: crates/beautybook_platform/src/session.rs ---
use crate::platform::Platform;
use crate::signal::UiSignal;
use beautybook_common::models::TelegramUser;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Malformed init data: {0}")]
    MalformedInitData(#[from] serde_urlencoded::de::Error),
    #[error("Malformed user record in init data: {0}")]
    MalformedUser(#[from] serde_json::Error),
}

/// The `user` object as Telegram puts it into the init data.
#[derive(Debug, Deserialize)]
struct WebAppUser {
    id: i64,
    first_name: String,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
}

impl From<WebAppUser> for TelegramUser {
    fn from(user: WebAppUser) -> Self {
        TelegramUser {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            photo_url: user.photo_url,
        }
    }
}

/// Session of a Mini App opened inside Telegram.
///
/// The init data is trusted as-is; its signature is the backend's concern.
#[derive(Debug, Default)]
pub struct TelegramSession {
    user: Option<TelegramUser>,
    sink: Option<mpsc::UnboundedSender<UiSignal>>,
}

impl TelegramSession {
    /// A session without a signed-in user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_user(user: TelegramUser) -> Self {
        Self {
            user: Some(user),
            sink: None,
        }
    }

    /// Builds a session from the raw `initData` query string.
    ///
    /// Blank init data, or init data without a `user` field, gives an
    /// anonymous session.
    pub fn from_init_data(raw: &str) -> Result<Self, PlatformError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::anonymous());
        }

        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw)?;
        let user = match pairs.into_iter().find(|(key, _)| key == "user") {
            Some((_, json)) => Some(serde_json::from_str::<WebAppUser>(&json)?.into()),
            None => None,
        };

        Ok(Self { user, sink: None })
    }

    /// Forward every signal to the returned receiver as well as the log.
    pub fn with_signal_channel(mut self) -> (Self, mpsc::UnboundedReceiver<UiSignal>) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.sink = Some(tx);
        (self, rx)
    }
}

impl Platform for TelegramSession {
    fn user(&self) -> Option<TelegramUser> {
        self.user.clone()
    }

    fn signal(&self, signal: UiSignal) {
        debug!(?signal, "ui signal");
        if let Some(sink) = &self.sink {
            // A closed channel means the renderer is gone; nothing to do.
            let _ = sink.send(signal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::HapticFeedback;

    const INIT_DATA: &str = "query_id=AAH&user=%7B%22id%22%3A279058397%2C%22first_name%22%3A%22Anna%22%2C%22last_name%22%3A%22%22%2C%22username%22%3A%22anna_nails%22%2C%22language_code%22%3A%22ru%22%7D&auth_date=1700000000&hash=abc";

    #[test]
    fn test_user_from_init_data() {
        let session = TelegramSession::from_init_data(INIT_DATA).unwrap();
        let user = session.user().unwrap();
        assert_eq!(user.id, 279058397);
        assert_eq!(user.first_name, "Anna");
        assert_eq!(user.last_name.as_deref(), Some(""));
        assert_eq!(user.username.as_deref(), Some("anna_nails"));
        assert_eq!(user.photo_url, None);
    }

    #[test]
    fn test_blank_init_data_is_anonymous() {
        assert!(TelegramSession::from_init_data("   ").unwrap().user().is_none());
        assert!(TelegramSession::from_init_data("auth_date=1&hash=x")
            .unwrap()
            .user()
            .is_none());
    }

    #[test]
    fn test_broken_user_json_is_an_error() {
        let err = TelegramSession::from_init_data("user=%7Bnot-json").unwrap_err();
        assert!(matches!(err, PlatformError::MalformedUser(_)));
    }

    #[tokio::test]
    async fn test_signals_forwarded_to_channel() {
        let (session, mut rx) = TelegramSession::anonymous().with_signal_channel();
        session.haptic(HapticFeedback::Success);
        session.show_main_button("Записаться");
        drop(session);

        assert_eq!(
            rx.recv().await,
            Some(UiSignal::Haptic {
                feedback: HapticFeedback::Success
            })
        );
        assert_eq!(
            rx.recv().await,
            Some(UiSignal::ShowMainButton {
                text: "Записаться".to_string()
            })
        );
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_signal_without_channel_is_dropped() {
        let session = TelegramSession::anonymous();
        session.init_app();
        session.hide_back_button();
    }
}
