// --- File: crates/beautybook_platform/src/signal.rs ---
use serde::Serialize;

/// Haptic pulses understood by the Telegram client.
///
/// `Light`, `Medium` and `Heavy` are impact pulses; the rest are
/// notification pulses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticFeedback {
    Light,
    Medium,
    Heavy,
    Success,
    Warning,
    Error,
}

impl HapticFeedback {
    pub fn is_notification(&self) -> bool {
        matches!(
            self,
            HapticFeedback::Success | HapticFeedback::Warning | HapticFeedback::Error
        )
    }
}

/// Everything a component can ask the host UI to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UiSignal {
    Ready,
    Expand,
    HeaderColor { color: String },
    BackgroundColor { color: String },
    Haptic { feedback: HapticFeedback },
    ShowMainButton { text: String },
    HideMainButton,
    ShowBackButton,
    HideBackButton,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_families() {
        assert!(HapticFeedback::Error.is_notification());
        assert!(HapticFeedback::Success.is_notification());
        assert!(!HapticFeedback::Light.is_notification());
        assert!(!HapticFeedback::Heavy.is_notification());
    }

    #[test]
    fn test_signal_json_for_host() {
        let signal = UiSignal::Haptic {
            feedback: HapticFeedback::Medium,
        };
        assert_eq!(
            serde_json::to_string(&signal).unwrap(),
            r#"{"kind":"haptic","feedback":"medium"}"#
        );
    }
}
