// --- File: crates/beautybook_platform/src/platform.rs ---
use crate::signal::{HapticFeedback, UiSignal};
use beautybook_common::models::TelegramUser;

/// Colour applied to the Mini App header and background on start.
pub const SURFACE_COLOR: &str = "#ffffff";

/// The host session injected into every component.
pub trait Platform: Send + Sync {
    /// The signed-in Telegram user, if the app was opened from a chat.
    fn user(&self) -> Option<TelegramUser>;

    /// Deliver a UI signal to the host.
    fn signal(&self, signal: UiSignal);

    fn haptic(&self, feedback: HapticFeedback) {
        self.signal(UiSignal::Haptic { feedback });
    }

    fn show_main_button(&self, text: &str) {
        self.signal(UiSignal::ShowMainButton {
            text: text.to_string(),
        });
    }

    fn hide_main_button(&self) {
        self.signal(UiSignal::HideMainButton);
    }

    fn show_back_button(&self) {
        self.signal(UiSignal::ShowBackButton);
    }

    fn hide_back_button(&self) {
        self.signal(UiSignal::HideBackButton);
    }

    /// Tell the host the app is ready, take the full height and paint the
    /// header and background.
    fn init_app(&self) {
        self.signal(UiSignal::Ready);
        self.signal(UiSignal::Expand);
        self.signal(UiSignal::HeaderColor {
            color: SURFACE_COLOR.to_string(),
        });
        self.signal(UiSignal::BackgroundColor {
            color: SURFACE_COLOR.to_string(),
        });
    }
}
