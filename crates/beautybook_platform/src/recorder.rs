// --- File: crates/beautybook_platform/src/recorder.rs ---
use crate::platform::Platform;
use crate::signal::{HapticFeedback, UiSignal};
use beautybook_common::models::TelegramUser;
use std::sync::{Mutex, MutexGuard};

/// A platform that remembers every signal it was given, in order.
#[derive(Debug, Default)]
pub struct SignalRecorder {
    user: Option<TelegramUser>,
    signals: Mutex<Vec<UiSignal>>,
}

impl SignalRecorder {
    pub fn new(user: Option<TelegramUser>) -> Self {
        Self {
            user,
            signals: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<UiSignal>> {
        // A panic while holding the lock cannot leave a Vec half-written.
        self.signals.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn signals(&self) -> Vec<UiSignal> {
        self.lock().clone()
    }

    /// Only the haptic pulses, in order.
    pub fn haptics(&self) -> Vec<HapticFeedback> {
        self.lock()
            .iter()
            .filter_map(|signal| match signal {
                UiSignal::Haptic { feedback } => Some(*feedback),
                _ => None,
            })
            .collect()
    }

    pub fn last_haptic(&self) -> Option<HapticFeedback> {
        self.haptics().last().copied()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Platform for SignalRecorder {
    fn user(&self) -> Option<TelegramUser> {
        self.user.clone()
    }

    fn signal(&self, signal: UiSignal) {
        self.lock().push(signal);
    }
}
