// --- File: crates/beautybook_platform/src/lib.rs ---
//! Host platform bridge for the BeautyBook Mini App.
//!
//! Components never reach for a global WebApp object. They receive an
//! `Arc<dyn Platform>` that answers "who is the user" and accepts UI feedback
//! signals (haptics, main/back buttons, lifecycle).
//!
//! - [`TelegramSession`]: identity parsed from the Mini App init data; signals
//!   are forwarded to the host renderer over a channel.
//! - [`SignalRecorder`]: keeps every signal in memory, for headless hosts and tests.

pub mod platform;
pub mod recorder;
pub mod session;
pub mod signal;

pub use platform::Platform;
pub use recorder::SignalRecorder;
pub use session::{PlatformError, TelegramSession};
pub use signal::{HapticFeedback, UiSignal};
