// --- File: crates/beautybook_profile/src/lib.rs ---
pub mod display;
pub mod editor;
pub mod error;

pub use editor::{ProfileEditor, ProfileForm};
pub use error::ProfileError;
