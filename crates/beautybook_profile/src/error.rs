// --- File: crates/beautybook_profile/src/error.rs ---
use beautybook_common::BeautybookError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("First name is required")]
    FirstNameRequired,

    #[error("Profile has not been loaded")]
    NotLoaded,

    #[error(transparent)]
    Remote(#[from] BeautybookError),
}
