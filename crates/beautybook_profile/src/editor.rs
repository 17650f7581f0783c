// --- File: crates/beautybook_profile/src/editor.rs ---
//! The profile screen: a read view of the loaded profile and an edit form.
//!
//! The form is seeded from the last loaded profile. Saving checks the first
//! name locally before any request is made; a failed save keeps the form
//! open so the user can retry.

use crate::error::ProfileError;
use beautybook_common::log_error;
use beautybook_common::models::{ProfileUpdate, UserProfile};
use beautybook_common::services::ProfileApi;
use beautybook_platform::{HapticFeedback, Platform};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl From<&UserProfile> for ProfileForm {
    fn from(profile: &UserProfile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            phone: profile.phone.clone(),
        }
    }
}

impl ProfileForm {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.first_name.trim().is_empty() {
            return Err(ProfileError::FirstNameRequired);
        }
        Ok(())
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: self.first_name.clone(),
            last_name: Some(self.last_name.clone()),
            phone: Some(self.phone.clone()),
        }
    }
}

pub struct ProfileEditor {
    api: Arc<dyn ProfileApi>,
    platform: Arc<dyn Platform>,
    profile: Option<UserProfile>,
    form: ProfileForm,
    is_editing: bool,
    is_saving: bool,
}

impl ProfileEditor {
    pub fn new(api: Arc<dyn ProfileApi>, platform: Arc<dyn Platform>) -> Self {
        Self {
            api,
            platform,
            profile: None,
            form: ProfileForm::default(),
            is_editing: false,
            is_saving: false,
        }
    }

    /// Fetches the profile and seeds the form from it.
    ///
    /// A failed fetch is logged and leaves the previous state; the screen
    /// keeps showing its loading placeholder until a load succeeds.
    pub async fn load(&mut self) -> bool {
        match self.api.get_profile().await {
            Ok(profile) => {
                self.form = ProfileForm::from(&profile);
                self.profile = Some(profile);
                true
            }
            Err(e) => {
                log_error(e, "Failed to load profile");
                false
            }
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.profile.is_none()
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn start_editing(&mut self) -> Result<(), ProfileError> {
        if self.profile.is_none() {
            return Err(ProfileError::NotLoaded);
        }
        self.is_editing = true;
        Ok(())
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.form.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.form.last_name = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.form.phone = value.into();
    }

    pub async fn save(&mut self) -> Result<(), ProfileError> {
        if let Err(e) = self.form.validate() {
            self.platform.haptic(HapticFeedback::Error);
            return Err(e);
        }

        self.is_saving = true;
        let result = self.api.update_profile(self.form.to_update()).await;
        self.is_saving = false;

        match result {
            Ok(_) => {
                info!("Profile updated");
                self.platform.haptic(HapticFeedback::Success);
                self.is_editing = false;
                self.load().await;
                Ok(())
            }
            Err(e) => {
                log_error(&e, "Failed to update profile");
                self.platform.haptic(HapticFeedback::Error);
                Err(ProfileError::Remote(e))
            }
        }
    }

    /// Restores the form from the loaded profile and leaves edit mode.
    pub fn cancel(&mut self) {
        self.platform.haptic(HapticFeedback::Light);
        if let Some(profile) = &self.profile {
            self.form = ProfileForm::from(profile);
        }
        self.is_editing = false;
    }
}
