// --- File: crates/beautybook_api/src/profile.rs ---
use crate::client::ApiClient;
use beautybook_common::models::{ProfileUpdate, SuccessResponse, UserProfile};
use beautybook_common::services::{ApiFuture, ProfileApi};

impl ProfileApi for ApiClient {
    fn get_profile(&self) -> ApiFuture<'_, UserProfile> {
        Box::pin(async move {
            let request = self.http().get(&self.endpoints().profile);
            self.send(request).await
        })
    }

    fn update_profile(&self, update: ProfileUpdate) -> ApiFuture<'_, SuccessResponse> {
        Box::pin(async move {
            let request = self.http().put(&self.endpoints().profile).json(&update);
            self.send(request).await
        })
    }
}
