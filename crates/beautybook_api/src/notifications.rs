// --- File: crates/beautybook_api/src/notifications.rs ---
use crate::client::ApiClient;
use beautybook_common::models::{NotificationsPage, SuccessResponse};
use beautybook_common::services::{ApiFuture, NotificationsApi};
use serde_json::json;

impl NotificationsApi for ApiClient {
    fn list_notifications(&self) -> ApiFuture<'_, NotificationsPage> {
        Box::pin(async move {
            let request = self.http().get(&self.endpoints().notifications);
            self.send(request).await
        })
    }

    fn mark_as_read(&self, notification_id: i64) -> ApiFuture<'_, SuccessResponse> {
        Box::pin(async move {
            let request = self
                .http()
                .put(&self.endpoints().notifications)
                .json(&json!({ "notificationId": notification_id }));
            self.send(request).await
        })
    }

    fn mark_all_as_read(&self) -> ApiFuture<'_, SuccessResponse> {
        Box::pin(async move {
            let request = self
                .http()
                .post(&self.endpoints().notifications)
                .json(&json!({ "action": "mark_all_read" }));
            self.send(request).await
        })
    }
}
