//! Notification Endpoints

use reqwest::Method;
use serde::Deserialize;

use super::{ApiClient, ApiError};
use crate::models::Notification;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnreadStatus {
    has_unread: bool,
}

impl ApiClient {
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get("/api/v1/notifications").await
    }

    pub async fn unread_status(&self) -> Result<bool, ApiError> {
        let status: UnreadStatus = self.get("/api/v1/notifications/status").await?;
        Ok(status.has_unread)
    }

    pub async fn mark_read(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/api/v1/notifications/{}/read", id);
        self.send_empty::<()>(Method::POST, &path, None).await
    }

    pub async fn mark_all_read(&self) -> Result<(), ApiError> {
        self.send_empty::<()>(Method::POST, "/api/v1/notifications/read-all", None).await
    }
}
