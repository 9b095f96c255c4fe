//! Admin Endpoints

use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{AdminDashboard, ContentEntry};

impl ApiClient {
    /// Daily sign-up and registration counts for the last `days` days
    pub async fn dashboard(&self, days: u32) -> Result<AdminDashboard, ApiError> {
        let req = self
            .request(Method::GET, "/admin/api/v1/dashboard")
            .query(&[("limit", days)]);
        self.fetch(req).await
    }

    /// Public catalog, also used by the todo page for raid ordering
    pub async fn list_contents(&self) -> Result<Vec<ContentEntry>, ApiError> {
        self.get("/api/v1/contents").await
    }

    pub async fn update_content(&self, entry: &ContentEntry) -> Result<ContentEntry, ApiError> {
        let path = format!("/admin/api/v1/contents/{}", entry.id);
        self.send_json(Method::PUT, &path, entry).await
    }
}
