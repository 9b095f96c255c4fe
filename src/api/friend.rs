//! Friend Endpoints

use reqwest::Method;
use serde::Serialize;

use super::{segment, ApiClient, ApiError};
use crate::models::{Friend, FriendSetting};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RespondArgs {
    accept: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FriendSettingArgs {
    friend_id: i64,
    name: FriendSetting,
    value: bool,
}

impl ApiClient {
    pub async fn list_friends(&self) -> Result<Vec<Friend>, ApiError> {
        self.get("/api/v1/friends").await
    }

    /// Send a friend request by username
    pub async fn request_friend(&self, username: &str) -> Result<(), ApiError> {
        let path = format!("/api/v1/friends/{}", segment(username));
        self.send_empty::<()>(Method::POST, &path, None).await
    }

    pub async fn respond_friend(&self, username: &str, accept: bool) -> Result<(), ApiError> {
        let path = format!("/api/v1/friends/{}/respond", segment(username));
        self.send_empty(Method::PATCH, &path, Some(&RespondArgs { accept })).await
    }

    pub async fn delete_friend(&self, friend_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/v1/friends/{}", friend_id);
        self.send_empty::<()>(Method::DELETE, &path, None).await
    }

    pub async fn update_friend_setting(
        &self,
        friend_id: i64,
        name: FriendSetting,
        value: bool,
    ) -> Result<Friend, ApiError> {
        let args = FriendSettingArgs { friend_id, name, value };
        self.send_json(Method::PATCH, "/api/v1/friends/settings", &args).await
    }
}
