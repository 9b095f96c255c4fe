//! Character Roster Endpoints

use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::{Character, CharacterSetting};
use crate::reorder::SortRequest;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CharacterIdArgs {
    character_id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingArgs {
    character_id: i64,
    name: CharacterSetting,
    value: bool,
}

impl ApiClient {
    pub async fn list_characters(&self) -> Result<Vec<Character>, ApiError> {
        self.get("/api/v1/characters").await
    }

    /// Re-fetch item levels and classes from the game API
    pub async fn refresh_characters(&self) -> Result<Vec<Character>, ApiError> {
        self.fetch(self.request(Method::PUT, "/api/v1/characters")).await
    }

    pub async fn delete_character(&self, character_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/v1/characters/{}", character_id);
        self.send_empty::<()>(Method::DELETE, &path, None).await
    }

    pub async fn sort_characters(&self, order: &[SortRequest]) -> Result<(), ApiError> {
        self.send_empty(Method::PATCH, "/api/v1/characters/sort", Some(order)).await
    }

    pub async fn update_setting(
        &self,
        character_id: i64,
        name: CharacterSetting,
        value: bool,
    ) -> Result<Character, ApiError> {
        let args = SettingArgs { character_id, name, value };
        self.send_json(Method::PATCH, "/api/v1/characters/settings", &args).await
    }

    pub async fn toggle_gold_character(&self, character_id: i64) -> Result<Character, ApiError> {
        self.send_json(
            Method::PATCH,
            "/api/v1/characters/gold-character",
            &CharacterIdArgs { character_id },
        )
        .await
    }
}
