//! Todo Check Endpoints
//!
//! The same bodies are accepted for my own roster and, when permitted, for a
//! friend's roster under the friends prefix.

use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::Character;
use crate::reorder::SortRequest;
use crate::todo::{ChaosStage, GuardianStage};

/// Whose roster a check is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoScope {
    Mine,
    Friend,
}

impl TodoScope {
    fn prefix(self) -> &'static str {
        match self {
            TodoScope::Mine => "/api/v1/characters",
            TodoScope::Friend => "/api/v1/friends",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChaosCheckArgs {
    character_id: i64,
    check: ChaosStage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GuardianCheckArgs {
    character_id: i64,
    check: GuardianStage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GaugeArgs {
    character_id: i64,
    chaos_gauge: i32,
    guardian_gauge: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RaidCheckArgs<'a> {
    character_id: i64,
    week_category: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RaidSortArgs<'a> {
    character_id: i64,
    sort_list: &'a [SortRequest],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CubeArgs {
    character_id: i64,
    cube_ticket: i32,
}

impl ApiClient {
    pub async fn check_chaos(
        &self,
        scope: TodoScope,
        character_id: i64,
        check: ChaosStage,
    ) -> Result<Character, ApiError> {
        let path = format!("{}/day-todo/check/chaos", scope.prefix());
        self.send_json(Method::PATCH, &path, &ChaosCheckArgs { character_id, check }).await
    }

    pub async fn check_guardian(
        &self,
        scope: TodoScope,
        character_id: i64,
        check: GuardianStage,
    ) -> Result<Character, ApiError> {
        let path = format!("{}/day-todo/check/guardian", scope.prefix());
        self.send_json(Method::PATCH, &path, &GuardianCheckArgs { character_id, check }).await
    }

    pub async fn update_rest_gauge(
        &self,
        scope: TodoScope,
        character_id: i64,
        chaos_gauge: i32,
        guardian_gauge: i32,
    ) -> Result<Character, ApiError> {
        let path = format!("{}/day-todo/gauge", scope.prefix());
        let args = GaugeArgs { character_id, chaos_gauge, guardian_gauge };
        self.send_json(Method::PATCH, &path, &args).await
    }

    /// Toggle every raid of a week category for one character
    pub async fn check_raid(
        &self,
        scope: TodoScope,
        character_id: i64,
        week_category: &str,
    ) -> Result<Character, ApiError> {
        let path = format!("{}/week-todo/raid/check", scope.prefix());
        self.send_json(Method::PATCH, &path, &RaidCheckArgs { character_id, week_category }).await
    }

    pub async fn sort_raids(
        &self,
        character_id: i64,
        sort_list: &[SortRequest],
    ) -> Result<Character, ApiError> {
        let path = format!("{}/week-todo/raid/sort", TodoScope::Mine.prefix());
        self.send_json(Method::PATCH, &path, &RaidSortArgs { character_id, sort_list }).await
    }

    pub async fn update_cube_ticket(
        &self,
        scope: TodoScope,
        character_id: i64,
        cube_ticket: i32,
    ) -> Result<Character, ApiError> {
        let path = format!("{}/week-todo/cube", scope.prefix());
        self.send_json(Method::PATCH, &path, &CubeArgs { character_id, cube_ticket }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_body_carries_stage_as_integer() {
        let body = serde_json::to_value(ChaosCheckArgs { character_id: 3, check: ChaosStage::Once }).unwrap();
        assert_eq!(body, serde_json::json!({ "characterId": 3, "check": 1 }));
    }

    #[test]
    fn test_scope_prefixes() {
        assert_eq!(TodoScope::Mine.prefix(), "/api/v1/characters");
        assert_eq!(TodoScope::Friend.prefix(), "/api/v1/friends");
    }
}
