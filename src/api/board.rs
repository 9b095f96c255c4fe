//! Recruiting Board Endpoints

use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::{BoardPage, BoardPost, RecruitCategory};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub category: RecruitCategory,
    pub title: String,
    pub body: String,
}

impl NewPost {
    /// Title and body must both have visible text
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.body.trim().is_empty()
    }
}

impl ApiClient {
    pub async fn list_posts(
        &self,
        category: Option<RecruitCategory>,
        page: u32,
        limit: u32,
    ) -> Result<BoardPage, ApiError> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(category) = category {
            query.push(("category", category.as_str().to_string()));
        }
        let req = self.request(Method::GET, "/api/v1/recruiting-boards").query(&query);
        self.fetch(req).await
    }

    pub async fn get_post(&self, id: i64) -> Result<BoardPost, ApiError> {
        self.get(&format!("/api/v1/recruiting-boards/{}", id)).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<BoardPost, ApiError> {
        self.send_json(Method::POST, "/api/v1/recruiting-boards", post).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/api/v1/recruiting-boards/{}", id);
        self.send_empty::<()>(Method::DELETE, &path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_validation() {
        let post = NewPost {
            category: RecruitCategory::RaidRecruit,
            title: "  ".to_string(),
            body: "본문".to_string(),
        };
        assert!(!post.is_valid());
        let post = NewPost { title: "카멘 하드".to_string(), ..post };
        assert!(post.is_valid());
    }
}
