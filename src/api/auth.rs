//! Auth & Member Endpoints

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::models::Member;

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

impl ApiClient {
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.send_json(Method::POST, "/api/v1/auth/login", &LoginArgs { username, password })
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_empty::<()>(Method::POST, "/api/v1/auth/logout", None).await
    }

    pub async fn me(&self) -> Result<Member, ApiError> {
        self.get("/api/v1/member").await
    }
}
