//! Backend API Bindings
//!
//! One typed async function per REST endpoint, organized by domain.
//! Requests carry the stored bearer token when logged in.

mod admin;
mod auth;
mod board;
mod character;
mod error;
mod friend;
mod notification;
mod todo;

pub use board::NewPost;
pub use error::{error_from_response, ApiError};
pub use todo::TodoScope;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn execute(&self, req: RequestBuilder) -> Result<String, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            tracing::warn!("[API] {} {}", status.as_u16(), body);
            return Err(error_from_response(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let body = self.execute(req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!("[API] GET {}", path);
        self.fetch(self.request(Method::GET, path)).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!("[API] {} {}", method, path);
        self.fetch(self.request(method, path).json(body)).await
    }

    /// Request whose response body is ignored
    async fn send_empty<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        tracing::debug!("[API] {} {}", method, path);
        let req = self.request(method, path);
        let req = match body {
            Some(body) => req.json(body),
            None => req,
        };
        self.execute(req).await.map(|_| ())
    }
}

/// Percent-encode a path segment (character and user names are Korean)
pub fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encodes_korean_names() {
        assert_eq!(segment("바드"), "%EB%B0%94%EB%93%9C");
        assert_eq!(segment("abc123"), "abc123");
        assert_eq!(segment("a/b"), "a%2Fb");
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8080/", None);
        assert_eq!(client.url("/api/v1/characters"), "http://localhost:8080/api/v1/characters");
    }
}
