//! API Errors

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("로그인이 필요합니다")]
    Unauthorized,
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error_message: Option<String>,
    message: Option<String>,
}

/// Map a non-2xx response to an error, pulling the server's message when present
pub fn error_from_response(status: u16, body: &str) -> ApiError {
    if status == 401 || status == 403 {
        return ApiError::Unauthorized;
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error_message.or(b.message))
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("요청 실패 ({})", status)
            } else {
                trimmed.to_string()
            }
        });
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses_are_unauthorized() {
        assert!(error_from_response(401, "").is_unauthorized());
        assert!(error_from_response(403, "{\"errorMessage\":\"no\"}").is_unauthorized());
    }

    #[test]
    fn test_server_message_is_used() {
        let err = error_from_response(400, r#"{"errorMessage":"존재하지 않는 캐릭터"}"#);
        assert_eq!(err.to_string(), "존재하지 않는 캐릭터");
        let err = error_from_response(404, r#"{"message":"not found"}"#);
        assert_eq!(err.to_string(), "not found");
    }

    #[test]
    fn test_plain_body_and_empty_body() {
        assert_eq!(error_from_response(500, "boom\n").to_string(), "boom");
        assert_eq!(error_from_response(502, "  ").to_string(), "요청 실패 (502)");
        assert!(matches!(error_from_response(502, ""), ApiError::Status { status: 502, .. }));
    }
}
