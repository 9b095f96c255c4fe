//! App Configuration
//!
//! Values fixed at build time (`LOATODO_API_URL=... trunk build`).

const DEFAULT_API_URL: &str = "https://api.loatodo.com";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base_url: String,
    /// Log lines kept by the rolling logger
    pub log_capacity: usize,
    /// How long a toast stays visible
    pub toast_millis: u32,
    /// Posts requested per board page
    pub board_page_size: u32,
    /// Minimum gap between scroll-triggered page loads
    pub scroll_throttle_millis: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_api_url(option_env!("LOATODO_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_api_url(url: &str) -> Self {
        Self {
            api_base_url: url.trim_end_matches('/').to_string(),
            log_capacity: 500,
            toast_millis: 3000,
            board_page_size: 20,
            scroll_throttle_millis: 300,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::with_api_url("http://localhost:8080/");
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }
}
