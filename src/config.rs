//! Client Configuration
//!
//! Values fixed at build time. The API base URL is read from the
//! `SBRAIN_API_URL` environment variable when the crate is compiled.

const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";

/// Items requested per listing page
pub const PAGE_SIZE: u32 = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST API root, without trailing slash
    pub api_base_url: String,
    pub page_size: u32,
    pub log_level: log::Level,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::with_api_url(option_env!("SBRAIN_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_api_url(url: &str) -> Self {
        let trimmed = url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self {
            api_base_url: api_base_url.to_string(),
            page_size: PAGE_SIZE,
            log_level: if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = AppConfig::with_api_url("https://api.example.com/v1/");
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn test_blank_url_uses_default() {
        let config = AppConfig::with_api_url("  ");
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }
}
