//! Backend connection settings
//!
//! The WASM bundle has no process environment, so the base URL is baked in at
//! build time (`RECIPESHARE_API_URL`) and handed to [`ApiConfig::from_env_value`].

/// Backend used when no URL is configured at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Where the recipe API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Build from an optional (possibly blank) configured value
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path, joined with exactly one `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// `Authorization` header value for a session token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.url("/recipe/1"), "https://api.example.com/recipe/1");
        assert_eq!(config.url("recipe/1"), "https://api.example.com/recipe/1");

        let nested = ApiConfig::new("https://example.com/api//");
        assert_eq!(nested.url("/user/profile"), "https://example.com/api/user/profile");
    }

    #[test]
    fn test_from_env_value() {
        assert_eq!(ApiConfig::from_env_value(None).base_url(), DEFAULT_API_URL);
        assert_eq!(ApiConfig::from_env_value(Some("  ")).base_url(), DEFAULT_API_URL);
        assert_eq!(
            ApiConfig::from_env_value(Some("http://10.0.0.2:9000/")).base_url(),
            "http://10.0.0.2:9000"
        );
    }

    #[test]
    fn test_bearer() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
