/// Configuration for the Google Analytics reporting client.
///
/// Obtaining the OAuth access token is the caller's concern; this crate only
/// attaches it to outgoing requests.
#[derive(Clone)]
pub struct GoogleConfig {
    /// OAuth access token used to authenticate API requests.
    pub access_token: String,

    /// Base URL for the reporting API. Override this for testing against a
    /// mock server.
    pub api_base_url: String,
}

/// Default base URL of the Google Analytics v3 reporting API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/analytics/v3";

impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("access_token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl GoogleConfig {
    /// Create a new configuration with the given access token.
    ///
    /// Uses the default reporting API base URL.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
        }
    }

    /// Override the API base URL (useful for testing).
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_base_url() {
        let config = GoogleConfig::new("ya29.test-token");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.access_token, "ya29.test-token");
    }

    #[test]
    fn with_custom_api_base_url() {
        let config = GoogleConfig::new("ya29.token").with_api_base_url("http://localhost:9999");
        assert_eq!(config.api_base_url, "http://localhost:9999");
    }

    #[test]
    fn debug_redacts_access_token() {
        let config = GoogleConfig::new("ya29.secret-placeholder-value");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"), "token must be redacted");
        assert!(
            !debug.contains("ya29.secret-placeholder-value"),
            "token must not appear in debug output"
        );
    }
}
