use std::time::Duration;

/// Default Strava API root.
pub const DEFAULT_BASE_URL: &str = "https://www.strava.com/api/v3";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Client configuration.
///
/// The CLI fills this from its flags, which fall back to `STRAVA_API_URL`,
/// `STRAVA_ACCESS_TOKEN` and `STRAVA_TIMEOUT_SECONDS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without trailing slash (default: "https://www.strava.com/api/v3")
    pub base_url: String,
    /// Bearer token obtained by an external login flow.
    pub access_token: Option<String>,
    /// Per-request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
}

impl ClientConfig {
    /// Replace the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the access token.
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Replace the request timeout.
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// The access token, if one is set and not blank.
    pub fn token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Get request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}
