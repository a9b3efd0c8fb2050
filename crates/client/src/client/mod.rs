//! HTTP client for the Strava API.

pub mod activities;

use std::fmt;

use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Authenticated HTTP client for the Strava API.
#[derive(Clone)]
pub struct StravaClient {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl StravaClient {
    /// Create a new client from the given configuration.
    ///
    /// Fails with [`ClientError::Unauthenticated`] when no token is configured,
    /// so a missing credential never reaches the network.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let access_token = config
            .token()
            .ok_or(ClientError::Unauthenticated)?
            .to_string();
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("strava-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        tracing::debug!(path, status = status.as_u16(), "received response");

        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str(&body)
                .map_err(|e| ClientError::InvalidResponse(e.to_string()));
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = error_message(&body);

        match status.as_u16() {
            401 | 403 => Err(ClientError::Unauthorized {
                status: status.as_u16(),
                message,
            }),
            404 => Err(ClientError::NotFound {
                resource: path.to_string(),
            }),
            code => Err(ClientError::Api {
                status: code,
                message,
            }),
        }
    }
}

impl fmt::Debug for StravaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StravaClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Error envelope returned by the API on failure.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    errors: Vec<ApiFieldError>,
}

#[derive(Debug, Deserialize)]
struct ApiFieldError {
    #[serde(default)]
    resource: String,
    #[serde(default)]
    field: String,
    #[serde(default)]
    code: String,
}

/// Extract a readable message from an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) else {
        return body.trim().to_string();
    };

    let details: Vec<String> = parsed
        .errors
        .iter()
        .map(|e| format!("{}.{} {}", e.resource, e.field, e.code))
        .collect();

    if details.is_empty() {
        parsed.message
    } else {
        format!("{} ({})", parsed.message, details.join(", "))
    }
}
