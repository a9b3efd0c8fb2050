//! Client error types.

use strava_core::activity::ActivityError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No access token configured, pass --access-token or set STRAVA_ACCESS_TOKEN")]
    Unauthenticated,

    #[error("Authentication failed ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ActivityError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Process exit code for this error.
    ///
    /// `2` matches clap's usage errors so every validation failure shares it.
    pub fn exit_code(&self) -> u8 {
        match self {
            ClientError::InvalidInput(_) => 2,
            ClientError::Unauthenticated | ClientError::Unauthorized { .. } => 3,
            ClientError::Network(_) => 4,
            ClientError::NotFound { .. }
            | ClientError::Api { .. }
            | ClientError::InvalidResponse(_) => 5,
            ClientError::Io(_) | ClientError::Json(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(
            ClientError::InvalidInput(ActivityError::UnknownSportType("x".into())).exit_code(),
            2
        );
        assert_eq!(ClientError::Unauthenticated.exit_code(), 3);
        assert_eq!(
            ClientError::Unauthorized {
                status: 401,
                message: "Authorization Error".into()
            }
            .exit_code(),
            3
        );
        assert_eq!(
            ClientError::NotFound {
                resource: "/activities/1".into()
            }
            .exit_code(),
            5
        );
        assert_eq!(
            ClientError::Api {
                status: 500,
                message: "boom".into()
            }
            .exit_code(),
            5
        );
        assert_eq!(
            ClientError::Io(std::io::Error::other("closed")).exit_code(),
            1
        );
    }

    #[test]
    fn api_error_display_carries_status_and_message() {
        let err = ClientError::Api {
            status: 429,
            message: "Rate Limit Exceeded".into(),
        };
        assert_eq!(err.to_string(), "Server returned 429: Rate Limit Exceeded");
    }
}
