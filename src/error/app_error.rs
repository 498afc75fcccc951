use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::config::ConfigError;

/// Application-wide error type that represents all possible errors in the system.
///
/// Dispatch-path failures are terminal for an invocation: each is reported
/// once as a 500 with a plain-text diagnostic and no retry is attempted.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required dispatch credentials are missing or empty
    ///
    /// The message names both required variables for the active profile and
    /// is written verbatim as the response body.
    #[error("{message}")]
    MissingCredentials { message: &'static str },

    /// Reading the request body failed
    #[error("Error reading input: {source}")]
    BodyRead {
        #[source]
        source: anyhow::Error,
    },

    /// The provider send call failed (authentication, network, malformed
    /// recipient — not distinguished)
    #[error("Error sending message: {source}")]
    Send {
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Maps the error to the HTTP status code reported to the caller
    ///
    /// Every dispatch-path failure is a 500; the taxonomy exists for logging,
    /// not for status differentiation.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingCredentials { .. }
            | AppError::BodyRead { .. }
            | AppError::Send { .. }
            | AppError::Configuration { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Configuration {
            key: "config".to_string(),
            source: anyhow::Error::new(error),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into a plain-text HTTP response
    ///
    /// The body is the human-readable diagnostic; no structured error format
    /// is defined for this surface.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_string();

        tracing::error!(
            error = %body,
            status = %status,
            "Request failed"
        );

        (status, body).into_response()
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
