//! Error types for the Arpio client

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

/// Result type alias for Arpio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the library and CLI
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

impl Error {
    /// True when the service answered 404 for the requested resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(api) if api.is_not_found())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {message}")]
    Unauthorized {
        message: String,
        authenticate_url: Option<String>,
    },

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("{message} (HTTP {status})")]
    Service { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(
        "more than one Arpio app exists with the name {0:?}; use the Arpio web \
         interface to rename the unrelated apps, then retry"
    )]
    AmbiguousName(String),

    #[error("there is no Arpio application named {0:?}")]
    AppNotFound(String),

    #[error("{}", no_recovery_point_message(.start.as_ref(), .end.as_ref()))]
    NoRecoveryPoint {
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    },
}

impl ApiError {
    /// Map an HTTP error status and its extracted message onto a variant.
    pub fn from_status(status: u16, message: String, authenticate_url: Option<String>) -> Self {
        match status {
            401 => ApiError::Unauthorized {
                message,
                authenticate_url,
            },
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            400 | 422 => ApiError::BadRequest(message),
            s if s >= 500 => ApiError::ServerError(message),
            s => ApiError::Service { status: s, message },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

fn no_recovery_point_message(start: Option<&DateTime<Utc>>, end: Option<&DateTime<Utc>>) -> String {
    let fmt = |t: &DateTime<Utc>| t.to_rfc3339_opts(SecondsFormat::Secs, true);
    match (start, end) {
        (Some(start), Some(end)) => format!(
            "there are no recovery points between {:?} and {:?}; move the minimum \
             timestamp earlier or drop it to use an older recovery point, or drop \
             the maximum timestamp to use the most recent recovery point",
            fmt(start),
            fmt(end)
        ),
        (Some(start), None) => format!(
            "there are no recovery points on or after {:?}; move the minimum \
             timestamp earlier or drop it to use an older recovery point",
            fmt(start)
        ),
        (None, Some(end)) => format!(
            "there are no recovery points on or before {:?}; move the maximum \
             timestamp later or drop it to use a newer recovery point",
            fmt(end)
        ),
        (None, None) => "no recovery points exist for this application yet; wait for \
                         the first recovery point to be created"
            .to_string(),
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `arpio init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("{0} is required. Run `arpio init` or pass it on the command line.")]
    Missing(&'static str),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
