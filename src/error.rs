//! Error types for the Capella SDK and CLI

use std::time::Duration;
use thiserror::Error;

/// Result type alias for Capella operations
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

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl Error {
    /// True when the error is a remote "not found" (HTTP 404 or unresolved handle).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(ApiError::NotFound(_)))
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the API key of your Capella profile.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("{count} records match {field} = \"{value}\"; lookup keys must be unique")]
    Ambiguous {
        field: String,
        value: String,
        count: usize,
    },

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
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

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found at {0}. Create it or pass --config.")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API key not configured. Set `api_key` in your profile or CAPELLA_API_KEY.")]
    MissingApiKey,

    #[error("Profile '{0}' not found in configuration")]
    MissingProfile(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_unauthorized_message() {
        let err = ApiError::Unauthorized;
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::NotFound("Project pytest-project".to_string());
        assert!(err.to_string().contains("pytest-project"));
    }

    #[test]
    fn test_api_error_ambiguous() {
        let err = ApiError::Ambiguous {
            field: "name".to_string(),
            value: "dup".to_string(),
            count: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("2 records"));
        assert!(msg.contains("name = \"dup\""));
    }

    #[test]
    fn test_api_error_rate_limit() {
        let err = ApiError::RateLimit(Duration::from_secs(30));
        let msg = err.to_string();
        assert!(msg.contains("Rate limit"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn test_api_error_conflict() {
        let err = ApiError::Conflict("name already in use".to_string());
        assert!(err.to_string().contains("already in use"));
    }

    #[test]
    fn test_config_error_missing_profile() {
        let err = ConfigError::MissingProfile("pytest".to_string());
        assert!(err.to_string().contains("pytest"));
    }

    #[test]
    fn test_error_is_not_found() {
        let err: Error = ApiError::NotFound("x".to_string()).into();
        assert!(err.is_not_found());

        let err: Error = ApiError::Forbidden.into();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_from_config_error() {
        let err: Error = ConfigError::MissingApiKey.into();

        match err {
            Error::Config(ConfigError::MissingApiKey) => (),
            _ => panic!("Expected Error::Config(ConfigError::MissingApiKey)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
