use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read {}: {source}", .path.display())]
    Credentials {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Init failed: {0}")]
    Init(String),

    #[error("Network or HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned an error (Status: {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse API response: {0}")]
    Parse(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("{0}")]
    Validation(String),

    #[error("QR rendering failed: {0}")]
    Render(String),
}

/// Coarse failure category, for callers that branch on what went wrong rather
/// than on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or unusable local configuration (credential files, certificate).
    Config,
    /// The node could not be reached.
    Connectivity,
    /// The node answered, but with a failure or an unusable payload.
    Api,
    /// The node answered with a body that does not match the expected shape.
    Parse,
    /// Rejected user input.
    Validation,
    Render,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Credentials { .. } | Error::Init(_) => ErrorKind::Config,
            Error::Network(_) => ErrorKind::Connectivity,
            Error::ApiError { .. } | Error::InvalidData(_) => ErrorKind::Api,
            Error::Parse(_) => ErrorKind::Parse,
            Error::Validation(_) => ErrorKind::Validation,
            Error::Render(_) => ErrorKind::Render,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_error_names_path() {
        let err = Error::Credentials {
            path: PathBuf::from("/nowhere/admin.macaroon"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("/nowhere/admin.macaroon"));
    }

    #[test]
    fn test_api_error_carries_body() {
        let err = Error::ApiError {
            status: 500,
            message: "{\"message\":\"boom\"}".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Api);
        assert!(err.to_string().contains("Status: 500"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let value = serde_json::to_value(ErrorKind::Connectivity).unwrap();
        assert_eq!(value, serde_json::json!("connectivity"));
    }
}
