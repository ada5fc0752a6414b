use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Config file not found: {}", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file unreadable: {}: {source}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {}:{line}: {reason}", path.display())]
    ConfigParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Config invalid: {}: {reason}", path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Config parse error: {}: missing key {key}", path.display())]
    MissingConfigKey { path: PathBuf, key: String },

    #[error("Missing environment variable: {0}")]
    MissingEnvironment(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Stytch error body, e.g. `{"status_code":401,"error_type":"...","error_message":"..."}`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unauthorized ({status}): {message}")]
    Unauthorized {
        status: u16,
        error_type: String,
        message: String,
    },

    #[error("Forbidden ({status}): {message}")]
    Forbidden {
        status: u16,
        error_type: String,
        message: String,
    },

    #[error("API error ({status}) {error_type}: {message}")]
    Api {
        status: u16,
        error_type: String,
        message: String,
        request_id: Option<String>,
    },
}

impl RemoteError {
    /// Classify a non-success response. Bodies that are not Stytch error
    /// JSON are carried through as the message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
        let error_type = parsed
            .error_type
            .unwrap_or_else(|| "unknown_error".to_string());
        let message = parsed.error_message.unwrap_or_else(|| body.to_string());

        match status {
            401 => RemoteError::Unauthorized {
                status,
                error_type,
                message,
            },
            403 => RemoteError::Forbidden {
                status,
                error_type,
                message,
            },
            _ => RemoteError::Api {
                status,
                error_type,
                message,
                request_id: parsed.request_id,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_is_classified() {
        let body = r#"{"status_code":401,"request_id":"req-1","error_type":"session_not_found","error_message":"Session could not be found."}"#;
        let err = RemoteError::from_response(401, body);

        match err {
            RemoteError::Unauthorized {
                status,
                error_type,
                message,
            } => {
                assert_eq!(status, 401);
                assert_eq!(error_type, "session_not_found");
                assert_eq!(message, "Session could not be found.");
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_forbidden_is_classified() {
        let err = RemoteError::from_response(403, r#"{"error_type":"unauthorized_action"}"#);
        assert!(matches!(err, RemoteError::Forbidden { status: 403, .. }));
    }

    #[test]
    fn test_non_json_body_is_kept_as_message() {
        let err = RemoteError::from_response(502, "upstream gone");
        match err {
            RemoteError::Api {
                status,
                error_type,
                message,
                request_id,
            } => {
                assert_eq!(status, 502);
                assert_eq!(error_type, "unknown_error");
                assert_eq!(message, "upstream gone");
                assert!(request_id.is_none());
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }
}
