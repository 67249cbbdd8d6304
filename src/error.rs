//! Error types for the CFBD client
//!
//! Every public API returns `Result<T, Error>`. The enum is closed: callers
//! match on variants instead of comparing against shared error values.

use thiserror::Error;

/// Maximum number of characters of a response body kept in [`Error::Api`]
pub const MAX_ERROR_BODY_CHARS: usize = 400;

/// Marker appended to error bodies cut at [`MAX_ERROR_BODY_CHARS`]
pub const TRUNCATION_MARKER: &str = "...(truncated)";

/// The main error type for the CFBD client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Construction / Configuration Errors
    // ============================================================================
    #[error("API key is required")]
    MissingApiKey,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    // ============================================================================
    // Request Validation Errors
    // ============================================================================
    #[error("Missing required parameter '{parameter}' for {endpoint}")]
    MissingRequiredParameter {
        endpoint: &'static str,
        parameter: &'static str,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("API error {status} for {path}: {body}")]
    Api {
        status: u16,
        path: String,
        body: String,
    },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing parameter error
    pub fn missing_parameter(endpoint: &'static str, parameter: &'static str) -> Self {
        Self::MissingRequiredParameter {
            endpoint,
            parameter,
        }
    }

    /// Create a transport error without an underlying reqwest error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create an API error, truncating the body excerpt
    pub fn api(status: u16, path: impl Into<String>, body: &str) -> Self {
        Self::Api {
            status,
            path: path.into(),
            body: truncate_body(body),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Transport {
                source: Some(e), ..
            } => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for 4xx API errors (usually a caller mistake)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if (400..500).contains(status))
    }

    /// True for 5xx API errors (a server condition)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if (500..600).contains(status))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            "request timed out".to_string()
        } else if e.is_connect() {
            "connection failed".to_string()
        } else {
            e.to_string()
        };
        Self::Transport {
            message,
            source: Some(e),
        }
    }
}

/// Cut a response body to [`MAX_ERROR_BODY_CHARS`] characters.
///
/// Counts characters, not bytes, so multi-byte bodies are never split inside
/// a code point.
pub fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((idx, _)) => format!("{}{TRUNCATION_MARKER}", &body[..idx]),
        None => body.to_string(),
    }
}

/// Result type alias for the CFBD client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing_parameter("/games", "year");
        assert_eq!(
            err.to_string(),
            "Missing required parameter 'year' for /games"
        );

        let err = Error::api(404, "/games", r#"{"error":"not found"}"#);
        assert_eq!(
            err.to_string(),
            r#"API error 404 for /games: {"error":"not found"}"#
        );

        assert_eq!(Error::MissingApiKey.to_string(), "API key is required");
    }

    #[test]
    fn test_truncate_short_body_unchanged() {
        let body = "x".repeat(MAX_ERROR_BODY_CHARS);
        assert_eq!(truncate_body(&body), body);
    }

    #[test]
    fn test_truncate_long_body() {
        let body = "y".repeat(MAX_ERROR_BODY_CHARS + 50);
        let truncated = truncate_body(&body);
        assert_eq!(
            truncated,
            format!("{}{TRUNCATION_MARKER}", "y".repeat(MAX_ERROR_BODY_CHARS))
        );
    }

    #[test]
    fn test_truncate_multibyte() {
        let body = "é".repeat(MAX_ERROR_BODY_CHARS + 1);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            truncated.trim_end_matches(TRUNCATION_MARKER).chars().count(),
            MAX_ERROR_BODY_CHARS
        );
    }

    #[test]
    fn test_status_classification() {
        let not_found = Error::api(404, "/teams", "");
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());
        assert_eq!(not_found.status(), Some(404));

        let unavailable = Error::api(503, "/teams", "");
        assert!(unavailable.is_server_error());
        assert!(!unavailable.is_client_error());

        assert_eq!(Error::decode("bad").status(), None);
        assert!(!Error::MissingApiKey.is_client_error());
    }
}
