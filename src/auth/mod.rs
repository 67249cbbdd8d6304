//! Authentication module
//!
//! The CFBD API uses a single bearer token per account. [`ApiKey`] holds it
//! and stamps it onto outgoing requests.

use crate::error::{Error, Result};
use reqwest::RequestBuilder;
use std::fmt;

/// API key sent as `Authorization: Bearer <key>`
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create an API key, rejecting blank values
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The raw key value
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Attach the bearer header to a request
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.bearer_auth(&self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(\"***\")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_rejected() {
        assert!(matches!(ApiKey::new(""), Err(Error::MissingApiKey)));
        assert!(matches!(ApiKey::new("  \t"), Err(Error::MissingApiKey)));
    }

    #[test]
    fn test_key_is_trimmed() {
        let key = ApiKey::new("  abc123 \n").unwrap();
        assert_eq!(key.expose(), "abc123");
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("super-secret").unwrap();
        let printed = format!("{key:?}");
        assert!(!printed.contains("super-secret"));
    }

    #[test]
    fn test_bearer_header() {
        let key = ApiKey::new("my-token").unwrap();
        let client = reqwest::Client::new();
        let req = key.apply(client.get("https://example.com/games"));

        let built = req.build().unwrap();
        assert_eq!(
            built.headers().get("Authorization").unwrap(),
            "Bearer my-token"
        );
    }
}
