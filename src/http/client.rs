//! HTTP transport
//!
//! Performs exactly one GET per call:
//! - Sets `Accept`, `User-Agent` and bearer `Authorization` headers
//! - Honors a per-request timeout and an optional cancellation token
//! - Maps non-2xx responses to [`Error::Api`] with a truncated body
//! - Returns the raw body bytes unparsed
//!
//! No retries, no rate limiting, no pagination.

use crate::auth::ApiKey;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::query::Query;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

/// Per-request overrides
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Override the client timeout
    pub timeout: Option<Duration>,
    /// Abandon the request when this token is cancelled
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    /// Create empty request options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set cancellation token
    #[must_use]
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// Authenticated HTTP client bound to one base URL
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    api_key: ApiKey,
    timeout: Duration,
    options: RequestOptions,
}

impl HttpClient {
    /// Create a client from configuration.
    ///
    /// Fails with [`Error::MissingApiKey`] when no usable key is configured.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let api_key = ApiKey::new(config.api_key.clone().unwrap_or_default())?;
        let base_url = config.parsed_base_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Transport {
                message: "failed to build HTTP client".to_string(),
                source: Some(e),
            })?;

        Ok(Self {
            client,
            base_url,
            api_key,
            timeout: config.timeout,
            options: RequestOptions::default(),
        })
    }

    /// Copy of this client that applies `options` to every request
    #[must_use]
    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self {
            options,
            ..self.clone()
        }
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a GET for `path` with the given query and return the raw body
    pub async fn get(&self, path: &str, query: &Query) -> Result<Bytes> {
        let url = self.build_url(path, query)?;
        let timeout = self.options.timeout.unwrap_or(self.timeout);
        let req = self.api_key.apply(self.client.get(url.clone()).timeout(timeout));

        debug!("GET {}", url);
        let started = Instant::now();

        let exchange = async move {
            let response = req.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, Error>((status, body))
        };

        let (status, body) = match &self.options.cancel {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => {
                    debug!("GET {} cancelled", url);
                    return Err(Error::transport(format!("request to {path} cancelled")));
                }
                result = exchange => result?,
            },
            None => exchange.await?,
        };

        debug!(
            "GET {} -> {} ({} bytes, {:?})",
            url,
            status.as_u16(),
            body.len(),
            started.elapsed()
        );

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            warn!("API returned {} for {}", status.as_u16(), path);
            return Err(Error::api(status.as_u16(), path, &text));
        }

        Ok(body)
    }

    /// Build full URL from path and query
    pub(crate) fn build_url(&self, path: &str, query: &Query) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let mut url = Url::parse(&format!("{base}/{path}"))?;
        if !query.is_empty() {
            url.set_query(Some(&query.encode()));
        }
        Ok(url)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key)
            .field("timeout", &self.timeout)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
