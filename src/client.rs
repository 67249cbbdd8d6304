//! CFBD API client
//!
//! [`CfbdClient`] owns the transport and exposes one async method per
//! endpoint (see [`crate::endpoints`]). Every method follows the same
//! sequence: validate the filter, encode the query, GET, decode.

use crate::config::ClientConfig;
use crate::decode::{decode_list, decode_one, Record};
use crate::error::Result;
use crate::http::{HttpClient, RequestOptions};
use crate::query::QueryParams;

/// Client for the CollegeFootballData API.
///
/// Immutable after construction and cheap to clone; safe to share across
/// tasks.
#[derive(Debug, Clone)]
pub struct CfbdClient {
    http: HttpClient,
}

impl CfbdClient {
    /// Create a client for the public API with the given key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::builder().api_key(api_key).build())
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(&config)?,
        })
    }

    /// Create a client from `CFBD_API_KEY` / `CFBD_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Copy of this client whose requests use `options` (timeout override,
    /// cancellation token)
    #[must_use]
    pub fn with_request_options(&self, options: RequestOptions) -> Self {
        Self {
            http: self.http.with_options(options),
        }
    }

    /// The underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Validate, GET and decode a collection endpoint
    pub(crate) async fn fetch_list<P, T>(
        &self,
        endpoint: &'static str,
        params: &P,
    ) -> Result<Vec<T>>
    where
        P: QueryParams + ?Sized,
        T: Record,
    {
        params.validate(endpoint)?;
        let body = self.http.get(endpoint, &params.to_query()).await?;
        decode_list(&body)
    }

    /// Validate, GET and decode an object endpoint
    pub(crate) async fn fetch_one<P, T>(
        &self,
        endpoint: &'static str,
        params: &P,
    ) -> Result<Option<T>>
    where
        P: QueryParams + ?Sized,
        T: Record,
    {
        params.validate(endpoint)?;
        let body = self.http.get(endpoint, &params.to_query()).await?;
        decode_one(&body)
    }
}
