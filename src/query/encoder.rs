//! Query string encoder
//!
//! Collects present parameters in insertion order and renders them as a
//! percent-encoded query string. Absent values never reach the output.

use crate::error::{Error, Result};
use crate::types::{Classification, HomeAway, MediaType, SeasonType};
use url::form_urlencoded;

/// A value that can be rendered as a query parameter.
///
/// Returning `None` means the value counts as absent and the parameter is
/// dropped, which is how blank strings are handled.
pub trait QueryValue {
    /// Render the value, or `None` if it should be omitted
    fn to_query_value(&self) -> Option<String>;
}

impl QueryValue for str {
    fn to_query_value(&self) -> Option<String> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> Option<String> {
        self.as_str().to_query_value()
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> Option<String> {
        (**self).to_query_value()
    }
}

macro_rules! integer_query_value {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

integer_query_value!(i32, i64, u8, u16, u32, u64);

impl QueryValue for f64 {
    // Display already gives the shortest representation that round-trips,
    // without trailing zeros: 2.0 -> "2", 0.25 -> "0.25".
    fn to_query_value(&self) -> Option<String> {
        if self.is_finite() {
            Some(self.to_string())
        } else {
            None
        }
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

macro_rules! enum_query_value {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> Option<String> {
                    Some(self.as_str().to_string())
                }
            }
        )*
    };
}

enum_query_value!(SeasonType, Classification, MediaType, HomeAway);

/// Ordered set of encoded query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter if its value is present
    pub fn push<V: QueryValue + ?Sized>(&mut self, key: &str, value: &V) -> &mut Self {
        if let Some(rendered) = value.to_query_value() {
            self.pairs.push((key.to_string(), rendered));
        }
        self
    }

    /// Add an optional parameter; `None` is omitted
    pub fn push_opt<V: QueryValue>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, &value);
        }
        self
    }

    /// Look up the first value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Encoded parameter pairs, in insertion order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if no parameters are present
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as a percent-encoded query string without the leading `?`
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Parse an encoded query string (with or without a leading `?`)
    pub fn parse(encoded: &str) -> Self {
        let encoded = encoded.strip_prefix('?').unwrap_or(encoded);
        Self {
            pairs: form_urlencoded::parse(encoded.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

/// A request filter that can be validated and encoded.
///
/// `validate` runs before any network call; `to_query` only sees requests
/// that passed validation.
pub trait QueryParams {
    /// Check required parameters for the given endpoint path
    fn validate(&self, _endpoint: &'static str) -> Result<()> {
        Ok(())
    }

    /// Encode the present parameters
    fn to_query(&self) -> Query;
}

/// Endpoints without filters
impl QueryParams for () {
    fn to_query(&self) -> Query {
        Query::new()
    }
}

/// Fail unless `value` is present.
///
/// Strings count as present only when they are not blank.
pub fn require<V: QueryValue>(
    endpoint: &'static str,
    parameter: &'static str,
    value: Option<V>,
) -> Result<()> {
    if is_present(value) {
        Ok(())
    } else {
        Err(Error::missing_parameter(endpoint, parameter))
    }
}

/// True when an optional filter value would be encoded
pub fn is_present<V: QueryValue>(value: Option<V>) -> bool {
    value.and_then(|v| v.to_query_value()).is_some()
}
