//! Query encoder module
//!
//! Turns request filter structs into canonical query strings.
//!
//! # Rules
//!
//! - Absent (`None`) parameters are omitted entirely
//! - Strings are trimmed; blank strings count as absent
//! - `Some(0)` is encoded; zero never stands in for "unset"
//! - Floats use the shortest round-trip representation
//! - Required parameters are checked by [`QueryParams::validate`] before any
//!   network call

mod encoder;

pub use encoder::{is_present, require, Query, QueryParams, QueryValue};
