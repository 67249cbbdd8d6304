//! Response decoder module
//!
//! The core of the client: turns raw JSON payloads into typed records.
//!
//! # Overview
//!
//! Two entry points, both bound at compile time to a [`Record`] type:
//!
//! - [`decode_one`] for object endpoints: `null` or an empty body is `None`
//! - [`decode_list`] for collection endpoints: `null` or an empty body is an
//!   empty list, `null` elements are skipped, order is preserved
//!
//! Unknown fields are ignored and missing fields take their defaults, so
//! upstream additions never break decoding.

mod decoder;

pub use decoder::{decode_list, decode_one, Record};
