//! HTTP transport module
//!
//! One authenticated GET per call against the configured base URL.
//!
//! # Error mapping
//!
//! - DNS, connect, timeout and cancellation failures → `Error::Transport`
//! - Non-2xx status → `Error::Api` with status, path and a body excerpt
//!   capped at 400 characters

mod client;

pub use client::{HttpClient, RequestOptions};

#[cfg(test)]
mod tests;
