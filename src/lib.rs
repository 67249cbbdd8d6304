// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unused_self)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # cfbd
//!
//! Typed async client for the [CollegeFootballData](https://collegefootballdata.com)
//! REST API.
//!
//! ## Features
//!
//! - **One method per endpoint**: games, plays, teams, players, rankings,
//!   recruiting, ratings, metrics, stats, draft and account info
//! - **Typed filters**: `Option` fields distinguish "not set" from zero
//! - **Typed records**: unknown fields are ignored, `null` becomes `None`
//! - **Bearer auth**, configurable base URL, timeout and cancellation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cfbd::{CfbdClient, GamesRequest, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = CfbdClient::new("your-api-key")?;
//!
//!     let games = client.games(&GamesRequest::for_year(2023).week(1)).await?;
//!     for game in &games {
//!         println!("{} at {}", game.away_team, game.home_team);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  CfbdClient::games(&GamesRequest) -> Result<Vec<Game>>    │
//! └───────────────────────────────────────────────────────────┘
//!          │                  │                   │
//!   ┌──────┴─────┐     ┌──────┴──────┐     ┌──────┴──────┐
//!   │   Query    │     │    HTTP     │     │   Decode    │
//!   ├────────────┤     ├─────────────┤     ├─────────────┤
//!   │ validate   │ ──▶ │ bearer auth │ ──▶ │ decode_list │
//!   │ encode     │     │ timeout     │     │ decode_one  │
//!   └────────────┘     └─────────────┘     └─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Filter enums and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// API key handling
pub mod auth;

/// HTTP transport
pub mod http;

/// Query string encoding
pub mod query;

/// JSON response decoding
pub mod decode;

/// Response record types
pub mod models;

/// Endpoint methods and request filters
pub mod endpoints;

/// The API client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::CfbdClient;
pub use config::ClientConfig;
pub use endpoints::*;
pub use error::{Error, Result};
pub use http::RequestOptions;
pub use models::*;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
