//! CLI module
//!
//! Thin command-line front end over [`crate::CfbdClient`]. Every command
//! prints the decoded records as JSON on stdout.
//!
//! # Commands
//!
//! - `games` - Games for a season, week or team
//! - `teams` - Team directory
//! - `rankings` - Poll rankings
//! - `lines` - Betting lines
//! - `sp` - SP+ ratings
//! - `info` - API key quota

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
