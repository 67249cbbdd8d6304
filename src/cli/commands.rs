//! CLI commands and argument parsing

use crate::types::SeasonType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query the CollegeFootballData API from the command line
#[derive(Parser, Debug)]
#[command(name = "cfbd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key (falls back to the config file)
    #[arg(long, global = true, env = "CFBD_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Client configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Games and results
    Games {
        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        week: Option<i32>,

        #[arg(long)]
        team: Option<String>,

        /// regular, postseason, both, ...
        #[arg(long)]
        season_type: Option<SeasonType>,
    },

    /// Team directory
    Teams {
        #[arg(long)]
        conference: Option<String>,

        #[arg(long)]
        year: Option<i32>,
    },

    /// Poll rankings
    Rankings {
        #[arg(long)]
        year: i32,

        #[arg(long)]
        week: Option<i32>,
    },

    /// Betting lines
    Lines {
        #[arg(long)]
        year: i32,

        #[arg(long)]
        week: Option<i32>,

        #[arg(long)]
        team: Option<String>,
    },

    /// SP+ ratings
    Sp {
        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        team: Option<String>,
    },

    /// Patron level and remaining calls for the API key
    Info,
}
