//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::client::CfbdClient;
use crate::config::ClientConfig;
use crate::endpoints::{GamesRequest, LinesRequest, RankingsRequest, RatingsRequest, TeamsRequest};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = CfbdClient::with_config(self.client_config()?)
            .context("failed to build API client")?;

        match &self.cli.command {
            Commands::Games {
                year,
                week,
                team,
                season_type,
            } => {
                let req = GamesRequest {
                    year: *year,
                    week: *week,
                    team: team.clone(),
                    season_type: *season_type,
                    ..GamesRequest::default()
                };
                self.output(&client.games(&req).await?)
            }
            Commands::Teams { conference, year } => {
                let req = TeamsRequest {
                    conference: conference.clone(),
                    year: *year,
                };
                self.output(&client.teams(&req).await?)
            }
            Commands::Rankings { year, week } => {
                let req = RankingsRequest {
                    week: *week,
                    ..RankingsRequest::for_year(*year)
                };
                self.output(&client.rankings(&req).await?)
            }
            Commands::Lines { year, week, team } => {
                let req = LinesRequest {
                    year: Some(*year),
                    week: *week,
                    team: team.clone(),
                    ..LinesRequest::default()
                };
                self.output(&client.lines(&req).await?)
            }
            Commands::Sp { year, team } => {
                let req = RatingsRequest {
                    year: *year,
                    team: team.clone(),
                    ..RatingsRequest::default()
                };
                self.output(&client.sp_ratings(&req).await?)
            }
            Commands::Info => self.output(&client.user_info().await?),
        }
    }

    /// Resolve client settings: config file (or environment), then flags
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_yaml_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ClientConfig::from_env(),
        };

        if let Some(key) = &self.cli.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(url) = &self.cli.base_url {
            config.base_url = url.clone();
        }

        debug!(base_url = %config.base_url, "resolved client config");
        Ok(config)
    }

    /// Print a value as JSON
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{text}");
        Ok(())
    }
}
