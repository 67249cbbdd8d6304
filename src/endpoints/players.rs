//! Player search, usage, returning production and transfer portal

use super::{require_year_or_team, RequiredYear};
use crate::client::CfbdClient;
use crate::error::Result;
use crate::models::{PlayerSearchResult, PlayerTransfer, PlayerUsage, ReturningProduction};
use crate::query::{require, Query, QueryParams};

/// Filter for `/player/search`; `search_term` is required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerSearchRequest {
    pub search_term: Option<String>,
    pub year: Option<i32>,
    pub team: Option<String>,
    pub position: Option<String>,
}

impl PlayerSearchRequest {
    /// Search by (partial) name
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: Some(search_term.into()),
            ..Self::default()
        }
    }
}

impl QueryParams for PlayerSearchRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require(endpoint, "searchTerm", self.search_term.as_deref())
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("searchTerm", self.search_term.as_deref())
            .push_opt("year", self.year)
            .push_opt("team", self.team.as_deref())
            .push_opt("position", self.position.as_deref());
        q
    }
}

/// Filter for `/player/usage`; `year` is required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerUsageRequest {
    pub year: Option<i32>,
    pub conference: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub player_id: Option<i64>,
    pub exclude_garbage_time: Option<bool>,
}

impl QueryParams for PlayerUsageRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require(endpoint, "year", self.year)
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("conference", self.conference.as_deref())
            .push_opt("position", self.position.as_deref())
            .push_opt("team", self.team.as_deref())
            .push_opt("playerId", self.player_id)
            .push_opt("excludeGarbageTime", self.exclude_garbage_time);
        q
    }
}

/// Filter for `/player/returning`; needs `year` or `team`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturningRequest {
    pub year: Option<i32>,
    pub team: Option<String>,
    pub conference: Option<String>,
}

impl QueryParams for ReturningRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require_year_or_team(endpoint, self.year, self.team.as_deref())
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("team", self.team.as_deref())
            .push_opt("conference", self.conference.as_deref());
        q
    }
}

impl CfbdClient {
    /// Player search (`/player/search`)
    pub async fn search_players(
        &self,
        req: &PlayerSearchRequest,
    ) -> Result<Vec<PlayerSearchResult>> {
        self.fetch_list("/player/search", req).await
    }

    /// Player usage rates (`/player/usage`)
    pub async fn player_usage(&self, req: &PlayerUsageRequest) -> Result<Vec<PlayerUsage>> {
        self.fetch_list("/player/usage", req).await
    }

    /// Returning production (`/player/returning`)
    pub async fn returning_production(
        &self,
        req: &ReturningRequest,
    ) -> Result<Vec<ReturningProduction>> {
        self.fetch_list("/player/returning", req).await
    }

    /// Transfer portal entries for a season (`/player/portal`)
    pub async fn transfer_portal(&self, year: i32) -> Result<Vec<PlayerTransfer>> {
        let params = RequiredYear(Some(year));
        self.fetch_list("/player/portal", &params).await
    }
}
