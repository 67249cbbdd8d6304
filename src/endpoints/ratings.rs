//! SP+, SRS, Elo and FPI ratings

use super::require_year_or_team;
use crate::client::CfbdClient;
use crate::error::Result;
use crate::models::{ConferenceSp, TeamElo, TeamFpi, TeamSp, TeamSrs};
use crate::query::{Query, QueryParams};
use crate::types::SeasonType;

/// Filter for `/ratings/sp`, `/ratings/srs` and `/ratings/fpi`.
///
/// Each of these needs a `year` or a `team`. `/ratings/sp` ignores
/// `conference`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingsRequest {
    pub year: Option<i32>,
    pub team: Option<String>,
    pub conference: Option<String>,
}

impl RatingsRequest {
    /// All teams in a season
    pub fn for_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    /// One team across seasons
    pub fn for_team(team: impl Into<String>) -> Self {
        Self {
            team: Some(team.into()),
            ..Self::default()
        }
    }
}

impl QueryParams for RatingsRequest {
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

/// Filter for `/ratings/sp/conferences`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConferenceSpRequest {
    pub year: Option<i32>,
    pub conference: Option<String>,
}

impl QueryParams for ConferenceSpRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("conference", self.conference.as_deref());
        q
    }
}

/// Filter for `/ratings/elo`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EloRequest {
    pub year: Option<i32>,
    pub week: Option<i32>,
    pub season_type: Option<SeasonType>,
    pub team: Option<String>,
    pub conference: Option<String>,
}

impl QueryParams for EloRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("week", self.week)
            .push_opt("seasonType", self.season_type)
            .push_opt("team", self.team.as_deref())
            .push_opt("conference", self.conference.as_deref());
        q
    }
}

impl CfbdClient {
    /// SP+ ratings (`/ratings/sp`)
    pub async fn sp_ratings(&self, req: &RatingsRequest) -> Result<Vec<TeamSp>> {
        self.fetch_list("/ratings/sp", req).await
    }

    /// Conference SP+ averages (`/ratings/sp/conferences`)
    pub async fn conference_sp_ratings(
        &self,
        req: &ConferenceSpRequest,
    ) -> Result<Vec<ConferenceSp>> {
        self.fetch_list("/ratings/sp/conferences", req).await
    }

    /// SRS ratings (`/ratings/srs`)
    pub async fn srs_ratings(&self, req: &RatingsRequest) -> Result<Vec<TeamSrs>> {
        self.fetch_list("/ratings/srs", req).await
    }

    /// Elo ratings (`/ratings/elo`)
    pub async fn elo_ratings(&self, req: &EloRequest) -> Result<Vec<TeamElo>> {
        self.fetch_list("/ratings/elo", req).await
    }

    /// FPI ratings (`/ratings/fpi`)
    pub async fn fpi_ratings(&self, req: &RatingsRequest) -> Result<Vec<TeamFpi>> {
        self.fetch_list("/ratings/fpi", req).await
    }
}
