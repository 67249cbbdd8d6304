//! Teams, matchups, rosters, talent, conferences, venues and coaches

use super::{OptionalYear, RequiredYear};
use crate::client::CfbdClient;
use crate::error::Result;
use crate::models::{Coach, Conference, Matchup, RosterPlayer, Team, TeamTalent, Venue};
use crate::query::{require, Query, QueryParams};
use crate::types::Classification;

/// Filter for `/teams`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamsRequest {
    pub conference: Option<String>,
    pub year: Option<i32>,
}

impl QueryParams for TeamsRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("conference", self.conference.as_deref())
            .push_opt("year", self.year);
        q
    }
}

/// Filter for `/teams/matchup`; both teams are required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchupRequest {
    pub team1: Option<String>,
    pub team2: Option<String>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

impl MatchupRequest {
    /// All-time series between two teams
    pub fn new(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self {
            team1: Some(team1.into()),
            team2: Some(team2.into()),
            ..Self::default()
        }
    }
}

impl QueryParams for MatchupRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require(endpoint, "team1", self.team1.as_deref())?;
        require(endpoint, "team2", self.team2.as_deref())
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("team1", self.team1.as_deref())
            .push_opt("team2", self.team2.as_deref())
            .push_opt("minYear", self.min_year)
            .push_opt("maxYear", self.max_year);
        q
    }
}

/// Filter for `/roster`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterRequest {
    pub team: Option<String>,
    pub year: Option<i32>,
    pub classification: Option<Classification>,
}

impl QueryParams for RosterRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("team", self.team.as_deref())
            .push_opt("year", self.year)
            .push_opt("classification", self.classification);
        q
    }
}

/// Filter for `/coaches`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoachesRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub team: Option<String>,
    pub year: Option<i32>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

impl QueryParams for CoachesRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("firstName", self.first_name.as_deref())
            .push_opt("lastName", self.last_name.as_deref())
            .push_opt("team", self.team.as_deref())
            .push_opt("year", self.year)
            .push_opt("minYear", self.min_year)
            .push_opt("maxYear", self.max_year);
        q
    }
}

impl CfbdClient {
    /// Team information (`/teams`)
    pub async fn teams(&self, req: &TeamsRequest) -> Result<Vec<Team>> {
        self.fetch_list("/teams", req).await
    }

    /// FBS teams, optionally for a given season (`/teams/fbs`)
    pub async fn fbs_teams(&self, year: Option<i32>) -> Result<Vec<Team>> {
        self.fetch_list("/teams/fbs", &OptionalYear(year)).await
    }

    /// Head-to-head series (`/teams/matchup`)
    pub async fn matchup(&self, req: &MatchupRequest) -> Result<Option<Matchup>> {
        self.fetch_one("/teams/matchup", req).await
    }

    /// Team roster (`/roster`)
    pub async fn roster(&self, req: &RosterRequest) -> Result<Vec<RosterPlayer>> {
        self.fetch_list("/roster", req).await
    }

    /// 247 talent composite (`/talent`)
    pub async fn talent(&self, year: i32) -> Result<Vec<TeamTalent>> {
        self.fetch_list("/talent", &RequiredYear(Some(year))).await
    }

    /// Conferences (`/conferences`)
    pub async fn conferences(&self) -> Result<Vec<Conference>> {
        self.fetch_list("/conferences", &()).await
    }

    /// Venues (`/venues`)
    pub async fn venues(&self) -> Result<Vec<Venue>> {
        self.fetch_list("/venues", &()).await
    }

    /// Coaching history (`/coaches`)
    pub async fn coaches(&self, req: &CoachesRequest) -> Result<Vec<Coach>> {
        self.fetch_list("/coaches", req).await
    }
}
