//! Drives and play-by-play

use crate::client::CfbdClient;
use crate::error::Result;
use crate::models::{Drive, Play, PlayStat, PlayStatType, PlayType};
use crate::query::{require, Query, QueryParams};
use crate::types::{Classification, SeasonType};

/// Filter for `/drives`; `year` is required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrivesRequest {
    pub year: Option<i32>,
    pub season_type: Option<SeasonType>,
    pub week: Option<i32>,
    pub team: Option<String>,
    pub offense: Option<String>,
    pub defense: Option<String>,
    pub conference: Option<String>,
    pub offense_conference: Option<String>,
    pub defense_conference: Option<String>,
    pub classification: Option<Classification>,
}

impl QueryParams for DrivesRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require(endpoint, "year", self.year)
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("seasonType", self.season_type)
            .push_opt("week", self.week)
            .push_opt("team", self.team.as_deref())
            .push_opt("offense", self.offense.as_deref())
            .push_opt("defense", self.defense.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("offenseConference", self.offense_conference.as_deref())
            .push_opt("defenseConference", self.defense_conference.as_deref())
            .push_opt("classification", self.classification);
        q
    }
}

/// Filter for `/plays`; `year` and `week` are both required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaysRequest {
    pub year: Option<i32>,
    pub week: Option<i32>,
    pub team: Option<String>,
    pub offense: Option<String>,
    pub defense: Option<String>,
    pub offense_conference: Option<String>,
    pub defense_conference: Option<String>,
    pub conference: Option<String>,
    pub play_type: Option<i32>,
    pub season_type: Option<SeasonType>,
    pub classification: Option<Classification>,
}

impl QueryParams for PlaysRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require(endpoint, "year", self.year)?;
        require(endpoint, "week", self.week)
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("week", self.week)
            .push_opt("team", self.team.as_deref())
            .push_opt("offense", self.offense.as_deref())
            .push_opt("defense", self.defense.as_deref())
            .push_opt("offenseConference", self.offense_conference.as_deref())
            .push_opt("defenseConference", self.defense_conference.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("playType", self.play_type)
            .push_opt("seasonType", self.season_type)
            .push_opt("classification", self.classification);
        q
    }
}

/// Filter for `/plays/stats`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayStatsRequest {
    pub year: Option<i32>,
    pub week: Option<i32>,
    pub team: Option<String>,
    pub game_id: Option<i64>,
    pub athlete_id: Option<i64>,
    pub stat_type_id: Option<i32>,
    pub season_type: Option<SeasonType>,
    pub conference: Option<String>,
}

impl QueryParams for PlayStatsRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("week", self.week)
            .push_opt("team", self.team.as_deref())
            .push_opt("gameId", self.game_id)
            .push_opt("athleteId", self.athlete_id)
            .push_opt("statTypeId", self.stat_type_id)
            .push_opt("seasonType", self.season_type)
            .push_opt("conference", self.conference.as_deref());
        q
    }
}

impl CfbdClient {
    /// Drive summaries (`/drives`)
    pub async fn drives(&self, req: &DrivesRequest) -> Result<Vec<Drive>> {
        self.fetch_list("/drives", req).await
    }

    /// Play-by-play (`/plays`)
    pub async fn plays(&self, req: &PlaysRequest) -> Result<Vec<Play>> {
        self.fetch_list("/plays", req).await
    }

    /// Play type definitions (`/plays/types`)
    pub async fn play_types(&self) -> Result<Vec<PlayType>> {
        self.fetch_list("/plays/types", &()).await
    }

    /// Player stats attached to individual plays (`/plays/stats`)
    pub async fn play_stats(&self, req: &PlayStatsRequest) -> Result<Vec<PlayStat>> {
        self.fetch_list("/plays/stats", req).await
    }

    /// Play stat type definitions (`/plays/stats/types`)
    pub async fn play_stat_types(&self) -> Result<Vec<PlayStatType>> {
        self.fetch_list("/plays/stats/types", &()).await
    }
}
