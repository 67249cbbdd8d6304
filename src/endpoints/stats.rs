//! Season and game statistics

use super::require_year_or_team;
use crate::client::CfbdClient;
use crate::error::Result;
use crate::models::{AdvancedGameStat, AdvancedSeasonStat, PlayerStat, TeamStat};
use crate::query::{require, Query, QueryParams};
use crate::types::SeasonType;

/// Filter for `/stats/player/season`; `year` is required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerSeasonStatsRequest {
    pub year: Option<i32>,
    pub team: Option<String>,
    pub conference: Option<String>,
    pub start_week: Option<i32>,
    pub end_week: Option<i32>,
    pub season_type: Option<SeasonType>,
    pub category: Option<String>,
}

impl QueryParams for PlayerSeasonStatsRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require(endpoint, "year", self.year)
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("team", self.team.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("startWeek", self.start_week)
            .push_opt("endWeek", self.end_week)
            .push_opt("seasonType", self.season_type)
            .push_opt("category", self.category.as_deref());
        q
    }
}

/// Filter for `/stats/season`; needs `year` or `team`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamSeasonStatsRequest {
    pub year: Option<i32>,
    pub team: Option<String>,
    pub conference: Option<String>,
    pub start_week: Option<i32>,
    pub end_week: Option<i32>,
}

impl QueryParams for TeamSeasonStatsRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require_year_or_team(endpoint, self.year, self.team.as_deref())
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("team", self.team.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("startWeek", self.start_week)
            .push_opt("endWeek", self.end_week);
        q
    }
}

/// Filter for `/stats/season/advanced`; needs `year` or `team`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvancedSeasonStatsRequest {
    pub year: Option<i32>,
    pub team: Option<String>,
    pub exclude_garbage_time: Option<bool>,
    pub start_week: Option<i32>,
    pub end_week: Option<i32>,
}

impl QueryParams for AdvancedSeasonStatsRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require_year_or_team(endpoint, self.year, self.team.as_deref())
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("team", self.team.as_deref())
            .push_opt("excludeGarbageTime", self.exclude_garbage_time)
            .push_opt("startWeek", self.start_week)
            .push_opt("endWeek", self.end_week);
        q
    }
}

/// Filter for `/stats/game/advanced`; needs `year` or `team`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvancedGameStatsRequest {
    pub year: Option<i32>,
    pub week: Option<i32>,
    pub team: Option<String>,
    pub opponent: Option<String>,
    pub exclude_garbage_time: Option<bool>,
    pub season_type: Option<SeasonType>,
}

impl QueryParams for AdvancedGameStatsRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require_year_or_team(endpoint, self.year, self.team.as_deref())
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("week", self.week)
            .push_opt("team", self.team.as_deref())
            .push_opt("opponent", self.opponent.as_deref())
            .push_opt("excludeGarbageTime", self.exclude_garbage_time)
            .push_opt("seasonType", self.season_type);
        q
    }
}

impl CfbdClient {
    /// Player season totals (`/stats/player/season`)
    pub async fn player_season_stats(
        &self,
        req: &PlayerSeasonStatsRequest,
    ) -> Result<Vec<PlayerStat>> {
        self.fetch_list("/stats/player/season", req).await
    }

    /// Team season totals (`/stats/season`)
    pub async fn team_season_stats(&self, req: &TeamSeasonStatsRequest) -> Result<Vec<TeamStat>> {
        self.fetch_list("/stats/season", req).await
    }

    /// Names of the stat categories (`/stats/categories`)
    pub async fn stat_categories(&self) -> Result<Vec<String>> {
        self.fetch_list("/stats/categories", &()).await
    }

    /// Advanced season stats (`/stats/season/advanced`)
    pub async fn advanced_season_stats(
        &self,
        req: &AdvancedSeasonStatsRequest,
    ) -> Result<Vec<AdvancedSeasonStat>> {
        self.fetch_list("/stats/season/advanced", req).await
    }

    /// Advanced per-game stats (`/stats/game/advanced`)
    pub async fn advanced_game_stats(
        &self,
        req: &AdvancedGameStatsRequest,
    ) -> Result<Vec<AdvancedGameStat>> {
        self.fetch_list("/stats/game/advanced", req).await
    }
}
