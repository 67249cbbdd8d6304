//! Predicted points, PPA and win probability metrics

use super::require_year_or_team;
use crate::client::CfbdClient;
use crate::error::Result;
use crate::models::{
    FieldGoalEp, PlayWinProbability, PlayerGamePpa, PlayerSeasonPpa, PredictedPointsValue,
    PregameWinProbability, TeamGamePpa, TeamPpa,
};
use crate::query::{require, Query, QueryParams};
use crate::types::SeasonType;

/// Filter for `/ppa/predicted`; both `down` and `distance` are required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictedPointsRequest {
    pub down: Option<u8>,
    pub distance: Option<u8>,
}

impl PredictedPointsRequest {
    pub fn new(down: u8, distance: u8) -> Self {
        Self {
            down: Some(down),
            distance: Some(distance),
        }
    }
}

impl QueryParams for PredictedPointsRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require(endpoint, "down", self.down)?;
        require(endpoint, "distance", self.distance)
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("down", self.down)
            .push_opt("distance", self.distance);
        q
    }
}

/// Filter for `/ppa/teams`; needs `year` or `team`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamPpaRequest {
    pub year: Option<i32>,
    pub team: Option<String>,
    pub conference: Option<String>,
    pub exclude_garbage_time: Option<bool>,
}

impl QueryParams for TeamPpaRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require_year_or_team(endpoint, self.year, self.team.as_deref())
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("team", self.team.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("excludeGarbageTime", self.exclude_garbage_time);
        q
    }
}

/// Filter for `/ppa/games`; `year` is required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamGamePpaRequest {
    pub year: Option<i32>,
    pub week: Option<i32>,
    pub season_type: Option<SeasonType>,
    pub team: Option<String>,
    pub conference: Option<String>,
    pub exclude_garbage_time: Option<bool>,
}

impl QueryParams for TeamGamePpaRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require(endpoint, "year", self.year)
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("week", self.week)
            .push_opt("seasonType", self.season_type)
            .push_opt("team", self.team.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("excludeGarbageTime", self.exclude_garbage_time);
        q
    }
}

/// Filter for `/ppa/players/games`; `year` is required.
///
/// `threshold` drops players with fewer plays than the given count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerGamePpaRequest {
    pub year: Option<i32>,
    pub week: Option<i32>,
    pub season_type: Option<SeasonType>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub player_id: Option<i64>,
    pub threshold: Option<f64>,
    pub exclude_garbage_time: Option<bool>,
}

impl QueryParams for PlayerGamePpaRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require(endpoint, "year", self.year)
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("week", self.week)
            .push_opt("seasonType", self.season_type)
            .push_opt("team", self.team.as_deref())
            .push_opt("position", self.position.as_deref())
            .push_opt("playerId", self.player_id)
            .push_opt("threshold", self.threshold)
            .push_opt("excludeGarbageTime", self.exclude_garbage_time);
        q
    }
}

/// Filter for `/ppa/players/season`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerSeasonPpaRequest {
    pub year: Option<i32>,
    pub team: Option<String>,
    pub conference: Option<String>,
    pub position: Option<String>,
    pub player_id: Option<i64>,
    pub threshold: Option<f64>,
    pub exclude_garbage_time: Option<bool>,
}

impl QueryParams for PlayerSeasonPpaRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("team", self.team.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("position", self.position.as_deref())
            .push_opt("playerId", self.player_id)
            .push_opt("threshold", self.threshold)
            .push_opt("excludeGarbageTime", self.exclude_garbage_time);
        q
    }
}

/// Lone `gameId` parameter for `/metrics/wp`
struct WinProbabilityParams(Option<i64>);

impl QueryParams for WinProbabilityParams {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require(endpoint, "gameId", self.0)
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("gameId", self.0);
        q
    }
}

/// Filter for `/metrics/wp/pregame`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PregameWpRequest {
    pub year: Option<i32>,
    pub week: Option<i32>,
    pub team: Option<String>,
    pub season_type: Option<SeasonType>,
}

impl QueryParams for PregameWpRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("week", self.week)
            .push_opt("team", self.team.as_deref())
            .push_opt("seasonType", self.season_type);
        q
    }
}

impl CfbdClient {
    /// Expected points by yard line for a down and distance (`/ppa/predicted`)
    pub async fn predicted_points(
        &self,
        req: &PredictedPointsRequest,
    ) -> Result<Vec<PredictedPointsValue>> {
        self.fetch_list("/ppa/predicted", req).await
    }

    /// Season PPA by team (`/ppa/teams`)
    pub async fn team_ppa(&self, req: &TeamPpaRequest) -> Result<Vec<TeamPpa>> {
        self.fetch_list("/ppa/teams", req).await
    }

    /// Per-game team PPA (`/ppa/games`)
    pub async fn team_game_ppa(&self, req: &TeamGamePpaRequest) -> Result<Vec<TeamGamePpa>> {
        self.fetch_list("/ppa/games", req).await
    }

    /// Per-game player PPA (`/ppa/players/games`)
    pub async fn player_game_ppa(&self, req: &PlayerGamePpaRequest) -> Result<Vec<PlayerGamePpa>> {
        self.fetch_list("/ppa/players/games", req).await
    }

    /// Season player PPA (`/ppa/players/season`)
    pub async fn player_season_ppa(
        &self,
        req: &PlayerSeasonPpaRequest,
    ) -> Result<Vec<PlayerSeasonPpa>> {
        self.fetch_list("/ppa/players/season", req).await
    }

    /// Play-by-play win probability for one game (`/metrics/wp`)
    pub async fn win_probability(&self, game_id: i64) -> Result<Vec<PlayWinProbability>> {
        let params = WinProbabilityParams(Some(game_id));
        self.fetch_list("/metrics/wp", &params).await
    }

    /// Pregame win probabilities (`/metrics/wp/pregame`)
    pub async fn pregame_win_probability(
        &self,
        req: &PregameWpRequest,
    ) -> Result<Vec<PregameWinProbability>> {
        self.fetch_list("/metrics/wp/pregame", req).await
    }

    /// Field goal expected points by distance (`/metrics/fg/ep`)
    pub async fn field_goal_ep(&self) -> Result<Vec<FieldGoalEp>> {
        self.fetch_list("/metrics/fg/ep", &()).await
    }
}
