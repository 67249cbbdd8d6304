//! Games, box scores, media, weather, records, calendar and scoreboard

use super::RequiredYear;
use crate::client::CfbdClient;
use crate::error::{Error, Result};
use crate::models::{
    CalendarWeek, Game, GameMedia, GameWeather, PlayerGameStats, ScoreboardGame, TeamGameStats,
    TeamRecord,
};
use crate::query::{is_present, require, Query, QueryParams};
use crate::types::{Classification, MediaType, SeasonType};

/// Filter for `/games`.
///
/// `year` is required unless a game `id` is given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamesRequest {
    pub year: Option<i32>,
    pub week: Option<i32>,
    pub season_type: Option<SeasonType>,
    pub team: Option<String>,
    pub home: Option<String>,
    pub away: Option<String>,
    pub conference: Option<String>,
    pub classification: Option<Classification>,
    pub id: Option<i64>,
}

impl GamesRequest {
    /// All games in a season
    pub fn for_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    /// A single game by id
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Set week
    #[must_use]
    pub fn week(mut self, week: i32) -> Self {
        self.week = Some(week);
        self
    }

    /// Set season type
    #[must_use]
    pub fn season_type(mut self, season_type: SeasonType) -> Self {
        self.season_type = Some(season_type);
        self
    }

    /// Set team
    #[must_use]
    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Set conference abbreviation
    #[must_use]
    pub fn conference(mut self, conference: impl Into<String>) -> Self {
        self.conference = Some(conference.into());
        self
    }

    /// Set classification
    #[must_use]
    pub fn classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }
}

impl QueryParams for GamesRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        if self.id.is_some() {
            return Ok(());
        }
        require(endpoint, "year", self.year)
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("week", self.week)
            .push_opt("seasonType", self.season_type)
            .push_opt("team", self.team.as_deref())
            .push_opt("home", self.home.as_deref())
            .push_opt("away", self.away.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("classification", self.classification)
            .push_opt("id", self.id);
        q
    }
}

/// Filter for `/games/teams` and `/games/players`.
///
/// Needs a game `id`, or a `year` together with one of `week`, `team` or
/// `conference`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameStatsRequest {
    pub year: Option<i32>,
    pub week: Option<i32>,
    pub team: Option<String>,
    pub conference: Option<String>,
    pub classification: Option<Classification>,
    pub season_type: Option<SeasonType>,
    pub id: Option<i64>,
    /// Only used by `/games/players`
    pub category: Option<String>,
}

impl QueryParams for GameStatsRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        if self.id.is_some() {
            return Ok(());
        }
        require(endpoint, "year", self.year)?;
        if self.week.is_none()
            && !is_present(self.team.as_deref())
            && !is_present(self.conference.as_deref())
        {
            return Err(Error::missing_parameter(endpoint, "week"));
        }
        Ok(())
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("week", self.week)
            .push_opt("team", self.team.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("classification", self.classification)
            .push_opt("seasonType", self.season_type)
            .push_opt("id", self.id)
            .push_opt("category", self.category.as_deref());
        q
    }
}

/// Filter for `/games/media`; `year` is required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameMediaRequest {
    pub year: Option<i32>,
    pub week: Option<i32>,
    pub season_type: Option<SeasonType>,
    pub team: Option<String>,
    pub conference: Option<String>,
    pub media_type: Option<MediaType>,
    pub classification: Option<Classification>,
}

impl QueryParams for GameMediaRequest {
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
            .push_opt("mediaType", self.media_type)
            .push_opt("classification", self.classification);
        q
    }
}

/// Filter for `/games/weather`; `year` is required unless `game_id` is set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameWeatherRequest {
    pub game_id: Option<i64>,
    pub year: Option<i32>,
    pub week: Option<i32>,
    pub season_type: Option<SeasonType>,
    pub team: Option<String>,
    pub conference: Option<String>,
    pub classification: Option<Classification>,
}

impl QueryParams for GameWeatherRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        if self.game_id.is_some() {
            return Ok(());
        }
        require(endpoint, "year", self.year)
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("gameId", self.game_id)
            .push_opt("year", self.year)
            .push_opt("week", self.week)
            .push_opt("seasonType", self.season_type)
            .push_opt("team", self.team.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("classification", self.classification);
        q
    }
}

/// Filter for `/records`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordsRequest {
    pub year: Option<i32>,
    pub team: Option<String>,
    pub conference: Option<String>,
}

impl QueryParams for RecordsRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("team", self.team.as_deref())
            .push_opt("conference", self.conference.as_deref());
        q
    }
}

/// Filter for `/scoreboard`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreboardRequest {
    pub classification: Option<Classification>,
    pub conference: Option<String>,
}

impl QueryParams for ScoreboardRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("classification", self.classification)
            .push_opt("conference", self.conference.as_deref());
        q
    }
}

impl CfbdClient {
    /// Games and results (`/games`)
    pub async fn games(&self, req: &GamesRequest) -> Result<Vec<Game>> {
        self.fetch_list("/games", req).await
    }

    /// Team box scores (`/games/teams`)
    pub async fn game_team_stats(&self, req: &GameStatsRequest) -> Result<Vec<TeamGameStats>> {
        self.fetch_list("/games/teams", req).await
    }

    /// Player box scores (`/games/players`)
    pub async fn game_player_stats(&self, req: &GameStatsRequest) -> Result<Vec<PlayerGameStats>> {
        self.fetch_list("/games/players", req).await
    }

    /// Broadcast listings (`/games/media`)
    pub async fn game_media(&self, req: &GameMediaRequest) -> Result<Vec<GameMedia>> {
        self.fetch_list("/games/media", req).await
    }

    /// Game weather (`/games/weather`)
    pub async fn game_weather(&self, req: &GameWeatherRequest) -> Result<Vec<GameWeather>> {
        self.fetch_list("/games/weather", req).await
    }

    /// Team records (`/records`)
    pub async fn records(&self, req: &RecordsRequest) -> Result<Vec<TeamRecord>> {
        self.fetch_list("/records", req).await
    }

    /// Season calendar (`/calendar`)
    pub async fn calendar(&self, year: i32) -> Result<Vec<CalendarWeek>> {
        let params = RequiredYear(Some(year));
        self.fetch_list("/calendar", &params).await
    }

    /// Live scoreboard (`/scoreboard`)
    pub async fn scoreboard(&self, req: &ScoreboardRequest) -> Result<Vec<ScoreboardGame>> {
        self.fetch_list("/scoreboard", req).await
    }
}
