//! Poll rankings and betting lines

use crate::client::CfbdClient;
use crate::error::Result;
use crate::models::{BettingGame, PollWeek};
use crate::query::{require, Query, QueryParams};
use crate::types::SeasonType;

/// Filter for `/rankings`; `year` is required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingsRequest {
    pub year: Option<i32>,
    pub season_type: Option<SeasonType>,
    pub week: Option<i32>,
}

impl RankingsRequest {
    /// Every poll week in a season
    pub fn for_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }
}

impl QueryParams for RankingsRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require(endpoint, "year", self.year)
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("seasonType", self.season_type)
            .push_opt("week", self.week);
        q
    }
}

/// Filter for `/lines`; `year` is required unless `game_id` is set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinesRequest {
    pub game_id: Option<i64>,
    pub year: Option<i32>,
    pub season_type: Option<SeasonType>,
    pub week: Option<i32>,
    pub team: Option<String>,
    pub home: Option<String>,
    pub away: Option<String>,
    pub conference: Option<String>,
    pub provider: Option<String>,
}

impl QueryParams for LinesRequest {
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
            .push_opt("seasonType", self.season_type)
            .push_opt("week", self.week)
            .push_opt("team", self.team.as_deref())
            .push_opt("home", self.home.as_deref())
            .push_opt("away", self.away.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("provider", self.provider.as_deref());
        q
    }
}

impl CfbdClient {
    /// Historical polls (`/rankings`)
    pub async fn rankings(&self, req: &RankingsRequest) -> Result<Vec<PollWeek>> {
        self.fetch_list("/rankings", req).await
    }

    /// Sportsbook lines (`/lines`)
    pub async fn lines(&self, req: &LinesRequest) -> Result<Vec<BettingGame>> {
        self.fetch_list("/lines", req).await
    }
}
