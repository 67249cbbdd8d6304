//! Endpoint methods and their request filters
//!
//! Each submodule adds methods to [`crate::CfbdClient`] for one resource
//! group, together with the filter structs those methods take. Filters use
//! `Option` for every optional parameter; `Some(0)` is sent as `0`.

mod draft;
mod games;
mod info;
mod metrics;
mod players;
mod plays;
mod rankings;
mod ratings;
mod recruiting;
mod stats;
mod teams;

pub use draft::DraftPicksRequest;
pub use games::{
    GameMediaRequest, GameStatsRequest, GameWeatherRequest, GamesRequest, RecordsRequest,
    ScoreboardRequest,
};
pub use metrics::{
    PlayerGamePpaRequest, PlayerSeasonPpaRequest, PredictedPointsRequest, PregameWpRequest,
    TeamGamePpaRequest, TeamPpaRequest,
};
pub use players::{PlayerSearchRequest, PlayerUsageRequest, ReturningRequest};
pub use plays::{DrivesRequest, PlayStatsRequest, PlaysRequest};
pub use rankings::{LinesRequest, RankingsRequest};
pub use ratings::{ConferenceSpRequest, EloRequest, RatingsRequest};
pub use recruiting::{RecruitingGroupsRequest, RecruitingPlayersRequest, RecruitingTeamsRequest};
pub use stats::{
    AdvancedGameStatsRequest, AdvancedSeasonStatsRequest, PlayerSeasonStatsRequest,
    TeamSeasonStatsRequest,
};
pub use teams::{CoachesRequest, MatchupRequest, RosterRequest, TeamsRequest};

use crate::error::{Error, Result};
use crate::query::{is_present, require, Query, QueryParams};

/// Lone `year` parameter that must be present
pub(crate) struct RequiredYear(pub Option<i32>);

impl QueryParams for RequiredYear {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require(endpoint, "year", self.0)
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.0);
        q
    }
}

/// Lone optional `year` parameter
pub(crate) struct OptionalYear(pub Option<i32>);

impl QueryParams for OptionalYear {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.0);
        q
    }
}

/// Many endpoints accept either a season or a team but refuse neither
fn require_year_or_team(
    endpoint: &'static str,
    year: Option<i32>,
    team: Option<&str>,
) -> Result<()> {
    if year.is_some() || is_present(team) {
        Ok(())
    } else {
        Err(Error::missing_parameter(endpoint, "year"))
    }
}

#[cfg(test)]
mod tests;
