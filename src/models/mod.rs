//! Typed record schemas for every API resource
//!
//! All records decode with `#[serde(default)]`: missing fields take their
//! default, unknown fields are ignored. Values the API may omit or send as
//! `null` are `Option<T>`, so an absent value is never confused with zero.

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

pub use draft::{DraftPick, DraftPosition, DraftTeam};
pub use games::{
    CalendarWeek, Game, GameMedia, GameWeather, PlayerGameStats, PlayerGameStatsTeam,
    PlayerStatCategory, PlayerStatLine, PlayerStatType, RecordSplit, ScoreboardBetting,
    ScoreboardGame, ScoreboardTeam, ScoreboardVenue, ScoreboardWeather, TeamGameStat, TeamGameStats,
    TeamGameStatsTeam, TeamRecord,
};
pub use info::UserInfo;
pub use metrics::{
    FieldGoalEp, PlayWinProbability, PlayerGamePpa, PlayerPpaDetail, PlayerPpaSplits,
    PlayerSeasonPpa, PpaCumulative, PpaSplits, PredictedPointsValue, PregameWinProbability,
    TeamGamePpa, TeamPpa,
};
pub use players::{
    PlayerSearchResult, PlayerTransfer, PlayerUsage, ReturningProduction, UsageSplits,
};
pub use plays::{ClockTime, Drive, Play, PlayStat, PlayStatType, PlayType};
pub use rankings::{BettingGame, GameLine, Poll, PollRank, PollWeek};
pub use ratings::{
    ConferenceSp, FpiEfficiencies, FpiResumeRanks, SpDefense, SpHavoc, SpOffense, SpSpecialTeams,
    TeamElo, TeamFpi, TeamSp, TeamSrs,
};
pub use recruiting::{AggregatedTeamRecruiting, HometownInfo, Recruit, TeamRecruitingRanking};
pub use stats::{
    AdvancedGameSide, AdvancedGameStat, AdvancedSeasonSide, AdvancedSeasonStat, DownSplit,
    FieldPosition, Havoc, PlaySplit, PlayerStat, StatValue, TeamStat,
};
pub use teams::{
    Coach, CoachSeason, Conference, Matchup, MatchupGame, RosterPlayer, Team, TeamTalent, Venue,
};

use crate::decode::Record;

/// Register top-level resource types with the decoder
macro_rules! records {
    ($($ty:ty),* $(,)?) => {
        $(impl Record for $ty {})*
    };
}

records!(
    // games
    Game,
    TeamGameStats,
    PlayerGameStats,
    GameMedia,
    GameWeather,
    TeamRecord,
    CalendarWeek,
    ScoreboardGame,
    // drives & plays
    Drive,
    Play,
    PlayType,
    PlayStat,
    PlayStatType,
    // teams
    Team,
    Matchup,
    RosterPlayer,
    TeamTalent,
    Conference,
    Venue,
    Coach,
    // players
    PlayerSearchResult,
    PlayerUsage,
    ReturningProduction,
    PlayerTransfer,
    // rankings & betting
    PollWeek,
    BettingGame,
    // recruiting
    Recruit,
    TeamRecruitingRanking,
    AggregatedTeamRecruiting,
    // ratings
    TeamSp,
    ConferenceSp,
    TeamSrs,
    TeamElo,
    TeamFpi,
    // metrics
    PredictedPointsValue,
    TeamPpa,
    TeamGamePpa,
    PlayerGamePpa,
    PlayerSeasonPpa,
    PlayWinProbability,
    PregameWinProbability,
    FieldGoalEp,
    // stats
    PlayerStat,
    TeamStat,
    AdvancedSeasonStat,
    AdvancedGameStat,
    // draft
    DraftTeam,
    DraftPosition,
    DraftPick,
    // account
    UserInfo,
);
