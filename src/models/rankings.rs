//! Poll and betting line shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// All polls released for one week, from `/rankings`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PollWeek {
    pub season: i32,
    pub season_type: String,
    pub week: i32,
    pub polls: Vec<Poll>,
}

impl PollWeek {
    /// Find a poll by name, e.g. "AP Top 25"
    pub fn poll(&self, name: &str) -> Option<&Poll> {
        self.polls.iter().find(|p| p.poll.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Poll {
    pub poll: String,
    pub ranks: Vec<PollRank>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PollRank {
    pub rank: Option<i32>,
    pub team_id: Option<i64>,
    pub school: String,
    pub conference: Option<String>,
    pub first_place_votes: Option<i32>,
    pub points: Option<i32>,
}

/// A game with sportsbook lines, from `/lines`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BettingGame {
    pub id: i64,
    pub season: i32,
    pub season_type: String,
    pub week: i32,
    pub start_date: Option<DateTime<Utc>>,
    pub home_team_id: Option<i64>,
    pub home_team: String,
    pub home_conference: Option<String>,
    pub home_classification: Option<String>,
    pub home_score: Option<i32>,
    pub away_team_id: Option<i64>,
    pub away_team: String,
    pub away_conference: Option<String>,
    pub away_classification: Option<String>,
    pub away_score: Option<i32>,
    pub lines: Vec<GameLine>,
}

/// One provider's line; spreads are from the home team's perspective
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameLine {
    pub provider: String,
    pub spread: Option<f64>,
    pub formatted_spread: Option<String>,
    pub spread_open: Option<f64>,
    pub over_under: Option<f64>,
    pub over_under_open: Option<f64>,
    pub home_moneyline: Option<i32>,
    pub away_moneyline: Option<i32>,
}
