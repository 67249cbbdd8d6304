//! Predicted points (PPA/EPA) and win probability shapes

use serde::{Deserialize, Serialize};

/// Expected points at a field position, from `/ppa/predicted`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PredictedPointsValue {
    pub yard_line: i32,
    pub predicted_points: f64,
}

/// Season PPA averages, from `/ppa/teams`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamPpa {
    pub season: i32,
    pub conference: Option<String>,
    pub team: String,
    pub offense: PpaSplits,
    pub defense: PpaSplits,
}

/// PPA broken out by situation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PpaSplits {
    pub overall: Option<f64>,
    pub passing: Option<f64>,
    pub rushing: Option<f64>,
    pub first_down: Option<f64>,
    pub second_down: Option<f64>,
    pub third_down: Option<f64>,
    pub cumulative: Option<PpaCumulative>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PpaCumulative {
    pub total: Option<f64>,
    pub passing: Option<f64>,
    pub rushing: Option<f64>,
}

/// Per-game team PPA, from `/ppa/games`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamGamePpa {
    pub game_id: i64,
    pub season: i32,
    pub week: i32,
    pub season_type: String,
    pub team: String,
    pub conference: Option<String>,
    pub opponent: String,
    pub offense: PpaSplits,
    pub defense: PpaSplits,
}

/// Per-game player PPA, from `/ppa/players/games`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerGamePpa {
    pub season: i32,
    pub week: i32,
    pub season_type: String,
    pub id: String,
    pub name: String,
    pub position: String,
    pub team: String,
    pub opponent: String,
    pub average_ppa: PlayerPpaSplits,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerPpaSplits {
    pub all: Option<f64>,
    pub pass: Option<f64>,
    pub rush: Option<f64>,
}

/// Season player PPA, from `/ppa/players/season`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerSeasonPpa {
    pub season: i32,
    pub id: String,
    pub name: String,
    pub position: String,
    pub team: String,
    pub conference: Option<String>,
    pub average_ppa: PlayerPpaDetail,
    pub total_ppa: PlayerPpaDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerPpaDetail {
    pub all: Option<f64>,
    pub pass: Option<f64>,
    pub rush: Option<f64>,
    pub first_down: Option<f64>,
    pub second_down: Option<f64>,
    pub third_down: Option<f64>,
    pub standard_downs: Option<f64>,
    pub passing_downs: Option<f64>,
}

/// In-game win probability after one play, from `/metrics/wp`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayWinProbability {
    pub game_id: i64,
    pub play_id: String,
    pub play_text: Option<String>,
    pub home_id: Option<i64>,
    pub home: String,
    pub away_id: Option<i64>,
    pub away: String,
    pub spread: Option<f64>,
    pub home_ball: bool,
    pub home_score: i32,
    pub away_score: i32,
    pub time_remaining: Option<i32>,
    pub yard_line: i32,
    pub down: i32,
    pub distance: i32,
    pub home_win_probability: f64,
    pub play_number: i32,
}

/// Pregame win probability from the closing spread, from `/metrics/wp/pregame`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PregameWinProbability {
    pub season: i32,
    pub season_type: String,
    pub week: i32,
    pub game_id: i64,
    pub home_team: String,
    pub away_team: String,
    pub spread: Option<f64>,
    pub home_win_probability: f64,
}

/// Field goal expected points by distance, from `/metrics/fg/ep`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldGoalEp {
    pub yards_to_goal: i32,
    pub distance: i32,
    pub expected_points: f64,
}
