//! Drive and play-by-play shapes

use serde::{Deserialize, Serialize};

/// A single drive, from `/drives`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Drive {
    pub offense: String,
    pub offense_conference: Option<String>,
    pub defense: String,
    pub defense_conference: Option<String>,
    pub game_id: i64,
    pub id: String,
    pub drive_number: Option<i32>,
    pub scoring: bool,
    pub start_period: i32,
    pub start_yardline: i32,
    pub start_yards_to_goal: i32,
    pub start_time: ClockTime,
    pub end_period: i32,
    pub end_yardline: i32,
    pub end_yards_to_goal: i32,
    pub end_time: ClockTime,
    pub elapsed: ClockTime,
    pub plays: i32,
    pub yards: i32,
    pub drive_result: String,
    pub is_home_offense: bool,
    pub start_offense_score: i32,
    pub start_defense_score: i32,
    pub end_offense_score: i32,
    pub end_defense_score: i32,
}

/// Game clock reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockTime {
    pub minutes: Option<i32>,
    pub seconds: Option<i32>,
}

/// A single play, from `/plays`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Play {
    pub id: String,
    pub drive_id: String,
    pub game_id: i64,
    pub drive_number: Option<i32>,
    pub play_number: Option<i32>,
    pub offense: String,
    pub offense_conference: Option<String>,
    pub offense_score: i32,
    pub defense: String,
    pub home: String,
    pub away: String,
    pub defense_conference: Option<String>,
    pub defense_score: i32,
    pub period: i32,
    pub clock: ClockTime,
    pub offense_timeouts: Option<i32>,
    pub defense_timeouts: Option<i32>,
    pub yardline: i32,
    pub yards_to_goal: i32,
    pub down: i32,
    pub distance: i32,
    pub yards_gained: i32,
    pub scoring: bool,
    pub play_type: String,
    pub play_text: Option<String>,
    pub ppa: Option<f64>,
    pub wallclock: Option<String>,
}

/// Play type definition, from `/plays/types`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayType {
    pub id: i32,
    pub text: String,
    pub abbreviation: Option<String>,
}

/// Player involvement in a play, from `/plays/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayStat {
    pub game_id: i64,
    pub season: i32,
    pub week: i32,
    pub team: String,
    pub conference: Option<String>,
    pub opponent: String,
    pub team_score: i32,
    pub opponent_score: i32,
    pub drive_id: String,
    pub play_id: String,
    pub period: i32,
    pub clock: ClockTime,
    pub yards_to_goal: i32,
    pub down: i32,
    pub distance: i32,
    pub athlete_id: String,
    pub athlete_name: String,
    pub stat_type: String,
    pub stat: f64,
}

/// Play stat type definition, from `/plays/stats/types`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayStatType {
    pub id: i32,
    pub name: String,
}
