//! Season and advanced statistics shapes

use serde::{Deserialize, Serialize};

/// A stat value; the API sends numbers for most stats and strings for a few
/// (possession time, for example)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl Default for StatValue {
    fn default() -> Self {
        StatValue::Number(0.0)
    }
}

impl StatValue {
    /// Numeric value, parsing text when possible
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Number(n) => Some(*n),
            StatValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Player season stat line, from `/stats/player/season`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerStat {
    pub season: i32,
    pub player_id: String,
    pub player: String,
    pub position: Option<String>,
    pub team: String,
    pub conference: Option<String>,
    pub category: String,
    pub stat_type: String,
    pub stat: StatValue,
}

/// Team season stat, from `/stats/season`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamStat {
    pub season: i32,
    pub team: String,
    pub conference: Option<String>,
    pub stat_name: String,
    pub stat_value: StatValue,
}

/// Advanced season stats, from `/stats/season/advanced`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedSeasonStat {
    pub season: i32,
    pub team: String,
    pub conference: Option<String>,
    pub offense: AdvancedSeasonSide,
    pub defense: AdvancedSeasonSide,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvancedSeasonSide {
    pub plays: Option<f64>,
    pub drives: Option<f64>,
    pub ppa: Option<f64>,
    pub total_ppa: Option<f64>,
    pub success_rate: Option<f64>,
    pub explosiveness: Option<f64>,
    pub power_success: Option<f64>,
    pub stuff_rate: Option<f64>,
    pub line_yards: Option<f64>,
    pub line_yards_total: Option<f64>,
    pub second_level_yards: Option<f64>,
    pub second_level_yards_total: Option<f64>,
    pub open_field_yards: Option<f64>,
    pub open_field_yards_total: Option<f64>,
    pub total_opportunies: Option<f64>,
    pub points_per_opportunity: Option<f64>,
    pub field_position: Option<FieldPosition>,
    pub havoc: Option<Havoc>,
    pub standard_downs: Option<DownSplit>,
    pub passing_downs: Option<DownSplit>,
    pub rushing_plays: Option<PlaySplit>,
    pub passing_plays: Option<PlaySplit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldPosition {
    pub average_start: Option<f64>,
    pub average_predicted_points: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Havoc {
    pub total: Option<f64>,
    pub front_seven: Option<f64>,
    pub db: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownSplit {
    pub rate: Option<f64>,
    pub ppa: Option<f64>,
    pub success_rate: Option<f64>,
    pub explosiveness: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaySplit {
    pub rate: Option<f64>,
    pub ppa: Option<f64>,
    pub total_ppa: Option<f64>,
    pub success_rate: Option<f64>,
    pub explosiveness: Option<f64>,
}

/// Advanced per-game stats, from `/stats/game/advanced`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvancedGameStat {
    pub game_id: i64,
    pub season: i32,
    pub week: i32,
    pub team: String,
    pub opponent: String,
    pub offense: AdvancedGameSide,
    pub defense: AdvancedGameSide,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvancedGameSide {
    pub plays: Option<f64>,
    pub drives: Option<f64>,
    pub ppa: Option<f64>,
    pub total_ppa: Option<f64>,
    pub success_rate: Option<f64>,
    pub explosiveness: Option<f64>,
    pub power_success: Option<f64>,
    pub stuff_rate: Option<f64>,
    pub line_yards: Option<f64>,
    pub line_yards_total: Option<f64>,
    pub second_level_yards: Option<f64>,
    pub second_level_yards_total: Option<f64>,
    pub open_field_yards: Option<f64>,
    pub open_field_yards_total: Option<f64>,
    pub standard_downs: Option<DownSplit>,
    pub passing_downs: Option<DownSplit>,
    pub rushing_plays: Option<PlaySplit>,
    pub passing_plays: Option<PlaySplit>,
}
