//! Player search, usage, returning production and transfer portal shapes

use serde::{Deserialize, Serialize};

/// Player search hit, from `/player/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerSearchResult {
    pub id: String,
    pub team: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub weight: Option<i32>,
    pub height: Option<i32>,
    pub jersey: Option<i32>,
    pub position: Option<String>,
    pub hometown: Option<String>,
    pub team_color: Option<String>,
    pub team_color_secondary: Option<String>,
}

/// Share of team plays a player was involved in, from `/player/usage`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerUsage {
    pub season: i32,
    pub id: String,
    pub name: String,
    pub position: String,
    pub team: String,
    pub conference: Option<String>,
    pub usage: UsageSplits,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UsageSplits {
    pub overall: Option<f64>,
    pub pass: Option<f64>,
    pub rush: Option<f64>,
    pub first_down: Option<f64>,
    pub second_down: Option<f64>,
    pub third_down: Option<f64>,
    pub standard_downs: Option<f64>,
    pub passing_downs: Option<f64>,
}

/// Returning production by team, from `/player/returning`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReturningProduction {
    pub season: i32,
    pub team: String,
    pub conference: Option<String>,
    pub total_ppa: f64,
    pub total_passing_ppa: f64,
    pub total_receiving_ppa: f64,
    pub total_rushing_ppa: f64,
    pub percent_ppa: f64,
    pub percent_passing_ppa: f64,
    pub percent_receiving_ppa: f64,
    pub percent_rushing_ppa: f64,
    pub usage: f64,
    pub passing_usage: f64,
    pub receiving_usage: f64,
    pub rushing_usage: f64,
}

/// Transfer portal entry, from `/player/portal`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerTransfer {
    pub season: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub origin: String,
    pub destination: Option<String>,
    pub transfer_date: Option<String>,
    pub rating: Option<f64>,
    pub stars: Option<i32>,
    pub eligibility: Option<String>,
}
