//! NFL draft shapes

use serde::{Deserialize, Serialize};

/// NFL franchise, from `/draft/teams`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DraftTeam {
    pub location: String,
    pub nickname: Option<String>,
    pub display_name: Option<String>,
    pub logo: Option<String>,
}

/// Draft position label, from `/draft/positions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftPosition {
    pub name: String,
    pub abbreviation: String,
}

/// A draft selection, from `/draft/picks`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DraftPick {
    pub college_athlete_id: Option<i64>,
    pub nfl_athlete_id: Option<i64>,
    pub college_id: Option<i64>,
    pub college_team: String,
    pub college_conference: Option<String>,
    pub nfl_team_id: Option<i64>,
    pub nfl_team: String,
    pub year: i32,
    pub overall: i32,
    pub round: i32,
    pub pick: i32,
    pub name: String,
    pub position: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<i32>,
    pub pre_draft_ranking: Option<i32>,
    pub pre_draft_position_ranking: Option<i32>,
    pub pre_draft_grade: Option<f64>,
    pub hometown_info: Option<crate::models::HometownInfo>,
}
