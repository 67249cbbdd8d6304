//! Recruiting shapes

use serde::{Deserialize, Serialize};

/// A recruit, from `/recruiting/players`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recruit {
    pub id: String,
    pub athlete_id: Option<String>,
    pub recruit_type: String,
    pub year: i32,
    pub ranking: Option<i32>,
    pub name: String,
    pub school: Option<String>,
    pub committed_to: Option<String>,
    pub position: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<i32>,
    pub stars: i32,
    pub rating: f64,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub country: Option<String>,
    pub hometown_info: Option<HometownInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HometownInfo {
    pub fips_code: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

/// Team class ranking, from `/recruiting/teams`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRecruitingRanking {
    pub year: i32,
    pub rank: i32,
    pub team: String,
    pub points: f64,
}

/// Position group aggregates, from `/recruiting/groups`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregatedTeamRecruiting {
    pub team: String,
    pub conference: Option<String>,
    pub position_group: Option<String>,
    pub average_rating: f64,
    pub total_rating: f64,
    pub commits: i32,
    pub average_stars: f64,
}
