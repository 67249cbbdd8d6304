//! Team rating systems: SP+, SRS, Elo and FPI

use serde::{Deserialize, Serialize};

/// SP+ rating, from `/ratings/sp`.
///
/// The endpoint appends a national-averages row whose `team` is
/// "nationalAverages" and whose ranking fields are null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamSp {
    pub year: i32,
    pub team: String,
    pub conference: Option<String>,
    pub rating: f64,
    pub ranking: Option<i32>,
    pub second_order_wins: Option<f64>,
    pub sos: Option<f64>,
    pub offense: SpOffense,
    pub defense: SpDefense,
    pub special_teams: SpSpecialTeams,
}

impl TeamSp {
    /// True for the appended national averages row
    pub fn is_national_average(&self) -> bool {
        self.team == "nationalAverages"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpOffense {
    pub ranking: Option<i32>,
    pub rating: Option<f64>,
    pub success: Option<f64>,
    pub explosiveness: Option<f64>,
    pub rushing: Option<f64>,
    pub passing: Option<f64>,
    pub standard_downs: Option<f64>,
    pub passing_downs: Option<f64>,
    pub run_rate: Option<f64>,
    pub pace: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpDefense {
    pub ranking: Option<i32>,
    pub rating: Option<f64>,
    pub success: Option<f64>,
    pub explosiveness: Option<f64>,
    pub rushing: Option<f64>,
    pub passing: Option<f64>,
    pub standard_downs: Option<f64>,
    pub passing_downs: Option<f64>,
    pub havoc: Option<SpHavoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpHavoc {
    pub total: Option<f64>,
    pub front_seven: Option<f64>,
    pub db: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpSpecialTeams {
    pub rating: Option<f64>,
}

/// Conference-level SP+ averages, from `/ratings/sp/conferences`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConferenceSp {
    pub year: i32,
    pub conference: String,
    pub rating: f64,
    pub second_order_wins: Option<f64>,
    pub sos: Option<f64>,
    pub offense: SpOffense,
    pub defense: SpDefense,
    pub special_teams: SpSpecialTeams,
}

/// Simple Rating System, from `/ratings/srs`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamSrs {
    pub year: i32,
    pub team: String,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub rating: f64,
    pub ranking: Option<i32>,
}

/// Elo rating, from `/ratings/elo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamElo {
    pub year: i32,
    pub team: String,
    pub conference: Option<String>,
    pub elo: Option<i32>,
}

/// ESPN Football Power Index, from `/ratings/fpi`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamFpi {
    pub year: i32,
    pub team: String,
    pub conference: Option<String>,
    pub fpi: Option<f64>,
    pub resume_ranks: Option<FpiResumeRanks>,
    pub efficiencies: Option<FpiEfficiencies>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FpiResumeRanks {
    pub strength_of_record: Option<i32>,
    pub fpi: Option<i32>,
    pub average_win_probability: Option<i32>,
    pub strength_of_schedule: Option<i32>,
    pub remaining_strength_of_schedule: Option<i32>,
    pub game_control: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FpiEfficiencies {
    pub overall: Option<f64>,
    pub offense: Option<f64>,
    pub defense: Option<f64>,
    pub special_teams: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_average_row() {
        let rows: Vec<TeamSp> = serde_json::from_str(
            r#"[
                {"year": 2023, "team": "Michigan", "rating": 29.8},
                {"year": 2023, "team": "nationalAverages", "rating": 0.1}
            ]"#,
        )
        .unwrap();

        assert!(!rows[0].is_national_average());
        assert!(rows[1].is_national_average());
    }
}
