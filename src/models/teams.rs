//! Team, roster, conference, venue and coach shapes

use serde::{Deserialize, Serialize};

/// A team, from `/teams` and `/teams/fbs`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub school: String,
    pub mascot: Option<String>,
    pub abbreviation: Option<String>,
    pub alternate_names: Option<Vec<String>>,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub classification: Option<String>,
    pub color: Option<String>,
    pub alternate_color: Option<String>,
    pub logos: Option<Vec<String>>,
    pub twitter: Option<String>,
    pub location: Option<Venue>,
}

/// Head-to-head history, from `/teams/matchup`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Matchup {
    pub team1: String,
    pub team2: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub team1_wins: i32,
    pub team2_wins: i32,
    pub ties: i32,
    pub games: Vec<MatchupGame>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchupGame {
    pub season: i32,
    pub week: i32,
    pub season_type: String,
    pub date: Option<String>,
    pub neutral_site: bool,
    pub venue: Option<String>,
    pub home_team: String,
    pub home_score: Option<i32>,
    pub away_team: String,
    pub away_score: Option<i32>,
    pub winner: Option<String>,
}

/// Roster entry, from `/roster`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RosterPlayer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub team: String,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub jersey: Option<i32>,
    pub year: Option<i32>,
    pub position: Option<String>,
    pub home_city: Option<String>,
    pub home_state: Option<String>,
    pub home_country: Option<String>,
    pub home_latitude: Option<f64>,
    pub home_longitude: Option<f64>,
    pub home_county_fips: Option<String>,
    pub recruit_ids: Option<Vec<String>>,
}

/// 247 team talent composite, from `/talent`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamTalent {
    pub year: i32,
    pub team: String,
    pub talent: f64,
}

/// Conference, from `/conferences`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Conference {
    pub id: i64,
    pub name: String,
    pub short_name: Option<String>,
    pub abbreviation: Option<String>,
    pub classification: Option<String>,
}

/// Stadium, from `/venues` (also nested as a team's location)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Venue {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country_code: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
    pub capacity: Option<i32>,
    pub construction_year: Option<i32>,
    pub grass: Option<bool>,
    pub dome: Option<bool>,
}

/// Head coach with per-season results, from `/coaches`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Coach {
    pub first_name: String,
    pub last_name: String,
    pub hire_date: Option<String>,
    pub seasons: Vec<CoachSeason>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoachSeason {
    pub school: String,
    pub year: i32,
    pub games: i32,
    pub wins: i32,
    pub losses: i32,
    pub ties: i32,
    pub preseason_rank: Option<i32>,
    pub postseason_rank: Option<i32>,
    pub srs: Option<f64>,
    pub sp_overall: Option<f64>,
    pub sp_offense: Option<f64>,
    pub sp_defense: Option<f64>,
}

impl Coach {
    /// Career win/loss totals across all returned seasons
    pub fn career_record(&self) -> (i32, i32, i32) {
        self.seasons.iter().fold((0, 0, 0), |(w, l, t), s| {
            (w + s.wins, l + s.losses, t + s.ties)
        })
    }
}
