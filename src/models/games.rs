//! Game, box score, media, weather, record and calendar shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single game from `/games`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub season: i32,
    pub week: i32,
    pub season_type: String,
    pub start_date: Option<DateTime<Utc>>,
    #[serde(rename = "startTimeTBD")]
    pub start_time_tbd: bool,
    pub completed: bool,
    pub neutral_site: bool,
    pub conference_game: bool,
    pub attendance: Option<i64>,
    pub venue_id: Option<i64>,
    pub venue: Option<String>,
    pub home_id: Option<i64>,
    pub home_team: String,
    pub home_classification: Option<String>,
    pub home_conference: Option<String>,
    pub home_points: Option<i32>,
    pub home_line_scores: Option<Vec<i32>>,
    pub home_postgame_win_probability: Option<f64>,
    pub home_pregame_elo: Option<i32>,
    pub home_postgame_elo: Option<i32>,
    pub away_id: Option<i64>,
    pub away_team: String,
    pub away_classification: Option<String>,
    pub away_conference: Option<String>,
    pub away_points: Option<i32>,
    pub away_line_scores: Option<Vec<i32>>,
    pub away_postgame_win_probability: Option<f64>,
    pub away_pregame_elo: Option<i32>,
    pub away_postgame_elo: Option<i32>,
    pub excitement_index: Option<f64>,
    pub highlights: Option<String>,
    pub notes: Option<String>,
}

impl Game {
    /// Winning team name, if the game is final and not tied
    pub fn winner(&self) -> Option<&str> {
        match (self.home_points, self.away_points) {
            (Some(home), Some(away)) if self.completed && home > away => Some(&self.home_team),
            (Some(home), Some(away)) if self.completed && away > home => Some(&self.away_team),
            _ => None,
        }
    }
}

/// Team box score for one game, from `/games/teams`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamGameStats {
    pub id: i64,
    pub teams: Vec<TeamGameStatsTeam>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamGameStatsTeam {
    pub team_id: Option<i64>,
    pub team: String,
    pub conference: Option<String>,
    pub home_away: String,
    pub points: Option<i32>,
    pub stats: Vec<TeamGameStat>,
}

/// One box score line; values arrive as display strings ("7-12", "32:14")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamGameStat {
    pub category: String,
    pub stat: String,
}

/// Player box score for one game, from `/games/players`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerGameStats {
    pub id: i64,
    pub teams: Vec<PlayerGameStatsTeam>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerGameStatsTeam {
    pub team: String,
    pub conference: Option<String>,
    pub home_away: String,
    pub points: Option<i32>,
    pub categories: Vec<PlayerStatCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerStatCategory {
    pub name: String,
    pub types: Vec<PlayerStatType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerStatType {
    pub name: String,
    pub athletes: Vec<PlayerStatLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerStatLine {
    pub id: String,
    pub name: String,
    pub stat: String,
}

/// Broadcast listing, from `/games/media`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameMedia {
    pub id: i64,
    pub season: i32,
    pub week: i32,
    pub season_type: String,
    pub start_time: Option<DateTime<Utc>>,
    pub is_start_time_tbd: bool,
    pub home_team: String,
    pub home_conference: Option<String>,
    pub away_team: String,
    pub away_conference: Option<String>,
    pub media_type: String,
    pub outlet: String,
}

/// Game-time weather, from `/games/weather`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameWeather {
    pub id: i64,
    pub season: i32,
    pub week: i32,
    pub season_type: String,
    pub start_time: Option<DateTime<Utc>>,
    pub game_indoors: bool,
    pub home_team: String,
    pub home_conference: Option<String>,
    pub away_team: String,
    pub away_conference: Option<String>,
    pub venue_id: Option<i64>,
    pub venue: Option<String>,
    pub temperature: Option<f64>,
    pub dew_point: Option<f64>,
    pub humidity: Option<f64>,
    pub precipitation: Option<f64>,
    pub snowfall: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_speed: Option<f64>,
    pub pressure: Option<f64>,
    pub weather_condition_code: Option<i32>,
    pub weather_condition: Option<String>,
}

/// Season win/loss record, from `/records`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamRecord {
    pub year: i32,
    pub team_id: Option<i64>,
    pub team: String,
    pub classification: Option<String>,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub expected_wins: Option<f64>,
    pub total: RecordSplit,
    pub conference_games: RecordSplit,
    pub home_games: RecordSplit,
    pub away_games: RecordSplit,
    pub neutral_site_games: RecordSplit,
    pub regular_season: RecordSplit,
    pub postseason: RecordSplit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSplit {
    pub games: i32,
    pub wins: i32,
    pub losses: i32,
    pub ties: i32,
}

/// One week of the season calendar, from `/calendar`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarWeek {
    pub season: i32,
    pub week: i32,
    pub season_type: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Live or recent game, from `/scoreboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreboardGame {
    pub id: i64,
    pub start_date: Option<DateTime<Utc>>,
    #[serde(rename = "startTimeTBD")]
    pub start_time_tbd: bool,
    pub tv: Option<String>,
    pub neutral_site: bool,
    pub conference_game: bool,
    pub status: String,
    pub period: Option<i32>,
    pub clock: Option<String>,
    pub situation: Option<String>,
    pub possession: Option<String>,
    pub last_play: Option<String>,
    pub venue: ScoreboardVenue,
    pub home_team: ScoreboardTeam,
    pub away_team: ScoreboardTeam,
    pub weather: Option<ScoreboardWeather>,
    pub betting: Option<ScoreboardBetting>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreboardVenue {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreboardTeam {
    pub id: Option<i64>,
    pub name: String,
    pub conference: Option<String>,
    pub classification: Option<String>,
    pub points: Option<i32>,
    pub line_scores: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreboardWeather {
    pub temperature: Option<f64>,
    pub description: Option<String>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreboardBetting {
    pub spread: Option<f64>,
    pub over_under: Option<f64>,
    pub home_moneyline: Option<i32>,
    pub away_moneyline: Option<i32>,
}
