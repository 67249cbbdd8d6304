//! Tests for endpoint request validation and query encoding

use super::*;
use crate::error::Error;
use crate::types::{Classification, SeasonType};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn missing(result: Result<()>) -> (&'static str, &'static str) {
    match result {
        Err(Error::MissingRequiredParameter {
            endpoint,
            parameter,
        }) => (endpoint, parameter),
        other => panic!("expected MissingRequiredParameter, got {other:?}"),
    }
}

// ============================================================================
// Games
// ============================================================================

#[test]
fn test_games_requires_year() {
    let req = GamesRequest::default();
    assert_eq!(missing(req.validate("/games")), ("/games", "year"));
}

#[test]
fn test_games_by_id_skips_year() {
    let req = GamesRequest::by_id(401_520_281);
    assert!(req.validate("/games").is_ok());
    assert_eq!(req.to_query().get("id"), Some("401520281"));
    assert!(!req.to_query().contains("year"));
}

#[test]
fn test_games_query_keeps_zero_week() {
    let q = GamesRequest::for_year(2023).week(0).to_query();
    assert_eq!(q.encode(), "year=2023&week=0");
}

#[test]
fn test_games_query_wire_names() {
    let q = GamesRequest::for_year(2023)
        .season_type(SeasonType::Postseason)
        .team("Michigan")
        .classification(Classification::Fbs)
        .to_query();

    assert_eq!(q.get("seasonType"), Some("postseason"));
    assert_eq!(q.get("team"), Some("Michigan"));
    assert_eq!(q.get("classification"), Some("fbs"));
}

#[test]
fn test_games_query_drops_blank_team() {
    let q = GamesRequest::for_year(2023).team("   ").to_query();
    assert!(!q.contains("team"));
    assert_eq!(q.len(), 1);
}

#[test_case(Some(1), None, None, true ; "week")]
#[test_case(None, Some("Ohio State"), None, true ; "team")]
#[test_case(None, None, Some("B1G"), true ; "conference")]
#[test_case(None, None, None, false ; "year alone")]
#[test_case(None, Some(" "), None, false ; "blank team")]
fn test_game_stats_needs_a_narrowing_filter(
    week: Option<i32>,
    team: Option<&str>,
    conference: Option<&str>,
    ok: bool,
) {
    let req = GameStatsRequest {
        year: Some(2023),
        week,
        team: team.map(str::to_string),
        conference: conference.map(str::to_string),
        ..GameStatsRequest::default()
    };
    let result = req.validate("/games/teams");
    assert_eq!(result.is_ok(), ok);
    if !ok {
        assert_eq!(missing(result), ("/games/teams", "week"));
    }
}

#[test]
fn test_game_stats_by_id() {
    let req = GameStatsRequest {
        id: Some(1),
        ..GameStatsRequest::default()
    };
    assert!(req.validate("/games/players").is_ok());
}

#[test]
fn test_weather_by_game_id() {
    let by_game = GameWeatherRequest {
        game_id: Some(42),
        ..GameWeatherRequest::default()
    };
    assert!(by_game.validate("/games/weather").is_ok());
    assert_eq!(by_game.to_query().get("gameId"), Some("42"));

    let empty = GameWeatherRequest::default();
    assert_eq!(missing(empty.validate("/games/weather")).1, "year");
}

#[test]
fn test_calendar_year_helper() {
    assert!(RequiredYear(Some(2024)).validate("/calendar").is_ok());
    assert_eq!(missing(RequiredYear(None).validate("/calendar")).1, "year");
    assert!(OptionalYear(None).to_query().is_empty());
}

// ============================================================================
// Plays and Teams
// ============================================================================

#[test]
fn test_plays_requires_year_then_week() {
    let none = PlaysRequest::default();
    assert_eq!(missing(none.validate("/plays")).1, "year");

    let year_only = PlaysRequest {
        year: Some(2023),
        ..PlaysRequest::default()
    };
    assert_eq!(missing(year_only.validate("/plays")).1, "week");
}

#[test]
fn test_drives_conference_keys() {
    let req = DrivesRequest {
        year: Some(2023),
        offense_conference: Some("SEC".to_string()),
        ..DrivesRequest::default()
    };
    let q = req.to_query();
    assert_eq!(q.get("offenseConference"), Some("SEC"));
    assert!(!q.contains("defenseConference"));
}

#[test]
fn test_matchup_requires_both_teams() {
    assert!(MatchupRequest::new("Michigan", "Ohio State")
        .validate("/teams/matchup")
        .is_ok());

    let one = MatchupRequest {
        team1: Some("Michigan".to_string()),
        team2: Some("".to_string()),
        ..MatchupRequest::default()
    };
    assert_eq!(
        missing(one.validate("/teams/matchup")),
        ("/teams/matchup", "team2")
    );
}

#[test]
fn test_unfiltered_requests_encode_nothing() {
    assert!(TeamsRequest::default().to_query().is_empty());
    assert!(CoachesRequest::default().to_query().is_empty());
    assert!(RecordsRequest::default().to_query().is_empty());
    assert!(ScoreboardRequest::default().to_query().is_empty());
}

// ============================================================================
// Players, Rankings and Ratings
// ============================================================================

#[test]
fn test_player_search_requires_term() {
    let blank = PlayerSearchRequest::new("  ");
    assert_eq!(missing(blank.validate("/player/search")).1, "searchTerm");

    let q = PlayerSearchRequest::new("Penix").to_query();
    assert_eq!(q.get("searchTerm"), Some("Penix"));
}

#[test]
fn test_player_usage_sends_false_flag() {
    let req = PlayerUsageRequest {
        year: Some(2023),
        exclude_garbage_time: Some(false),
        ..PlayerUsageRequest::default()
    };
    assert_eq!(req.to_query().get("excludeGarbageTime"), Some("false"));
}

#[test_case(Some(2023), None, true ; "year")]
#[test_case(None, Some("Texas"), true ; "team")]
#[test_case(None, None, false ; "neither")]
#[test_case(None, Some(""), false ; "empty team")]
fn test_year_or_team(year: Option<i32>, team: Option<&str>, ok: bool) {
    let req = RatingsRequest {
        year,
        team: team.map(str::to_string),
        ..RatingsRequest::default()
    };
    assert_eq!(req.validate("/ratings/sp").is_ok(), ok);

    let returning = ReturningRequest {
        year,
        team: team.map(str::to_string),
        ..ReturningRequest::default()
    };
    assert_eq!(returning.validate("/player/returning").is_ok(), ok);
}

#[test]
fn test_rankings_requires_year() {
    let no_year = RankingsRequest::default();
    assert_eq!(missing(no_year.validate("/rankings")).1, "year");

    let q = RankingsRequest {
        week: Some(0),
        ..RankingsRequest::for_year(2023)
    }
    .to_query();
    assert_eq!(q.get("week"), Some("0"));
}

#[test]
fn test_lines_by_game_id() {
    let req = LinesRequest {
        game_id: Some(7),
        provider: Some("DraftKings".to_string()),
        ..LinesRequest::default()
    };
    assert!(req.validate("/lines").is_ok());
    assert_eq!(req.to_query().encode(), "gameId=7&provider=DraftKings");
}

#[test]
fn test_elo_has_no_required_parameters() {
    assert!(EloRequest::default().validate("/ratings/elo").is_ok());
    assert!(ConferenceSpRequest::default()
        .validate("/ratings/sp/conferences")
        .is_ok());
}

// ============================================================================
// Recruiting, Metrics, Stats and Draft
// ============================================================================

#[test]
fn test_recruit_type_maps_to_classification() {
    let req = RecruitingPlayersRequest {
        year: Some(2024),
        recruit_type: Some("JUCO".to_string()),
        ..RecruitingPlayersRequest::default()
    };
    assert!(req.validate("/recruiting/players").is_ok());
    assert_eq!(req.to_query().get("classification"), Some("JUCO"));
}

#[test]
fn test_recruiting_groups_year_range() {
    let q = RecruitingGroupsRequest {
        start_year: Some(2018),
        end_year: Some(2022),
        ..RecruitingGroupsRequest::default()
    }
    .to_query();
    assert_eq!(q.encode(), "startYear=2018&endYear=2022");
}

#[test]
fn test_predicted_points_requires_down_and_distance() {
    let first_and_ten = PredictedPointsRequest::new(1, 10);
    assert!(first_and_ten.validate("/ppa/predicted").is_ok());

    let no_distance = PredictedPointsRequest {
        down: Some(3),
        distance: None,
    };
    assert_eq!(
        missing(no_distance.validate("/ppa/predicted")).1,
        "distance"
    );

    let no_down = PredictedPointsRequest::default();
    assert_eq!(missing(no_down.validate("/ppa/predicted")).1, "down");
}

#[test]
fn test_player_game_ppa_threshold_rendering() {
    let req = PlayerGamePpaRequest {
        year: Some(2023),
        threshold: Some(5.0),
        ..PlayerGamePpaRequest::default()
    };
    assert_eq!(req.to_query().get("threshold"), Some("5"));

    let half = PlayerSeasonPpaRequest {
        threshold: Some(2.5),
        ..PlayerSeasonPpaRequest::default()
    };
    assert_eq!(half.to_query().get("threshold"), Some("2.5"));
}

#[test]
fn test_team_game_ppa_requires_year() {
    let req = TeamGamePpaRequest {
        team: Some("Georgia".to_string()),
        ..TeamGamePpaRequest::default()
    };
    assert_eq!(missing(req.validate("/ppa/games")), ("/ppa/games", "year"));
}

#[test]
fn test_player_season_stats_week_range() {
    let req = PlayerSeasonStatsRequest {
        year: Some(2023),
        start_week: Some(1),
        end_week: Some(5),
        category: Some("passing".to_string()),
        ..PlayerSeasonStatsRequest::default()
    };
    assert!(req.validate("/stats/player/season").is_ok());
    assert_eq!(
        req.to_query().encode(),
        "year=2023&startWeek=1&endWeek=5&category=passing"
    );
}

#[test]
fn test_advanced_stats_need_year_or_team() {
    let empty = AdvancedGameStatsRequest::default();
    assert_eq!(
        missing(empty.validate("/stats/game/advanced")),
        ("/stats/game/advanced", "year")
    );
    assert!(AdvancedSeasonStatsRequest {
        team: Some("LSU".to_string()),
        ..AdvancedSeasonStatsRequest::default()
    }
    .validate("/stats/season/advanced")
    .is_ok());
}

#[test]
fn test_draft_picks_query_encoding() {
    let q = DraftPicksRequest {
        year: Some(2024),
        school: Some("Texas A&M".to_string()),
        ..DraftPicksRequest::default()
    }
    .to_query();
    assert_eq!(q.encode(), "year=2024&school=Texas+A%26M");
}
