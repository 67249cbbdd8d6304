//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: typed request → HTTP GET → typed records

use cfbd::{
    CfbdClient, ClientConfig, Error, Game, GamesRequest, MatchupRequest, RankingsRequest,
    RatingsRequest, RequestOptions, SeasonType, TeamsRequest,
};
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CfbdClient {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .api_key("test-key")
        .timeout(Duration::from_secs(5))
        .build();
    CfbdClient::with_config(config).unwrap()
}

fn utc(s: &str) -> Option<DateTime<Utc>> {
    Some(s.parse().unwrap())
}

// ============================================================================
// Games
// ============================================================================

#[tokio::test]
async fn test_games_fixture_decodes_field_by_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("year", "2023"))
        .and(query_param("week", "1"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 401520145,
                "season": 2023,
                "week": 1,
                "seasonType": "regular",
                "startDate": "2023-09-02T16:00:00.000Z",
                "startTimeTBD": false,
                "completed": true,
                "neutralSite": false,
                "conferenceGame": false,
                "attendance": 110633,
                "venueId": 3730,
                "venue": "Michigan Stadium",
                "homeId": 130,
                "homeTeam": "Michigan",
                "homeConference": "Big Ten",
                "homeClassification": "fbs",
                "homePoints": 30,
                "homeLineScores": [10, 7, 7, 6],
                "awayId": 2197,
                "awayTeam": "East Carolina",
                "awayConference": "American Athletic",
                "awayClassification": "fbs",
                "awayPoints": 3,
                "awayLineScores": [0, 3, 0, 0],
                "excitementIndex": 1.25,
                "highlights": null,
                "notes": null
            },
            {
                "id": 401520146,
                "season": 2023,
                "week": 1,
                "seasonType": "regular",
                "startDate": "2023-09-02T19:30:00.000Z",
                "startTimeTBD": true,
                "completed": false,
                "neutralSite": true,
                "conferenceGame": true,
                "homeTeam": "Texas Tech",
                "awayTeam": "Wyoming",
                "homePoints": null,
                "awayPoints": null
            },
            {
                "id": 401520147,
                "season": 2023,
                "week": 1,
                "seasonType": "regular",
                "completed": true,
                "homeTeam": "Lehigh",
                "homeClassification": "fcs",
                "homePoints": 0,
                "awayTeam": "Army",
                "awayPoints": 0,
                "homePostgameWinProbability": 0.5,
                "awayPostgameWinProbability": 0.5,
                "notes": "Weather delay"
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let games = client
        .games(&GamesRequest::for_year(2023).week(1))
        .await
        .unwrap();

    assert_eq!(games.len(), 3);

    assert_eq!(
        games[0],
        Game {
            id: 401_520_145,
            season: 2023,
            week: 1,
            season_type: "regular".to_string(),
            start_date: utc("2023-09-02T16:00:00Z"),
            start_time_tbd: false,
            completed: true,
            neutral_site: false,
            conference_game: false,
            attendance: Some(110_633),
            venue_id: Some(3730),
            venue: Some("Michigan Stadium".to_string()),
            home_id: Some(130),
            home_team: "Michigan".to_string(),
            home_classification: Some("fbs".to_string()),
            home_conference: Some("Big Ten".to_string()),
            home_points: Some(30),
            home_line_scores: Some(vec![10, 7, 7, 6]),
            away_id: Some(2197),
            away_team: "East Carolina".to_string(),
            away_classification: Some("fbs".to_string()),
            away_conference: Some("American Athletic".to_string()),
            away_points: Some(3),
            away_line_scores: Some(vec![0, 3, 0, 0]),
            excitement_index: Some(1.25),
            ..Game::default()
        }
    );
    assert_eq!(games[0].winner(), Some("Michigan"));

    let tbd = &games[1];
    assert_eq!(tbd.id, 401_520_146);
    assert!(tbd.start_time_tbd);
    assert!(tbd.neutral_site);
    assert!(tbd.conference_game);
    assert_eq!(tbd.home_points, None);
    assert_eq!(tbd.away_points, None);
    assert_eq!(tbd.attendance, None);
    assert_eq!(tbd.winner(), None);

    let tie = &games[2];
    assert_eq!(tie.start_date, None);
    assert_eq!(tie.home_points, Some(0));
    assert_eq!(tie.away_points, Some(0));
    assert_eq!(tie.home_postgame_win_probability, Some(0.5));
    assert_eq!(tie.notes.as_deref(), Some("Weather delay"));
    assert_eq!(tie.winner(), None);
}

#[tokio::test]
async fn test_games_without_year_fails_before_any_request() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client.games(&GamesRequest::default()).await.unwrap_err();

    match err {
        Error::MissingRequiredParameter {
            endpoint,
            parameter,
        } => {
            assert_eq!(endpoint, "/games");
            assert_eq!(parameter, "year");
        }
        other => panic!("expected MissingRequiredParameter, got {other:?}"),
    }

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_season_type_sent_on_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("seasonType", "postseason"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let req = GamesRequest::for_year(2023).season_type(SeasonType::Postseason);
    let games = client.games(&req).await.unwrap();

    assert!(games.is_empty());
}

// ============================================================================
// Lists and Objects
// ============================================================================

#[tokio::test]
async fn test_null_list_elements_are_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 130, "school": "Michigan", "conference": "Big Ten"},
            null,
            {"id": 194, "school": "Ohio State", "mascot": "Buckeyes"}
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let teams = client.teams(&TeamsRequest::default()).await.unwrap();

    let schools: Vec<&str> = teams.iter().map(|t| t.school.as_str()).collect();
    assert_eq!(schools, vec!["Michigan", "Ohio State"]);
    assert_eq!(teams[1].mascot.as_deref(), Some("Buckeyes"));
    assert_eq!(teams[1].conference, None);
}

#[tokio::test]
async fn test_unknown_fields_are_tolerated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rankings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "season": 2023,
                "seasonType": "regular",
                "week": 5,
                "brandNewField": {"nested": true},
                "polls": [{
                    "poll": "AP Top 25",
                    "ranks": [
                        {"rank": 1, "school": "Georgia", "firstPlaceVotes": 55, "points": 1567, "extra": 9}
                    ]
                }]
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let weeks = client
        .rankings(&RankingsRequest::for_year(2023))
        .await
        .unwrap();

    assert_eq!(weeks.len(), 1);
    let ap = weeks[0].poll("ap top 25").unwrap();
    assert_eq!(ap.ranks[0].school, "Georgia");
    assert_eq!(ap.ranks[0].first_place_votes, Some(55));
}

#[tokio::test]
async fn test_object_where_array_expected_is_decode_error() {
    let mock_server = MockServer::start().await;

    let body = json!({"team": "Alabama"});
    Mock::given(method("GET"))
        .and(path("/ratings/sp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .sp_ratings(&RatingsRequest::for_year(2023))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_matchup_decodes_single_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/matchup"))
        .and(query_param("team1", "Michigan"))
        .and(query_param("team2", "Ohio State"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "team1": "Michigan",
            "team2": "Ohio State",
            "team1Wins": 61,
            "team2Wins": 52,
            "ties": 6,
            "games": [
                {"season": 2023, "week": 13, "seasonType": "regular", "neutralSite": false,
                 "homeTeam": "Michigan", "homeScore": 30, "awayTeam": "Ohio State",
                 "awayScore": 24, "winner": "Michigan"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let matchup = client
        .matchup(&MatchupRequest::new("Michigan", "Ohio State"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(matchup.team1_wins, 61);
    assert_eq!(matchup.games.len(), 1);
    assert_eq!(matchup.games[0].winner.as_deref(), Some("Michigan"));
}

#[tokio::test]
async fn test_null_info_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.user_info().await.unwrap(), None);
}

#[tokio::test]
async fn test_info_decodes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"patronLevel": 2, "remainingCalls": 2950})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let info = client.user_info().await.unwrap().unwrap();
    assert_eq!(info.patron_level, 2);
    assert_eq!(info.remaining_calls, 2950);
}

#[tokio::test]
async fn test_stat_categories_are_strings() {
    let mock_server = MockServer::start().await;

    let body = json!(["defensive", "passing", "rushing"]);
    Mock::given(method("GET"))
        .and(path("/stats/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let categories = client.stat_categories().await.unwrap();
    assert_eq!(categories, vec!["defensive", "passing", "rushing"]);
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_not_found_keeps_full_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"not found"}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .games(&GamesRequest::for_year(2023))
        .await
        .unwrap_err();

    match err {
        Error::Api { status, body, .. } => {
            assert_eq!(status, 404);
            assert_eq!(body, r#"{"error":"not found"}"#);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_long_error_body_is_truncated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lines"))
        .respond_with(ResponseTemplate::new(500).set_body_string("x".repeat(1000)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .lines(&cfbd::LinesRequest {
            year: Some(2023),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(err.is_server_error());
    match err {
        Error::Api { body, .. } => {
            assert_eq!(body, format!("{}...(truncated)", "x".repeat(400)));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_per_request_timeout_override() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("null")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server)
        .with_request_options(RequestOptions::new().timeout(Duration::from_millis(100)));
    let err = client.user_info().await.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }), "got {err:?}");
}
