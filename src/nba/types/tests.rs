//! Unit tests for provider record decoding

use super::*;
use serde_json::json;

fn game_log_set(rows: Vec<Value>) -> ResultSet {
    let headers = [
        "SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP", "WL", "MIN", "PTS", "AST",
        "REB", "STL", "BLK",
    ];
    serde_json::from_value(json!({
        "name": "PlayerGameLog",
        "headers": headers,
        "rowSet": rows,
    }))
    .unwrap()
}

#[cfg(test)]
mod result_set_tests {
    use super::*;

    #[test]
    fn test_game_records_decode_by_header() {
        let set = game_log_set(vec![json!([
            "22023", 2544, "0022300061", "OCT 24, 2023", "LAL @ DEN", "L", 29, 21, 5, 8, 1, 0
        ])]);

        let records: Vec<GameRecord> = set.records().unwrap();
        assert_eq!(records.len(), 1);
        let game = &records[0];
        assert_eq!(game.game_id.as_deref(), Some("0022300061"));
        assert_eq!(game.game_date, "OCT 24, 2023");
        assert_eq!(game.matchup, "LAL @ DEN");
        assert_eq!(game.win_loss, Some(WinLoss::Loss));
        assert_eq!(game.points, Some(21));
        assert_eq!(game.assists, Some(5));
        assert_eq!(game.rebounds, Some(8));
        assert_eq!(game.steals, Some(1));
        assert_eq!(game.blocks, Some(0));
    }

    #[test]
    fn test_null_and_float_stats() {
        let set = game_log_set(vec![json!([
            "22023", 2544, "0022300062", "OCT 26, 2023", "LAL vs. PHX", null, 30, 18.0, null, 7, null, 2
        ])]);

        let records: Vec<GameRecord> = set.records().unwrap();
        let game = &records[0];
        assert_eq!(game.win_loss, None);
        assert_eq!(game.points, Some(18));
        assert_eq!(game.assists, None);
        assert_eq!(game.steals, None);
        assert_eq!(game.blocks, Some(2));
    }

    #[test]
    fn test_unknown_win_loss_is_none() {
        let set = game_log_set(vec![json!([
            "22023", 2544, "1", "OCT 26, 2023", "LAL vs. PHX", "T", 30, 18, 1, 7, 0, 2
        ])]);
        let records: Vec<GameRecord> = set.records().unwrap();
        assert_eq!(records[0].win_loss, None);
    }

    #[test]
    fn test_null_date_row_is_rejected_not_fatal() {
        use crate::analytics::game_log::{process, GameLogFilters};

        let set = game_log_set(vec![
            json!(["22023", 2544, "0022301195", "APR 14, 2024", "LAL @ NOP", "W", 40, 28, 17, 11, 1, 1]),
            json!(["22023", 2544, "0022301180", null, "LAL vs. MEM", "W", 38, 37, 5, 7, 2, 0]),
            json!(["22023", 2544, "0022301170", 20240410, null, "L", 35, 25, 9, 8, 1, 1]),
        ]);

        let records: Vec<GameRecord> = set.records().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].game_date, "");
        assert_eq!(records[2].game_date, "20240410");
        assert_eq!(records[2].matchup, "");

        let log = process(&records, &GameLogFilters::default()).unwrap();
        assert_eq!(log.rows.len(), 1);
        assert_eq!(log.rows[0].matchup, "LAL @ NOP");
        let rejected: Vec<usize> = log.rejected.iter().map(|r| r.index).collect();
        assert_eq!(rejected, vec![1, 2]);
        assert_eq!(log.rejected[0].game_id.as_deref(), Some("0022301180"));
    }

    #[test]
    fn test_negative_stat_is_malformed() {
        let set = game_log_set(vec![json!([
            "22023", 2544, "1", "OCT 26, 2023", "LAL vs. PHX", "W", 30, -3, 1, 7, 0, 2
        ])]);
        match set.records::<GameRecord>() {
            Err(StatsError::MalformedUpstreamData { message }) => {
                assert!(message.contains("PlayerGameLog row 0"));
            }
            other => panic!("Expected MalformedUpstreamData, got {other:?}"),
        }
    }

    #[test]
    fn test_row_length_mismatch_is_malformed() {
        let set = game_log_set(vec![json!(["22023", 2544])]);
        let err = set.records::<GameRecord>().unwrap_err();
        assert!(err.to_string().contains("2 values for 12 headers"));
    }

    #[test]
    fn test_empty_row_set() {
        let set = game_log_set(vec![]);
        let records: Vec<GameRecord> = set.records().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_result_set() {
        let response: StatsResponse = serde_json::from_value(json!({
            "resource": "playergamelog",
            "resultSets": []
        }))
        .unwrap();
        let err = response.result_set("PlayerGameLog").unwrap_err();
        assert!(matches!(err, StatsError::MalformedUpstreamData { .. }));
    }
}

#[cfg(test)]
mod record_shape_tests {
    use super::*;

    #[test]
    fn test_season_totals_project_to_snake_case() {
        let set: ResultSet = serde_json::from_value(json!({
            "name": "SeasonTotalsRegularSeason",
            "headers": ["PLAYER_ID", "SEASON_ID", "TEAM_ABBREVIATION", "GP", "PTS", "AST", "REB", "STL", "BLK"],
            "rowSet": [[2544, "2003-04", "CLE", 79, 1654, 465, 432, 130, 58]]
        }))
        .unwrap();

        let totals: Vec<SeasonTotals> = set.records().unwrap();
        let out = serde_json::to_value(&totals[0]).unwrap();
        assert_eq!(
            out,
            json!({
                "season_id": "2003-04",
                "points": 1654,
                "assists": 465,
                "rebounds": 432,
                "steals": 130,
                "blocks": 58
            })
        );
    }

    #[test]
    fn test_player_bio_decode() {
        let set: ResultSet = serde_json::from_value(json!({
            "name": "CommonPlayerInfo",
            "headers": ["PERSON_ID", "DISPLAY_FIRST_LAST", "BIRTHDATE", "SCHOOL", "HEIGHT", "WEIGHT",
                        "SEASON_EXP", "TEAM_ID", "TEAM_NAME", "TEAM_ABBREVIATION"],
            "rowSet": [[2544, "LeBron James", "1984-12-30T00:00:00", "St. Vincent-St. Mary HS (OH)",
                        "6-9", "250", 21, 1610612747, "Lakers", "LAL"]]
        }))
        .unwrap();

        let bio: Vec<PlayerBio> = set.records().unwrap();
        let bio = &bio[0];
        assert_eq!(bio.display_name, "LeBron James");
        assert_eq!(bio.team_abbr.as_deref(), Some("LAL"));
        assert_eq!(bio.seasons_experience, Some(21));
        assert_eq!(bio.team_id, Some(1610612747));

        let out = serde_json::to_value(bio).unwrap();
        assert_eq!(out["display_name"], "LeBron James");
        assert_eq!(out["weight"], "250");
    }

    #[test]
    fn test_roster_entry_flags() {
        let set: ResultSet = serde_json::from_value(json!({
            "name": "CommonAllPlayers",
            "headers": ["PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST", "ROSTERSTATUS"],
            "rowSet": [
                [2544, "James, LeBron", "LeBron James", 1],
                [893, "Jordan, Michael", "Michael Jordan", 0],
                [977, "Bryant, Kobe", "Kobe Bryant", "1"],
                [1, "Nobody, A", "A Nobody", null]
            ]
        }))
        .unwrap();

        let roster: Vec<RosterEntry> = set.records().unwrap();
        assert_eq!(roster[0], RosterEntry::new(2544, "LeBron James", true));
        assert!(!roster[1].is_active);
        assert!(roster[2].is_active);
        assert!(!roster[3].is_active);
    }
}
