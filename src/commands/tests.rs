//! Unit tests for command handlers against an in-memory source

use super::{
    player_games::{handle_player_games, PlayerGamesParams},
    player_profile::{handle_player_bio, handle_player_seasons, handle_player_stats},
    suggestions::handle_suggestions,
    *,
};
use crate::{
    analytics::game_log::GameLogFilters,
    cli::types::{LocationFilter, Season},
    nba::{
        types::{GameRecord, PlayerBio, RosterEntry, SeasonTotals, WinLoss},
        FixtureSource,
    },
};

fn season_totals(season_id: &str, points: u32) -> SeasonTotals {
    SeasonTotals {
        season_id: season_id.to_string(),
        points: Some(points),
        assists: None,
        rebounds: None,
        steals: None,
        blocks: None,
    }
}

fn game(date: &str, matchup: &str, points: u32) -> GameRecord {
    GameRecord {
        game_id: None,
        game_date: date.to_string(),
        matchup: matchup.to_string(),
        win_loss: Some(WinLoss::Win),
        points: Some(points),
        assists: Some(1),
        rebounds: Some(2),
        steals: Some(0),
        blocks: Some(0),
    }
}

fn source() -> FixtureSource {
    let lebron = PlayerId::new(2544);
    FixtureSource::default()
        .with_player(RosterEntry::new(2544, "LeBron James", true))
        .with_player(RosterEntry::new(2037, "Jamal Crawford", false))
        .with_player(RosterEntry::new(201935, "James Harden", true))
        .with_player(RosterEntry::new(1, "Rookie Nobody", true))
        .with_career_stats(
            lebron,
            vec![
                season_totals("2003-04", 1654),
                season_totals("2004-05", 2175),
                season_totals("2004-05", 3),
            ],
        )
        .with_game_log(
            lebron,
            Season::new(2023),
            vec![
                game("APR 14, 2024", "LAL @ NOP", 28),
                game("APR 12, 2024", "LAL vs. MEM", 37),
                game("garbled", "LAL vs. MEM", 0),
            ],
        )
        .with_bio(
            lebron,
            PlayerBio {
                display_name: "LeBron James".to_string(),
                team_name: Some("Lakers".to_string()),
                team_abbr: Some("LAL".to_string()),
                birthdate: None,
                height: None,
                weight: None,
                school: None,
                seasons_experience: Some(21),
                team_id: Some(1610612747),
            },
        )
}

#[cfg(test)]
mod param_tests {
    use super::*;

    #[test]
    fn test_require_param() {
        assert_eq!(require_param("name", Some("LeBron".into())).unwrap(), "LeBron");

        for missing in [None, Some(String::new()), Some("   ".to_string())] {
            match require_param("name", missing) {
                Err(StatsError::MissingParameter { name }) => assert_eq!(name, "name"),
                other => panic!("Expected MissingParameter, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_resolve_player_id() {
        let source = source();
        assert_eq!(
            resolve_player_id(&source, "LeBron James").await.unwrap(),
            PlayerId::new(2544)
        );
        match resolve_player_id(&source, "Wilt Chamberlain").await {
            Err(StatsError::PlayerNotFound { name }) => assert_eq!(name, "Wilt Chamberlain"),
            other => panic!("Expected PlayerNotFound, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod handler_tests {
    use super::*;

    #[tokio::test]
    async fn test_player_games_filters_and_reports() {
        let params = PlayerGamesParams {
            name: "lebron james".to_string(),
            season: Season::new(2023),
            filters: GameLogFilters {
                location: LocationFilter::Home,
                ..Default::default()
            },
        };
        let out = handle_player_games(&source(), &params).await.unwrap();

        assert_eq!(out.rows.len(), 1);
        assert_eq!(out.rows[0].points, Some(37));
        assert_eq!(out.rejected.len(), 1);
        assert_eq!(out.rejected[0].game_date, "garbled");
    }

    #[tokio::test]
    async fn test_player_games_other_season_is_empty() {
        let params = PlayerGamesParams {
            name: "LeBron James".to_string(),
            season: Season::new(2010),
            ..Default::default()
        };
        let out = handle_player_games(&source(), &params).await.unwrap();
        assert!(out.rows.is_empty());
        assert!(out.rejected.is_empty());
    }

    #[tokio::test]
    async fn test_player_stats_passthrough() {
        let stats = handle_player_stats(&source(), "LeBron James").await.unwrap();
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].season_id, "2003-04");
    }

    #[tokio::test]
    async fn test_player_stats_without_career_rows_is_not_found() {
        match handle_player_stats(&source(), "Rookie Nobody").await {
            Err(StatsError::PlayerNotFound { name }) => assert_eq!(name, "Rookie Nobody"),
            other => panic!("Expected PlayerNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_player_seasons_distinct_newest_first() {
        let seasons = handle_player_seasons(&source(), "LeBron James").await.unwrap();
        assert_eq!(seasons, vec!["2004-05", "2003-04"]);
    }

    #[tokio::test]
    async fn test_player_seasons_empty_is_error() {
        match handle_player_seasons(&source(), "Rookie Nobody").await {
            Err(StatsError::NoSeasons { name }) => assert_eq!(name, "Rookie Nobody"),
            other => panic!("Expected NoSeasons, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_player_bio() {
        let bio = handle_player_bio(&source(), "LeBron").await.unwrap();
        assert_eq!(bio.display_name, "LeBron James");
        assert_eq!(bio.seasons_experience, Some(21));
    }

    #[tokio::test]
    async fn test_suggestions() {
        let names = handle_suggestions(&source(), "jam").await.unwrap();
        assert_eq!(names, vec!["James Harden", "LeBron James", "Jamal Crawford"]);
        assert!(handle_suggestions(&source(), "").await.unwrap().is_empty());
        assert_eq!(
            handle_suggestions(&source(), "james ").await.unwrap(),
            vec!["James Harden"]
        );
    }
}
